//! Image-generation prompt construction.

use serde::Serialize;

use super::exclusions::historical_exclusions;
use crate::geology::{GeoAnalysis, Salinity};
use crate::history::{city_description, period_clothing, LocationAnalysis, LocationType, TimePeriod};

/// What the vision step saw in the user's photograph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAnalysis {
    pub description: String,
    /// Details of the person in frame, if one was detected.
    pub person: Option<String>,
}

impl ViewAnalysis {
    pub fn has_person(&self) -> bool {
        self.person.is_some()
    }
}

pub const CLOSING_CLAUSE: &str =
    "Photorealistic, natural lighting, documentary style. Strict historical accuracy required. No anachronisms.";

/// Builds the prompt for one scene. Deterministic: identical inputs always
/// produce identical text.
pub fn generate_image_prompt(
    period: &TimePeriod,
    location: &LocationAnalysis,
    geo: Option<&GeoAnalysis>,
    view: &ViewAnalysis,
) -> String {
    let mut prompt = String::new();

    match geo.filter(|g| g.sea_status.was_underwater) {
        Some(geo) => underwater_scene(&mut prompt, period, geo),
        None => land_scene(&mut prompt, period, location, &view.description),
    }

    if let Some(details) = view.person.as_deref().filter(|d| !d.is_empty()) {
        let clothing = period_clothing(period.year_start);
        prompt.push_str(&format!(
            "\n\nIMPORTANT - PERSON TRANSFORMATION: \
             There is a person in this image ({details}). \
             KEEP their face, body position, and pose EXACTLY the same. \
             TRANSFORM their clothing, hairstyle, and accessories to match {}: \
             {}. Hair: {}. Accessories: {}. \
             DO NOT change the person's facial features, expression, or body position. \
             ONLY change their outfit and hairstyle to be historically accurate. ",
            period.name, clothing.description, clothing.hair, clothing.accessories
        ));
    }

    prompt.push_str(CLOSING_CLAUSE);
    prompt
}

fn underwater_scene(prompt: &mut String, period: &TimePeriod, geo: &GeoAnalysis) {
    let status = &geo.sea_status;
    prompt.push_str(&format!(
        "Underwater scene, viewing from beneath the water surface. \
         This location is submerged under {} meters of water. \
         Time period: {}, {} in Scandinavia. ",
        status.depth().round(),
        period.year_label,
        status.sea_phase.name
    ));

    prompt.push_str(match status.sea_phase.salinity {
        Salinity::Freshwater => {
            "Clear freshwater environment. Sandy or rocky bottom visible. \
             Aquatic plants like pondweed and water lilies. Pike, perch, and bream swimming. \
             NO trees, NO grass, NO land animals - this is completely underwater. "
        }
        Salinity::Brackish => {
            "Murky brackish water with greenish tint and limited visibility. \
             Seaweed, algae on rocks. Cod, herring, flounder near the bottom. \
             NO trees, NO land vegetation - only marine and brackish water life. "
        }
        Salinity::Marine => {
            "Clear saltwater marine environment. \
             Kelp and seaweed attached to rocks. Schools of herring, cod. Seals visible. \
             NO trees, NO terrestrial plants - purely marine ecosystem. "
        }
    });

    prompt.push_str(
        "Sunlight filtering down from the surface above, creating light rays through water. \
         Realistic underwater photography style. Bubbles, particles in water. ",
    );
}

fn land_scene(prompt: &mut String, period: &TimePeriod, location: &LocationAnalysis, view_description: &str) {
    let features = &period.features;
    prompt.push_str(&format!(
        "Historical scene from {} ({}) in Scandinavia. ",
        period.name, period.year_label
    ));

    match (location.existing_city(), location.location_type) {
        (Some(city), _) => {
            prompt.push_str(&format!(
                "Urban scene in {}: {}. Architecture: ONLY {}. People: {}. {} ",
                city.name,
                period.landscape.urban,
                features.buildings,
                features.people,
                city_description(city, period.year_start)
            ));
        }
        (None, LocationType::Coastal) => {
            prompt.push_str(&format!(
                "Coastal Scandinavian scene: {}. Structures: ONLY {}. Coastal activity: fishing, {}. ",
                period.landscape.coastal, features.buildings, features.people
            ));
        }
        (None, _) => {
            prompt.push_str(&format!(
                "Rural Scandinavian landscape: {}. Dwellings: ONLY {}. People: {}. ",
                period.landscape.rural, features.buildings, features.people
            ));
        }
    }

    prompt.push_str(&format!(
        "Flora: ONLY {}. Fauna: {}. Tools and technology: ONLY {}. ",
        features.vegetation, features.animals, features.technology
    ));

    let exclusions = historical_exclusions(period.year_start);
    if !exclusions.is_empty() {
        prompt.push_str(&format!("CRITICAL - DO NOT INCLUDE: {}. ", exclusions.join(", ")));
    }

    if !view_description.is_empty() {
        prompt.push_str(&format!("Match this composition: {view_description}. "));
    }
}
