//! Runs the reconstruction pipeline for one coordinate and period, and
//! shapes the result for callers.

use serde::Serialize;

use super::prompt::{generate_image_prompt, ViewAnalysis};
use crate::geology::{analyze_location, stone_period, ElevationSource, GeoAnalysis, Salinity, StonePeriod};
use crate::history::{
    analyze_location_type, period_clothing, period_or_default, LocationAnalysis, LocationType,
    TimePeriod,
};

/// Stone Age geology used for each prehistoric or ancient period.
const GEOLOGICAL_PERIOD_MAP: &[(&str, &str)] = &[
    ("stone_early", "boreal"),
    ("stone_middle", "atlantic_early"),
    ("stone_late", "atlantic_late"),
    ("bronze", "subboreal"),
    ("iron_early", "subboreal"),
    ("iron_late", "subboreal"),
];

/// `None` for periods recent enough that shoreline displacement is ignored.
pub fn geological_period_for(period: &TimePeriod) -> Option<&'static StonePeriod> {
    if !period.era.is_geological() {
        return None;
    }
    let id = GEOLOGICAL_PERIOD_MAP
        .iter()
        .find(|(scene_id, _)| *scene_id == period.id)
        .map(|(_, stone_id)| *stone_id)
        .unwrap_or("atlantic_early");
    Some(stone_period(id))
}

/// Everything the reconstruction engine produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub period: &'static TimePeriod,
    pub location: LocationAnalysis,
    pub geology: Option<GeoAnalysis>,
    pub prompt: String,
}

impl Scene {
    /// Pure assembly once geology (if any) has been resolved.
    pub fn assemble(
        period: &'static TimePeriod,
        lat: f64,
        lng: f64,
        geology: Option<GeoAnalysis>,
        view: &ViewAnalysis,
    ) -> Self {
        let location = analyze_location_type(lat, lng, period.year_start);
        let prompt = generate_image_prompt(period, &location, geology.as_ref(), view);
        Self {
            period,
            location,
            geology,
            prompt,
        }
    }

    pub fn landscape(&self) -> &'static str {
        let landscape = &self.period.landscape;
        if self.location.existing_city().is_some() {
            landscape.urban
        } else if self.location.location_type == LocationType::Coastal {
            landscape.coastal
        } else {
            landscape.rural
        }
    }

    /// Text sent with the photo (or alone) to the image model.
    pub fn image_instruction(&self, has_photo: bool, view: &ViewAnalysis) -> String {
        let period = self.period;
        match (has_photo, view.has_person()) {
            (true, true) => {
                let clothing = period_clothing(period.year_start);
                format!(
                    "COSTUME CHANGE ONLY - Keep the exact same person, same face, same pose, same background composition.\n\n\
                     TASK: Change ONLY this person's clothes and hair to {} ({}) Scandinavian style.\n\n\
                     NEW OUTFIT: {}\nNEW HAIRSTYLE: {}\nACCESSORIES: {}\n\n\
                     KEEP UNCHANGED: The person's face, skin, eyes, expression, body position, hands, and the general composition.\n\n\
                     This is like a movie costume department changing an actor's wardrobe - same person, different historical clothes.",
                    period.name, period.year_label, clothing.description, clothing.hair, clothing.accessories
                )
            }
            (true, false) => format!(
                "Transform this image to show how this exact location and view would have looked during {} ({}) in Scandinavia. \
                 Keep the same composition, viewing angle, and horizon line, but replace all modern elements with the historical scene. {}",
                period.name, period.year_label, self.prompt
            ),
            (false, _) => format!("Generate a photorealistic image: {}", self.prompt),
        }
    }
}

/// Classifies the location, resolves geology for old enough periods and
/// composes the prompt. Unknown period ids fall back to the oldest period.
pub async fn compose_scene<E: ElevationSource>(
    elevation: &E,
    lat: f64,
    lng: f64,
    period_id: &str,
    view: &ViewAnalysis,
) -> Scene {
    let period = period_or_default(period_id);
    let geology = match geological_period_for(period) {
        Some(stone) => Some(analyze_location(elevation, lat, lng, stone.id).await),
        None => None,
    };
    Scene::assemble(period, lat, lng, geology, view)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaPhaseSummary {
    pub name: &'static str,
    pub salinity: Salinity,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeologicalData {
    pub current_elevation: f64,
    pub region: crate::geology::Region,
    pub was_underwater: bool,
    pub historical_elevation: f64,
    pub sea_level: f64,
    pub total_uplift: f64,
    pub sea_phase: SeaPhaseSummary,
}

impl From<&GeoAnalysis> for GeologicalData {
    fn from(geo: &GeoAnalysis) -> Self {
        let status = &geo.sea_status;
        Self {
            current_elevation: geo.elevation,
            region: geo.region,
            was_underwater: status.was_underwater,
            historical_elevation: status.historical_elevation,
            sea_level: status.sea_level,
            total_uplift: status.uplift_meters,
            sea_phase: SeaPhaseSummary {
                name: status.sea_phase.name,
                salinity: status.sea_phase.salinity,
                description: status.sea_phase.description,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalContext {
    pub landscape: &'static str,
    pub vegetation: &'static str,
    pub fauna: &'static str,
    pub buildings: &'static str,
    pub people: &'static str,
    pub technology: &'static str,
    pub location_analysis: Option<String>,
}

/// Caller-facing summary of a [`Scene`], without the generated image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneReport {
    pub period: &'static str,
    pub period_id: &'static str,
    pub year_range: &'static str,
    /// Years before present of the period start.
    pub years_bp: u32,
    pub description: &'static str,
    pub location_type: LocationType,
    pub location_description: String,
    pub nearest_city: Option<&'static str>,
    pub distance_to_city: f64,
    pub city_existed_in_period: bool,
    pub geological_data: Option<GeologicalData>,
    pub historical_context: HistoricalContext,
    pub image_prompt: String,
    pub view_description: String,
}

impl SceneReport {
    pub fn new(scene: &Scene, view: &ViewAnalysis) -> Self {
        let period = scene.period;
        let features = &period.features;
        Self {
            period: period.name,
            period_id: period.id,
            year_range: period.year_label,
            years_bp: period.years_bp(),
            description: period.description,
            location_type: scene.location.location_type,
            location_description: scene.location.historical_description.clone(),
            nearest_city: scene.location.nearest_city.map(|city| city.name),
            distance_to_city: scene.location.distance_to_city,
            city_existed_in_period: scene.location.city_existed_in_period,
            geological_data: scene.geology.as_ref().map(GeologicalData::from),
            historical_context: HistoricalContext {
                landscape: scene.landscape(),
                vegetation: features.vegetation,
                fauna: features.animals,
                buildings: features.buildings,
                people: features.people,
                technology: features.technology,
                location_analysis: scene
                    .geology
                    .as_ref()
                    .map(|geo| geo.sea_status.description.clone()),
            },
            image_prompt: scene.prompt.clone(),
            view_description: view.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geology::OfflineElevation;

    #[test]
    fn only_old_eras_map_to_geology() {
        let early = geological_period_for(period_or_default("stone_early")).unwrap();
        assert_eq!(early.id, "boreal");
        let iron = geological_period_for(period_or_default("iron_late")).unwrap();
        assert_eq!(iron.id, "subboreal");
        assert!(geological_period_for(period_or_default("viking")).is_none());
        assert!(geological_period_for(period_or_default("early_1900s")).is_none());
    }

    #[tokio::test]
    async fn recent_periods_skip_geology() {
        let scene = compose_scene(&OfflineElevation, 59.3293, 18.0686, "industrial", &ViewAnalysis::default()).await;
        assert!(scene.geology.is_none());
        assert_eq!(scene.location.location_type, LocationType::Urban);
        assert_eq!(scene.landscape(), "Fabriker, arbetarbostäder, stationssamhällen");
    }

    #[tokio::test]
    async fn unknown_period_uses_the_oldest() {
        let scene = compose_scene(&OfflineElevation, 57.3, 14.6, "nope", &ViewAnalysis::default()).await;
        assert_eq!(scene.period.id, "stone_early");
        assert_eq!(scene.geology.as_ref().map(|g| g.period.id), Some("boreal"));
    }

    #[tokio::test]
    async fn report_carries_geology_and_context() {
        let view = ViewAnalysis {
            description: "forest edge".into(),
            person: None,
        };
        let scene = compose_scene(&OfflineElevation, 57.3, 14.6, "stone_middle", &view).await;
        let report = SceneReport::new(&scene, &view);
        assert_eq!(report.period_id, "stone_middle");
        assert_eq!(report.years_bp, 6_000);
        assert_eq!(report.view_description, "forest edge");
        let geo = report.geological_data.expect("geology for neolithic");
        assert_eq!(geo.current_elevation, 100.0);
        assert!(report.historical_context.location_analysis.is_some());
        assert_eq!(report.historical_context.landscape, "Öppnare landskap, små åkrar, betesmarker, lövskog");
    }

    #[test]
    fn image_instruction_variants() {
        let scene = Scene::assemble(period_or_default("viking"), 57.3, 14.6, None, &ViewAnalysis::default());
        let without_photo = scene.image_instruction(false, &ViewAnalysis::default());
        assert!(without_photo.starts_with("Generate a photorealistic image: Historical scene"));

        let with_photo = scene.image_instruction(true, &ViewAnalysis::default());
        assert!(with_photo.starts_with("Transform this image"));
        assert!(with_photo.ends_with(&scene.prompt));

        let person = ViewAnalysis {
            description: String::new(),
            person: Some("man".into()),
        };
        let costume = scene.image_instruction(true, &person);
        assert!(costume.starts_with("COSTUME CHANGE ONLY"));
        assert!(costume.contains("NEW OUTFIT: Viking-age clothing"));
    }
}
