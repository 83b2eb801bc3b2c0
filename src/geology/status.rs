//! Was a coordinate under water at a given time, and by how much.

use serde::Serialize;

use super::sea::{sea_phase, Salinity, SeaPhase};
use super::uplift::total_uplift;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaStatus {
    pub was_underwater: bool,
    pub historical_elevation: f64,
    pub sea_level: f64,
    pub sea_phase: &'static SeaPhase,
    pub uplift_meters: f64,
    pub description: String,
}

impl SeaStatus {
    /// Metres of water above the point; zero when it was dry land.
    pub fn depth(&self) -> f64 {
        if self.was_underwater {
            self.sea_level - self.historical_elevation
        } else {
            0.0
        }
    }
}

pub fn historical_sea_status(current_elevation: f64, lat: f64, lng: f64, years_bp: f64) -> SeaStatus {
    let uplift_meters = total_uplift(lat, lng, years_bp);
    let phase = sea_phase(years_bp);
    let historical_elevation = current_elevation - uplift_meters;
    let was_underwater = historical_elevation < phase.sea_level;

    let description = if was_underwater {
        let depth = phase.sea_level - historical_elevation;
        let water = match phase.salinity {
            Salinity::Freshwater => "Vattnet var sött.",
            Salinity::Brackish => "Vattnet var bräckt.",
            Salinity::Marine => "Vattnet var salt, liknande Nordsjön.",
        };
        format!(
            "Denna plats låg {} meter under {}s yta. {}. {}",
            depth.round(),
            phase.name,
            phase.description,
            water
        )
    } else {
        format!(
            "Denna plats var land, {} meter över {}s yta. Sedan dess har marken höjts cirka {} meter på grund av landhöjning efter istiden.",
            (historical_elevation - phase.sea_level).round(),
            phase.name,
            uplift_meters
        )
    };

    SeaStatus {
        was_underwater,
        historical_elevation,
        sea_level: phase.sea_level,
        sea_phase: phase,
        uplift_meters,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (55.0, 12.0) sits in the Danish bucket, which has no uplift.
    const FLAT_LAT: f64 = 55.0;
    const FLAT_LNG: f64 = 12.0;

    #[test]
    fn dry_land_above_littorina_level() {
        let status = historical_sea_status(10.0, FLAT_LAT, FLAT_LNG, 7_000.0);
        assert_eq!(status.sea_phase.name, "Littorinahavet (tidig)");
        assert_eq!(status.uplift_meters, 0.0);
        assert_eq!(status.historical_elevation, 10.0);
        assert!(!status.was_underwater);
        assert_eq!(status.depth(), 0.0);
        assert!(status.description.starts_with("Denna plats var land, 5 meter över"));
    }

    #[test]
    fn low_ground_is_flooded_by_salt_water() {
        let status = historical_sea_status(3.0, FLAT_LAT, FLAT_LNG, 7_000.0);
        assert!(status.was_underwater);
        assert_eq!(status.depth(), 2.0);
        assert!(status.description.starts_with("Denna plats låg 2 meter under"));
        assert!(status.description.ends_with("Vattnet var salt, liknande Nordsjön."));
    }

    #[test]
    fn uplift_is_subtracted_from_current_elevation() {
        // 4500 y * 0.034 + 5000 y * 0.0085 = 195.5
        let status = historical_sea_status(200.0, 63.0, 18.0, 9_500.0);
        assert_eq!(status.sea_phase.name, "Ancylussjön");
        assert_eq!(status.uplift_meters, 196.0);
        assert_eq!(status.historical_elevation, 4.0);
        assert!(!status.was_underwater);
        assert!(status.description.contains("cirka 196 meter"));
    }

    #[test]
    fn ages_beyond_the_table_use_todays_sea_level() {
        let status = historical_sea_status(10.0, FLAT_LAT, FLAT_LNG, 15_000.0);
        assert_eq!(status.sea_phase.name, "Postlittorina/Östersjön");
        assert_eq!(status.sea_level, 0.0);
        assert!(!status.was_underwater);
    }
}
