//! Geological reconstruction: uplift, Baltic sea stages and elevation.

pub mod analysis;
pub mod elevation;
pub mod sea;
pub mod status;
pub mod uplift;

pub use analysis::{
    analyze_all_periods, analyze_location, reconstruct, stone_period, GeoAnalysis, StonePeriod,
    STONE_AGE_PERIODS,
};
pub use elevation::{
    elevation_or_estimate, estimate_elevation, ElevationError, ElevationSource, OfflineElevation,
    OpenElevation,
};
pub use sea::{sea_phase, Salinity, SeaPhase, BALTIC_SEA_PHASES};
pub use status::{historical_sea_status, SeaStatus};
pub use uplift::{region_for, total_uplift, Region};
