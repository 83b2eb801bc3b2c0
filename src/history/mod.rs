//! Human history: period catalog, settlements, location classes and dress.

pub mod cities;
pub mod clothing;
pub mod location;
pub mod periods;

pub use cities::{haversine_km, nearest_city, CityInfo, HistoricalType, SWEDISH_CITIES};
pub use clothing::{period_clothing, PeriodClothing};
pub use location::{
    analyze_location_type, city_description, format_year, is_near_coast, LocationAnalysis,
    LocationType,
};
pub use periods::{
    period_by_id, period_or_default, periods_by_era, Era, EraGroup, Features, Landscape,
    TimePeriod, TIME_PERIODS,
};
