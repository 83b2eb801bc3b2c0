pub mod config;
pub mod error;
pub mod geology;
pub mod history;
pub mod scene;
pub mod services;
pub mod web;

pub use config::{ConfigLoader, ServiceConfig};
pub use error::{ApiError, ServiceError};
pub use geology::{analyze_location, ElevationSource, GeoAnalysis};
pub use history::{analyze_location_type, LocationAnalysis, TimePeriod};
pub use scene::{compose_scene, Scene, SceneReport, ViewAnalysis};
