//! Present-day elevation lookup with a regional fallback.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::uplift::{region_for, Region};

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("elevation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("elevation service returned HTTP {0}")]
    Status(u16),

    #[error("elevation response carried no result")]
    MissingResult,

    #[error("elevation lookups are disabled")]
    Disabled,
}

/// Anything that can report metres above sea level for a coordinate.
pub trait ElevationSource: Send + Sync {
    fn elevation(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = Result<f64, ElevationError>> + Send;
}

/// Client for the Open-Elevation lookup API.
pub struct OpenElevation {
    client: Client,
    url: String,
}

impl OpenElevation {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ElevationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
struct LookupResult {
    elevation: Option<f64>,
}

impl ElevationSource for OpenElevation {
    async fn elevation(&self, lat: f64, lng: f64) -> Result<f64, ElevationError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("locations", format!("{lat},{lng}"))])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ElevationError::Status(response.status().as_u16()));
        }

        let body: LookupResponse = response.json().await?;
        body.results
            .first()
            .and_then(|r| r.elevation)
            .ok_or(ElevationError::MissingResult)
    }
}

/// Never reaches the network; every lookup falls back to the estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineElevation;

impl ElevationSource for OfflineElevation {
    async fn elevation(&self, _lat: f64, _lng: f64) -> Result<f64, ElevationError> {
        Err(ElevationError::Disabled)
    }
}

pub const DEFAULT_ELEVATION_ESTIMATE: f64 = 50.0;

const ELEVATION_ESTIMATES: &[(Region, f64)] = &[
    (Region::HogaKusten, 50.0),
    (Region::NorrlandKust, 30.0),
    (Region::NorrlandInland, 300.0),
    (Region::SvealandKust, 20.0),
    (Region::Stockholm, 15.0),
    (Region::Gotland, 30.0),
    (Region::GotalandVast, 50.0),
    (Region::GotalandOst, 100.0),
    (Region::Skane, 50.0),
    (Region::Danmark, 20.0),
];

/// Typical elevation of the uplift region containing the coordinate.
pub fn estimate_elevation(lat: f64, lng: f64) -> f64 {
    let region = region_for(lat, lng);
    ELEVATION_ESTIMATES
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, metres)| *metres)
        .unwrap_or(DEFAULT_ELEVATION_ESTIMATE)
}

/// Asks `source` once and substitutes the regional estimate on any failure.
pub async fn elevation_or_estimate<E: ElevationSource>(source: &E, lat: f64, lng: f64) -> f64 {
    match source.elevation(lat, lng).await {
        Ok(metres) => metres,
        Err(ElevationError::Disabled) => estimate_elevation(lat, lng),
        Err(err) => {
            tracing::warn!(lat, lng, error = %err, "elevation lookup failed, using regional estimate");
            estimate_elevation(lat, lng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl ElevationSource for Fixed {
        async fn elevation(&self, _lat: f64, _lng: f64) -> Result<f64, ElevationError> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl ElevationSource for Broken {
        async fn elevation(&self, _lat: f64, _lng: f64) -> Result<f64, ElevationError> {
            Err(ElevationError::Status(503))
        }
    }

    #[test]
    fn every_region_has_an_estimate() {
        for region in Region::ALL {
            assert!(ELEVATION_ESTIMATES.iter().any(|(r, _)| *r == region));
        }
    }

    #[test]
    fn estimates_follow_region() {
        assert_eq!(estimate_elevation(59.3293, 18.0686), 15.0);
        assert_eq!(estimate_elevation(65.0, 15.0), 300.0);
        assert_eq!(estimate_elevation(55.0, 12.0), 20.0);
    }

    #[tokio::test]
    async fn successful_lookup_is_used_verbatim() {
        assert_eq!(elevation_or_estimate(&Fixed(-2.5), 59.3, 18.0).await, -2.5);
    }

    #[tokio::test]
    async fn failures_fall_back_to_estimate() {
        assert_eq!(elevation_or_estimate(&Broken, 59.3293, 18.0686).await, 15.0);
        assert_eq!(
            elevation_or_estimate(&OfflineElevation, 57.8, 14.2).await,
            100.0
        );
    }

    #[tokio::test]
    async fn unreachable_service_falls_back_to_estimate() {
        let source = OpenElevation::new("http://127.0.0.1:9/lookup", Duration::from_millis(200))
            .expect("client builds");
        assert_eq!(elevation_or_estimate(&source, 55.6, 13.0).await, 50.0);
    }
}
