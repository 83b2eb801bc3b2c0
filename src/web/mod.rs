//! HTTP surface: geology lookups, scene generation and the period catalogs.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    config::{openrouter_api_key, ServiceConfig},
    error::{ApiError, ApiResult, ServiceError},
    geology::{
        analyze_all_periods, analyze_location, region_for, ElevationSource, GeoAnalysis,
        OpenElevation, Region, StonePeriod, STONE_AGE_PERIODS,
    },
    history::{periods_by_era, EraGroup},
    scene::{compose_scene, SceneReport, ViewAnalysis},
    services::{GeneratedImage, OpenRouterClient},
};

const DEFAULT_GEOLOGY_PERIOD: &str = "atlantic_early";
const MISSING_COORDINATES: &str = "Latitude och longitude krävs";
const MISSING_API_KEY: &str = "OpenRouter API-nyckel saknas";

pub struct AppState<E> {
    pub elevation: Arc<E>,
    /// Absent when no API key is configured; scene generation then fails.
    pub openrouter: Option<OpenRouterClient>,
}

impl<E> AppState<E> {
    pub fn new(elevation: E, openrouter: Option<OpenRouterClient>) -> Self {
        Self {
            elevation: Arc::new(elevation),
            openrouter,
        }
    }
}

pub fn router<E>(state: Arc<AppState<E>>) -> Router
where
    E: ElevationSource + 'static,
{
    Router::new()
        .route(
            "/api/geology",
            get(geology_for_period::<E>).post(geology_batch::<E>),
        )
        .route("/api/generate", post(generate::<E>))
        .route("/api/periods", get(period_catalogs))
        .with_state(state)
}

pub async fn run(config: ServiceConfig) -> Result<()> {
    let elevation = OpenElevation::new(config.elevation.url.clone(), config.elevation.timeout())
        .context("Failed to build elevation client")?;
    let openrouter = match openrouter_api_key() {
        Some(key) => Some(
            OpenRouterClient::new(key, config.openrouter.clone())
                .context("Failed to build OpenRouter client")?,
        ),
        None => {
            warn!("OPENROUTER_API_KEY is not set; /api/generate will fail");
            None
        }
    };
    let state = Arc::new(AppState::new(elevation, openrouter));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "timescape listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

fn parse_coordinate(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn coordinates(lat: Option<&Value>, lng: Option<&Value>) -> ApiResult<Coordinates> {
    match (parse_coordinate(lat), parse_coordinate(lng)) {
        (Some(lat), Some(lng)) => Ok(Coordinates { lat, lng }),
        _ => Err(ApiError::InvalidInput(MISSING_COORDINATES.to_string())),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GeologyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeologyResponse {
    pub success: bool,
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub analysis: GeoAnalysis,
}

pub async fn geology_for_period<E: ElevationSource>(
    State(state): State<Arc<AppState<E>>>,
    Query(query): Query<GeologyQuery>,
) -> ApiResult<Json<GeologyResponse>> {
    let lat = query.lat.map(Value::String);
    let lng = query.lng.map(Value::String);
    let coordinates = coordinates(lat.as_ref(), lng.as_ref())?;
    let period = query.period.as_deref().unwrap_or(DEFAULT_GEOLOGY_PERIOD);
    info!(lat = coordinates.lat, lng = coordinates.lng, period, "geology lookup");

    let analysis =
        analyze_location(state.elevation.as_ref(), coordinates.lat, coordinates.lng, period).await;
    Ok(Json(GeologyResponse {
        success: true,
        coordinates,
        analysis,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct CoordinateBody {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAnalysis {
    pub period_id: &'static str,
    #[serde(flatten)]
    pub analysis: GeoAnalysis,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub coordinates: Coordinates,
    pub region: Region,
    pub periods: Vec<PeriodAnalysis>,
}

pub async fn geology_batch<E>(
    State(state): State<Arc<AppState<E>>>,
    Json(body): Json<CoordinateBody>,
) -> ApiResult<Json<BatchResponse>>
where
    E: ElevationSource + 'static,
{
    let coordinates = coordinates(body.latitude.as_ref(), body.longitude.as_ref())?;
    info!(lat = coordinates.lat, lng = coordinates.lng, "batch geology lookup");

    let analyses = analyze_all_periods(Arc::clone(&state.elevation), coordinates.lat, coordinates.lng)
        .await
        .map_err(|err| ApiError::Internal(format!("Kunde inte analysera platsen: {err}")))?;

    Ok(Json(BatchResponse {
        success: true,
        coordinates,
        region: region_for(coordinates.lat, coordinates.lng),
        periods: analyses
            .into_iter()
            .map(|analysis| PeriodAnalysis {
                period_id: analysis.period.id,
                analysis,
            })
            .collect(),
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub period: Option<String>,
    pub image_base64: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: SceneReport,
    pub generated_image_url: Option<String>,
    pub generated_image_base64: Option<String>,
    pub image_generation_error: Option<String>,
}

impl GenerateResponse {
    fn new(report: SceneReport, image: Result<GeneratedImage, ServiceError>) -> Self {
        let mut response = Self {
            success: true,
            report,
            generated_image_url: None,
            generated_image_base64: None,
            image_generation_error: None,
        };
        match image {
            Ok(GeneratedImage::Base64(data)) => response.generated_image_base64 = Some(data),
            Ok(GeneratedImage::Url(url)) => response.generated_image_url = Some(url),
            Err(err) => response.image_generation_error = Some(image_error_message(&err)),
        }
        response
    }
}

fn image_error_message(err: &ServiceError) -> String {
    match err {
        ServiceError::Transport(_) => "Kunde inte ansluta till bildgenererings-API".to_string(),
        ServiceError::Status { message, .. } if !message.is_empty() => message.clone(),
        ServiceError::Status { .. } => "Bildgenerering misslyckades".to_string(),
        ServiceError::Empty(_) => "Modellen genererade ingen bild".to_string(),
    }
}

pub async fn generate<E: ElevationSource>(
    State(state): State<Arc<AppState<E>>>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let coordinates = coordinates(request.latitude.as_ref(), request.longitude.as_ref())?;
    let client = state
        .openrouter
        .as_ref()
        .ok_or(ApiError::MissingCredential(MISSING_API_KEY))?;
    let period_id = request.period.as_deref().unwrap_or_default();
    let photo = request.image_base64.as_deref().filter(|p| !p.is_empty());
    info!(
        lat = coordinates.lat,
        lng = coordinates.lng,
        period = period_id,
        has_photo = photo.is_some(),
        "scene generation"
    );

    let view = match photo {
        Some(photo) => client.describe_view(photo).await.unwrap_or_else(|err| {
            warn!(error = %err, "vision analysis failed, continuing without view description");
            ViewAnalysis::default()
        }),
        None => ViewAnalysis::default(),
    };

    let scene = compose_scene(
        state.elevation.as_ref(),
        coordinates.lat,
        coordinates.lng,
        period_id,
        &view,
    )
    .await;

    let instruction = scene.image_instruction(photo.is_some(), &view);
    let image = client.generate_image(&instruction, photo).await;
    if let Err(err) = &image {
        warn!(error = %err, "image generation failed");
    }

    Ok(Json(GenerateResponse::new(
        SceneReport::new(&scene, &view),
        image,
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCatalogs {
    pub eras: Vec<EraGroup>,
    pub stone_age_periods: &'static [StonePeriod],
}

pub async fn period_catalogs() -> Json<PeriodCatalogs> {
    Json(PeriodCatalogs {
        eras: periods_by_era(),
        stone_age_periods: STONE_AGE_PERIODS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coordinates_accept_numbers_and_numeric_strings() {
        let parsed = coordinates(Some(&json!(59.3)), Some(&json!("18.07"))).unwrap();
        assert_eq!(parsed, Coordinates { lat: 59.3, lng: 18.07 });
    }

    #[test]
    fn coordinates_reject_missing_or_garbage() {
        assert!(coordinates(None, Some(&json!(18.0))).is_err());
        assert!(coordinates(Some(&json!("abc")), Some(&json!(18.0))).is_err());
        assert!(coordinates(Some(&json!(true)), Some(&json!(18.0))).is_err());
        assert!(coordinates(Some(&json!("NaN")), Some(&json!(18.0))).is_err());
    }

    #[test]
    fn image_errors_map_to_user_messages() {
        let status = ServiceError::Status {
            status: 429,
            message: "Rate limited".into(),
        };
        assert_eq!(image_error_message(&status), "Rate limited");
        let blank = ServiceError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(image_error_message(&blank), "Bildgenerering misslyckades");
        assert_eq!(
            image_error_message(&ServiceError::Empty("an image")),
            "Modellen genererade ingen bild"
        );
    }
}
