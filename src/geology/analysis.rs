//! Full geological reconstruction of one coordinate for a Stone Age period.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::{JoinError, JoinSet};

use super::elevation::{elevation_or_estimate, ElevationSource};
use super::sea::Salinity;
use super::status::{historical_sea_status, SeaStatus};
use super::uplift::{region_for, Region};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StonePeriod {
    pub id: &'static str,
    pub name: &'static str,
    /// Midpoint of the period in years before present.
    pub years_bp: u32,
    pub year_range: &'static str,
    pub culture: &'static str,
}

pub const STONE_AGE_PERIODS: &[StonePeriod] = &[
    StonePeriod {
        id: "late_glacial",
        name: "Senglacial tid",
        years_bp: 12_000,
        year_range: "14000-11700 BP",
        culture: "Hamburgkulturen",
    },
    StonePeriod {
        id: "preboreal",
        name: "Preboreal",
        years_bp: 10_500,
        year_range: "11700-10200 BP",
        culture: "Maglemosekulturen",
    },
    StonePeriod {
        id: "boreal",
        name: "Boreal",
        years_bp: 9_000,
        year_range: "10200-8000 BP",
        culture: "Maglemosekulturen",
    },
    StonePeriod {
        id: "atlantic_early",
        name: "Äldre Atlantikum",
        years_bp: 7_000,
        year_range: "8000-6000 BP",
        culture: "Kongemosekulturen",
    },
    StonePeriod {
        id: "atlantic_late",
        name: "Yngre Atlantikum",
        years_bp: 5_500,
        year_range: "6000-5000 BP",
        culture: "Ertebøllekulturen",
    },
    StonePeriod {
        id: "subboreal",
        name: "Subboreal (Neolitikum)",
        years_bp: 4_000,
        year_range: "5000-2500 BP",
        culture: "Trattbägarkulturen",
    },
];

pub const DEFAULT_STONE_PERIOD: &StonePeriod = &STONE_AGE_PERIODS[3];

/// Unknown ids resolve to Äldre Atlantikum.
pub fn stone_period(id: &str) -> &'static StonePeriod {
    STONE_AGE_PERIODS
        .iter()
        .find(|period| period.id == id)
        .unwrap_or(DEFAULT_STONE_PERIOD)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoAnalysis {
    pub period: &'static StonePeriod,
    pub elevation: f64,
    pub region: Region,
    pub sea_status: SeaStatus,
    pub landscape: String,
    pub vegetation: String,
    pub fauna: String,
}

struct LandBracket {
    older_than_bp: u32,
    landscape: &'static str,
    vegetation: &'static str,
    fauna: &'static str,
}

const LAND_BRACKETS: &[LandBracket] = &[
    LandBracket {
        older_than_bp: 10_000,
        landscape: "Tundra och glaciärnära landskap, permafrost",
        vegetation: "Lavar, mossor, dvärgbjörk, vide",
        fauna: "Ren, fjällräv, lämmel, mammut (utdöende)",
    },
    LandBracket {
        older_than_bp: 8_000,
        landscape: "Öppen björkskog, många sjöar från smältvatten",
        vegetation: "Björk, tall börjar etableras, vide",
        fauna: "Älg, ren, bäver, varg, björn",
    },
    LandBracket {
        older_than_bp: 5_000,
        landscape: "Tät lövskog, klimatoptimum (2-3°C varmare)",
        vegetation: "Ek, alm, lind, ask, hassel",
        fauna: "Kronhjort, vildsvin, uroxe, älg, säl vid kust",
    },
    LandBracket {
        older_than_bp: 0,
        landscape: "Öppnare landskap, tidigt jordbruk",
        vegetation: "Blandskog, betesmarker, tidiga åkrar",
        fauna: "Tamboskap, kronhjort, vildsvin, häst (tam)",
    },
];

fn land_bracket(years_bp: u32) -> &'static LandBracket {
    LAND_BRACKETS
        .iter()
        .find(|bracket| years_bp > bracket.older_than_bp)
        .unwrap_or(&LAND_BRACKETS[LAND_BRACKETS.len() - 1])
}

/// Pure part of the analysis once the present-day elevation is known.
pub fn reconstruct(period: &'static StonePeriod, elevation: f64, lat: f64, lng: f64) -> GeoAnalysis {
    let region = region_for(lat, lng);
    let sea_status = historical_sea_status(elevation, lat, lng, f64::from(period.years_bp));

    let (landscape, vegetation, fauna) = if sea_status.was_underwater {
        let fresh = sea_status.sea_phase.salinity == Salinity::Freshwater;
        (
            format!("Havsbotten under {}", sea_status.sea_phase.name),
            if fresh {
                "Alger, vass vid stränder"
            } else {
                "Marina alger, tång"
            }
            .to_string(),
            if fresh {
                "Sötvattensfisk, säl (vid kuster)"
            } else {
                "Torsk, sill, säl, tumlare"
            }
            .to_string(),
        )
    } else {
        let bracket = land_bracket(period.years_bp);
        let mut vegetation = bracket.vegetation.to_string();
        let mut fauna = bracket.fauna.to_string();
        if region.is_northern() {
            vegetation = vegetation.replace("Ek, alm, lind", "Tall, gran, björk");
            fauna = fauna.replace("uroxe", "ren");
        }
        (bracket.landscape.to_string(), vegetation, fauna)
    };

    GeoAnalysis {
        period,
        elevation,
        region,
        sea_status,
        landscape,
        vegetation,
        fauna,
    }
}

pub async fn analyze_location<E: ElevationSource>(
    source: &E,
    lat: f64,
    lng: f64,
    period_id: &str,
) -> GeoAnalysis {
    let period = stone_period(period_id);
    let elevation = elevation_or_estimate(source, lat, lng).await;
    let analysis = reconstruct(period, elevation, lat, lng);
    tracing::debug!(
        period = period.id,
        elevation,
        region = %analysis.region,
        underwater = analysis.sea_status.was_underwater,
        "reconstructed location"
    );
    analysis
}

/// Runs every Stone Age period concurrently; results keep catalog order.
pub async fn analyze_all_periods<E>(
    source: Arc<E>,
    lat: f64,
    lng: f64,
) -> Result<Vec<GeoAnalysis>, JoinError>
where
    E: ElevationSource + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, period) in STONE_AGE_PERIODS.iter().enumerate() {
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let analysis = analyze_location(source.as_ref(), lat, lng, period.id).await;
            (index, analysis)
        });
    }

    let mut slots: Vec<Option<GeoAnalysis>> = vec![None; STONE_AGE_PERIODS.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, analysis) = joined?;
        slots[index] = Some(analysis);
    }
    Ok(slots.into_iter().flatten().collect())
}
