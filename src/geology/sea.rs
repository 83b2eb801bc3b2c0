//! Baltic Sea stages since the last deglaciation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Salinity {
    Freshwater,
    Brackish,
    Marine,
}

/// A stage of the Baltic basin covering `[end_year, start_year)` years BP.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaPhase {
    pub name: &'static str,
    pub start_year: u32,
    pub end_year: u32,
    /// Metres relative to today's level in the southern Baltic.
    pub sea_level: f64,
    pub salinity: Salinity,
    pub description: &'static str,
}

impl SeaPhase {
    pub fn contains(&self, years_bp: f64) -> bool {
        years_bp >= f64::from(self.end_year) && years_bp < f64::from(self.start_year)
    }
}

/// Ordered oldest first; intervals are contiguous and partition [0, 14000).
pub const BALTIC_SEA_PHASES: &[SeaPhase] = &[
    SeaPhase {
        name: "Baltiska issjön",
        start_year: 14_000,
        end_year: 11_700,
        sea_level: 25.0,
        salinity: Salinity::Freshwater,
        description: "Sötvattenssjö dämmd av inlandsisen",
    },
    SeaPhase {
        name: "Yoldiahavet",
        start_year: 11_700,
        end_year: 10_700,
        sea_level: -25.0,
        salinity: Salinity::Brackish,
        description: "Bräckt hav med förbindelse till Atlanten via Mellansverige",
    },
    SeaPhase {
        name: "Ancylussjön",
        start_year: 10_700,
        end_year: 9_000,
        sea_level: -10.0,
        salinity: Salinity::Freshwater,
        description: "Stor sötvattensjö utan havsförbindelse",
    },
    SeaPhase {
        name: "Littorinahavet (tidig)",
        start_year: 9_000,
        end_year: 6_000,
        sea_level: 5.0,
        salinity: Salinity::Marine,
        description: "Salt hav, havsytan stiger, varmt klimat",
    },
    SeaPhase {
        name: "Littorinahavet (sen)",
        start_year: 6_000,
        end_year: 4_000,
        sea_level: 3.0,
        salinity: Salinity::Marine,
        description: "Högsta havsnivån, varm period",
    },
    SeaPhase {
        name: "Postlittorina/Östersjön",
        start_year: 4_000,
        end_year: 0,
        sea_level: 0.0,
        salinity: Salinity::Brackish,
        description: "Gradvis övergång till dagens bräckta Östersjö",
    },
];

/// The phase in effect `years_bp` years ago. Anything outside the table
/// (at or beyond 14000 BP, negative, NaN) falls back to the most recent phase.
pub fn sea_phase(years_bp: f64) -> &'static SeaPhase {
    BALTIC_SEA_PHASES
        .iter()
        .find(|phase| phase.contains(years_bp))
        .unwrap_or(&BALTIC_SEA_PHASES[BALTIC_SEA_PHASES.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_contiguous() {
        assert_eq!(BALTIC_SEA_PHASES[0].start_year, 14_000);
        assert_eq!(BALTIC_SEA_PHASES.last().map(|p| p.end_year), Some(0));
        for pair in BALTIC_SEA_PHASES.windows(2) {
            assert_eq!(pair[0].end_year, pair[1].start_year);
        }
    }

    #[test]
    fn boundaries_belong_to_the_older_phase() {
        assert_eq!(sea_phase(11_701.0).name, "Baltiska issjön");
        assert_eq!(sea_phase(11_700.0).name, "Baltiska issjön");
        assert_eq!(sea_phase(11_699.0).name, "Yoldiahavet");
        assert_eq!(sea_phase(10_700.0).name, "Yoldiahavet");
        assert_eq!(sea_phase(9_000.0).name, "Ancylussjön");
        assert_eq!(sea_phase(6_000.0).name, "Littorinahavet (tidig)");
        assert_eq!(sea_phase(4_000.0).name, "Littorinahavet (sen)");
        assert_eq!(sea_phase(0.0).name, "Postlittorina/Östersjön");
    }

    #[test]
    fn every_year_resolves_to_exactly_one_phase() {
        for year in 0..14_000 {
            let hits = BALTIC_SEA_PHASES
                .iter()
                .filter(|p| p.contains(f64::from(year)))
                .count();
            assert_eq!(hits, 1, "year {year} matched {hits} phases");
        }
    }

    #[test]
    fn out_of_range_falls_back_to_latest_phase() {
        let latest = BALTIC_SEA_PHASES.last().unwrap();
        assert_eq!(sea_phase(14_000.0), latest);
        assert_eq!(sea_phase(20_000.0), latest);
        assert_eq!(sea_phase(-50.0), latest);
        assert_eq!(sea_phase(f64::NAN), latest);
    }
}
