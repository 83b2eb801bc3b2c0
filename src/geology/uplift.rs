//! Post-glacial land uplift.
//!
//! Coordinates are bucketed into coarse uplift regions by a cascade of
//! bounding boxes. Each region carries today's uplift rate; the rate in the
//! past is approximated by a three-segment decay model.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "höga_kusten")]
    HogaKusten,
    #[serde(rename = "norrland_kust")]
    NorrlandKust,
    #[serde(rename = "norrland_inland")]
    NorrlandInland,
    #[serde(rename = "svealand_kust")]
    SvealandKust,
    #[serde(rename = "stockholm")]
    Stockholm,
    #[serde(rename = "gotland")]
    Gotland,
    #[serde(rename = "götaland_väst")]
    GotalandVast,
    #[serde(rename = "götaland_öst")]
    GotalandOst,
    #[serde(rename = "skåne")]
    Skane,
    #[serde(rename = "danmark")]
    Danmark,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::HogaKusten,
        Region::NorrlandKust,
        Region::NorrlandInland,
        Region::SvealandKust,
        Region::Stockholm,
        Region::Gotland,
        Region::GotalandVast,
        Region::GotalandOst,
        Region::Skane,
        Region::Danmark,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::HogaKusten => "höga_kusten",
            Region::NorrlandKust => "norrland_kust",
            Region::NorrlandInland => "norrland_inland",
            Region::SvealandKust => "svealand_kust",
            Region::Stockholm => "stockholm",
            Region::Gotland => "gotland",
            Region::GotalandVast => "götaland_väst",
            Region::GotalandOst => "götaland_öst",
            Region::Skane => "skåne",
            Region::Danmark => "danmark",
        }
    }

    /// Present-day uplift in millimetres per year.
    pub fn uplift_rate(self) -> f64 {
        match self {
            Region::HogaKusten => 8.5,
            Region::NorrlandKust => 7.5,
            Region::NorrlandInland => 8.0,
            Region::SvealandKust => 5.0,
            Region::Stockholm => 4.5,
            Region::Gotland => 2.0,
            Region::GotalandVast => 3.0,
            Region::GotalandOst => 2.5,
            Region::Skane => 0.5,
            Region::Danmark => 0.0,
        }
    }

    /// Regions where the boreal forest replaces temperate broadleaf.
    pub fn is_northern(self) -> bool {
        matches!(
            self,
            Region::HogaKusten | Region::NorrlandKust | Region::NorrlandInland
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Total over every coordinate; anything unmatched lands in `SvealandKust`.
pub fn region_for(lat: f64, lng: f64) -> Region {
    if (62.5..=63.5).contains(&lat) && (17.0..=19.0).contains(&lng) {
        return Region::HogaKusten;
    }

    if lat > 63.0 {
        return if lng < 16.0 {
            Region::NorrlandInland
        } else {
            Region::NorrlandKust
        };
    }
    if lat > 60.0 {
        return if lng > 17.0 {
            Region::NorrlandKust
        } else {
            Region::SvealandKust
        };
    }

    if lat > 58.5 && lat <= 60.0 {
        if lng > 17.0 && lng < 19.5 {
            return Region::Stockholm;
        }
        return Region::SvealandKust;
    }

    if lat > 56.9 && lat < 58.0 && lng > 18.0 && lng < 19.5 {
        return Region::Gotland;
    }

    if lat > 56.0 && lat <= 58.5 {
        return if lng < 14.0 {
            Region::GotalandVast
        } else {
            Region::GotalandOst
        };
    }

    if lat <= 56.0 && lat > 55.3 {
        return Region::Skane;
    }

    if lat <= 55.3 || lng < 11.0 {
        return Region::Danmark;
    }

    Region::SvealandKust
}

/// One segment of the uplift decay curve: years older than `after_bp`
/// (up to `span` of them) rise at `multiplier` times today's rate.
#[derive(Debug, Clone, Copy)]
pub struct UpliftSegment {
    pub after_bp: f64,
    pub span: f64,
    pub multiplier: f64,
}

/// Oldest segment first. Multipliers and breakpoints are calibration
/// constants; changing them changes every downstream elevation.
pub const UPLIFT_SEGMENTS: &[UpliftSegment] = &[
    UpliftSegment {
        after_bp: 10_000.0,
        span: 4_000.0,
        multiplier: 12.0,
    },
    UpliftSegment {
        after_bp: 5_000.0,
        span: 5_000.0,
        multiplier: 4.0,
    },
    UpliftSegment {
        after_bp: 0.0,
        span: f64::INFINITY,
        multiplier: 1.0,
    },
];

/// Uplift in metres accumulated since `years_bp`, rounded to whole metres.
pub fn total_uplift(lat: f64, lng: f64, years_bp: f64) -> f64 {
    uplift_for_rate(region_for(lat, lng).uplift_rate(), years_bp)
}

pub fn uplift_for_rate(rate_mm_per_year: f64, years_bp: f64) -> f64 {
    let mut remaining = years_bp.max(0.0);
    let mut total = 0.0;
    for segment in UPLIFT_SEGMENTS {
        if remaining > segment.after_bp {
            let years = (remaining - segment.after_bp).min(segment.span);
            total += years * rate_mm_per_year * segment.multiplier / 1_000.0;
            remaining = segment.after_bp;
        }
    }
    total.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_cascade() {
        assert_eq!(region_for(63.0, 18.0), Region::HogaKusten);
        assert_eq!(region_for(65.0, 15.0), Region::NorrlandInland);
        assert_eq!(region_for(65.5, 22.1), Region::NorrlandKust);
        assert_eq!(region_for(61.0, 18.0), Region::NorrlandKust);
        assert_eq!(region_for(61.0, 15.0), Region::SvealandKust);
        assert_eq!(region_for(59.3293, 18.0686), Region::Stockholm);
        assert_eq!(region_for(59.3, 13.5), Region::SvealandKust);
        assert_eq!(region_for(57.6, 18.3), Region::Gotland);
        assert_eq!(region_for(57.7, 11.97), Region::GotalandVast);
        assert_eq!(region_for(57.8, 14.2), Region::GotalandOst);
        assert_eq!(region_for(55.6, 13.0), Region::Skane);
        assert_eq!(region_for(55.0, 12.0), Region::Danmark);
    }

    #[test]
    fn cascade_is_total() {
        assert_eq!(region_for(58.2, 18.5), Region::GotalandOst);
        assert_eq!(region_for(-33.9, 151.2), Region::Danmark);
        assert_eq!(region_for(f64::NAN, f64::NAN), Region::SvealandKust);
    }

    #[test]
    fn deep_past_uses_all_three_segments() {
        // 2000 y * 0.102 + 5000 y * 0.034 + 5000 y * 0.0085
        assert_eq!(uplift_for_rate(8.5, 12_000.0), 417.0);
        // The fast segment is capped at 4000 years.
        assert_eq!(uplift_for_rate(8.5, 14_000.0), 621.0);
        assert_eq!(uplift_for_rate(8.5, 16_000.0), 621.0);
    }

    #[test]
    fn recent_past_uses_present_rate() {
        assert_eq!(uplift_for_rate(4.5, 1_000.0), 5.0);
        assert_eq!(uplift_for_rate(4.5, 0.0), 0.0);
        assert_eq!(uplift_for_rate(4.5, -200.0), 0.0);
    }

    #[test]
    fn fast_segment_is_capped() {
        let at_cap = uplift_for_rate(1.0, 14_000.0);
        let beyond = uplift_for_rate(1.0, 30_000.0);
        assert_eq!(at_cap, beyond);
        assert_eq!(at_cap, 73.0);
    }

    #[test]
    fn danish_region_does_not_rise() {
        assert_eq!(total_uplift(55.0, 12.0, 9_000.0), 0.0);
    }
}
