use proptest::prelude::*;

use timescape::{
    geology::{
        historical_sea_status, region_for, sea_phase, total_uplift, ElevationError,
        ElevationSource, OfflineElevation, Region, BALTIC_SEA_PHASES,
    },
    history::{analyze_location_type, period_or_default, LocationType},
    scene::{compose_scene, generate_image_prompt, historical_exclusions, ViewAnalysis},
};

const HOGA_KUSTEN: (f64, f64) = (63.0, 18.0);
const DENMARK: (f64, f64) = (55.0, 12.0);

struct Fixed(f64);

impl ElevationSource for Fixed {
    async fn elevation(&self, _lat: f64, _lng: f64) -> Result<f64, ElevationError> {
        Ok(self.0)
    }
}

#[test]
fn stockholm_in_the_viking_age_is_coastal_wilderness() {
    let analysis = analyze_location_type(59.3293, 18.0686, 800);
    assert_eq!(analysis.nearest_city.map(|c| c.name), Some("Stockholm"));
    assert!(!analysis.city_existed_in_period);
    assert_eq!(analysis.location_type, LocationType::Coastal);
}

#[test]
fn deep_past_uplift_at_the_high_coast() {
    assert_eq!(region_for(HOGA_KUSTEN.0, HOGA_KUSTEN.1), Region::HogaKusten);
    // 2000 y at 12x, 5000 y at 4x, 5000 y at 1x, all at 8.5 mm/yr.
    assert_eq!(total_uplift(HOGA_KUSTEN.0, HOGA_KUSTEN.1, 12_000.0), 417.0);
    assert_eq!(total_uplift(HOGA_KUSTEN.0, HOGA_KUSTEN.1, 0.0), 0.0);
}

#[test]
fn early_littorina_submersion_depends_on_current_elevation() {
    let dry = historical_sea_status(10.0, DENMARK.0, DENMARK.1, 7_000.0);
    assert_eq!(dry.sea_phase.name, "Littorinahavet (tidig)");
    assert_eq!(dry.sea_level, 5.0);
    assert_eq!(dry.uplift_meters, 0.0);
    assert!(!dry.was_underwater);
    assert_eq!(dry.depth(), 0.0);

    let wet = historical_sea_status(3.0, DENMARK.0, DENMARK.1, 7_000.0);
    assert!(wet.was_underwater);
    assert_eq!(wet.depth(), 2.0);
    assert!(wet.description.contains("Vattnet var salt"));
}

#[test]
fn phase_boundaries_belong_to_the_older_phase() {
    let expected = [
        (11_700.0, "Baltiska issjön"),
        (10_700.0, "Yoldiahavet"),
        (9_000.0, "Ancylussjön"),
        (6_000.0, "Littorinahavet (tidig)"),
        (4_000.0, "Littorinahavet (sen)"),
    ];
    for (years_bp, name) in expected {
        assert_eq!(sea_phase(years_bp).name, name, "at {years_bp} BP");
    }
}

#[test]
fn phases_outside_the_table_fall_back_to_the_latest() {
    assert_eq!(sea_phase(14_000.0).name, "Postlittorina/Östersjön");
    assert_eq!(sea_phase(20_000.0).name, "Postlittorina/Östersjön");
    assert_eq!(sea_phase(0.0).name, "Postlittorina/Östersjön");
}

#[test]
fn exclusions_accumulate_at_each_threshold() {
    let thresholds = [1900, 1800, 1600, 1000, 400, -500, -1700, -4000];
    for pair in thresholds.windows(2) {
        let newer = historical_exclusions(pair[0]);
        let older = historical_exclusions(pair[1]);
        for item in &newer {
            assert!(older.contains(item), "{item} missing at {}", pair[1]);
        }
        assert!(older.len() > newer.len());
    }
}

#[tokio::test]
async fn scene_composition_is_repeatable() {
    let view = ViewAnalysis {
        description: "a lake shore with birches".into(),
        person: Some("woman, around 30, standing left of centre".into()),
    };
    for period in ["stone_middle", "viking", "industrial"] {
        let first = compose_scene(&OfflineElevation, 58.4, 15.6, period, &view).await;
        let second = compose_scene(&OfflineElevation, 58.4, 15.6, period, &view).await;
        assert_eq!(first, second);
        assert_eq!(first.prompt, second.prompt);
    }
}

#[tokio::test]
async fn submerged_coordinates_get_an_underwater_prompt() {
    let scene = compose_scene(&Fixed(20.0), HOGA_KUSTEN.0, HOGA_KUSTEN.1, "stone_middle", &ViewAnalysis::default()).await;
    let geology = scene.geology.as_ref().expect("neolithic scene has geology");
    assert!(geology.sea_status.was_underwater);
    assert!(scene.prompt.starts_with("Underwater scene"));
}

#[test]
fn prompt_generation_ignores_call_order() {
    let period = period_or_default("medieval_late");
    let location = analyze_location_type(57.7089, 11.9746, period.year_start);
    let view = ViewAnalysis::default();
    let first = generate_image_prompt(period, &location, None, &view);
    let _ = generate_image_prompt(period_or_default("viking"), &location, None, &view);
    assert_eq!(first, generate_image_prompt(period, &location, None, &view));
}

proptest! {
    #[test]
    fn uplift_never_decreases_with_age(
        lat in 54.0f64..70.0,
        lng in 10.0f64..25.0,
        younger in 0.0f64..15_000.0,
        extra in 0.0f64..5_000.0,
    ) {
        prop_assert!(total_uplift(lat, lng, younger) <= total_uplift(lat, lng, younger + extra));
    }

    #[test]
    fn every_year_has_exactly_one_phase(years_bp in 0u32..=20_000) {
        let years_bp = f64::from(years_bp);
        let covering = BALTIC_SEA_PHASES.iter().filter(|p| p.contains(years_bp)).count();
        if years_bp < 14_000.0 {
            prop_assert_eq!(covering, 1);
        } else {
            prop_assert_eq!(covering, 0);
            prop_assert_eq!(sea_phase(years_bp).name, "Postlittorina/Östersjön");
        }
    }

    #[test]
    fn sea_status_is_self_consistent(
        elevation in -200.0f64..1_500.0,
        lat in 54.0f64..70.0,
        lng in 10.0f64..25.0,
        years_bp in 0.0f64..16_000.0,
    ) {
        let status = historical_sea_status(elevation, lat, lng, years_bp);
        prop_assert_eq!(status.historical_elevation, elevation - status.uplift_meters);
        prop_assert_eq!(status.was_underwater, status.historical_elevation < status.sea_level);
        prop_assert!(status.depth() >= 0.0);
    }

    #[test]
    fn classifier_is_total(
        lat in -90.0f64..90.0,
        lng in -180.0f64..180.0,
        year in -12_000i32..2_100,
    ) {
        let analysis = analyze_location_type(lat, lng, year);
        prop_assert!(matches!(
            analysis.location_type,
            LocationType::Urban | LocationType::Coastal | LocationType::Rural
        ));
        prop_assert!(analysis.nearest_city.is_some());
        prop_assert!(!analysis.historical_description.is_empty());
    }

    #[test]
    fn later_years_never_exclude_more(year in -12_000i32..2_100, gap in 0i32..3_000) {
        let newer = historical_exclusions(year + gap);
        let older = historical_exclusions(year);
        prop_assert!(newer.iter().all(|item| older.contains(item)));
    }
}
