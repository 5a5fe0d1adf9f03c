//! Integration tests for the seasonal palette blend: band passthrough,
//! biased weather fades, monotonic transitions, and boundary continuity.

use wildwood::config::JourneyTuning;
use wildwood::journey::season::{SPRING, SeasonKind, WINTER, season_palette};
use wildwood::utils::math::{lerp, smootherstep};

fn tuning() -> JourneyTuning {
    JourneyTuning::default()
}

#[test]
fn spring_band_is_a_verbatim_passthrough() {
    let t = tuning();

    for distance in [0.0, 1.0, 50.0, 123.4, 199.0, 199.9] {
        let palette = season_palette(distance, &t);

        assert_eq!(palette.key, SeasonKind::Spring, "at {distance}");
        assert_eq!(palette.transition_progress, 0.0, "at {distance}");
        assert_eq!(palette.primary_season, palette.next_season);
        assert_eq!(palette.visuals, SPRING, "at {distance}");
    }
}

#[test]
fn winter_band_is_exactly_winter() {
    let t = tuning();

    for distance in [900.0, 950.0, 1000.0, 1149.0, 1150.0] {
        let palette = season_palette(distance, &t);

        assert_eq!(palette.key, SeasonKind::Winter, "at {distance}");
        assert_eq!(palette.transition_progress, 0.0, "at {distance}");
        assert_eq!(palette.visuals, WINTER, "at {distance}");
    }
}

#[test]
fn mid_transition_is_blended_and_biased() {
    let t = tuning();
    let palette = season_palette(250.0, &t);
    let progress = palette.transition_progress;

    assert!(progress > 0.0 && progress < 1.0);

    // Snow is zero on both sides of the spring/summer boundary and must stay
    // exactly zero through it
    assert_eq!(palette.visuals.snow_intensity, 0.0);

    // Rain falls from spring's 0.36 toward summer's 0; the blend must sit
    // strictly between the endpoints
    let rain = palette.visuals.rain_intensity;
    assert!(rain > 0.0 && rain < 0.36, "rain {rain}");

    // And it must NOT be the plain linear blend: the falling direction uses
    // the bias exponent, which makes the effect linger
    let linear = lerp(0.36, 0.0, progress);
    assert!(
        (rain - linear).abs() > 1e-4,
        "rain {rain} should differ from the symmetric blend {linear}"
    );
    assert!(rain > linear, "a fading effect lingers above the linear blend");

    // Petals rise 0 -> 0.78 and should outrun the linear blend
    let petals = palette.visuals.petal_intensity;
    let petals_linear = lerp(0.0, 0.78, progress);
    assert!(petals > petals_linear);
}

#[test]
fn weather_transitions_are_monotonic() {
    let t = tuning();
    let mut previous_rain = f32::INFINITY;
    let mut previous_petals = -f32::INFINITY;

    for step in 0..=1000 {
        let distance = 200.0 + (step as f32 / 1000.0) * 100.0;
        let palette = season_palette(distance, &t);

        let rain = palette.visuals.rain_intensity;
        let petals = palette.visuals.petal_intensity;

        assert!(
            rain <= previous_rain + 1e-6,
            "rain should never increase across spring to summer (at {distance})"
        );
        assert!(
            petals >= previous_petals - 1e-6,
            "petals should never decrease across spring to summer (at {distance})"
        );

        previous_rain = rain;
        previous_petals = petals;
    }
}

#[test]
fn band_boundaries_do_not_seam() {
    let t = tuning();

    // Either side of every transition-to-pure boundary
    for boundary in [200.0, 300.0, 500.0, 600.0, 800.0, 900.0] {
        let before = season_palette(boundary - 0.001, &t);
        let after = season_palette(boundary, &t);

        let fields = [
            (
                before.visuals.rain_intensity,
                after.visuals.rain_intensity,
            ),
            (
                before.visuals.petal_intensity,
                after.visuals.petal_intensity,
            ),
            (before.visuals.snow_intensity, after.visuals.snow_intensity),
            (before.visuals.leaf_intensity, after.visuals.leaf_intensity),
            (
                before.visuals.background_color.r,
                after.visuals.background_color.r,
            ),
            (before.visuals.fog_density, after.visuals.fog_density),
            (
                before.visuals.main_light_intensity,
                after.visuals.main_light_intensity,
            ),
        ];

        for (b, a) in fields {
            assert!(
                (b - a).abs() < 1e-3,
                "seam at {boundary}: {b} vs {a}"
            );
        }
    }
}

#[test]
fn eased_progress_matches_smootherstep_of_linear_position() {
    let t = tuning();
    let palette = season_palette(250.0, &t);

    let linear = (250.0 - 200.0) / 100.0;
    let expected = smootherstep(linear, 0.0, 1.0);
    assert!((palette.transition_progress - expected).abs() < 1e-6);
}

#[test]
fn trailhead_and_road_end_scenarios() {
    let t = tuning();

    let start = season_palette(0.0, &t);
    assert_eq!(start.key, SeasonKind::Spring);
    assert_eq!(start.visuals.rain_intensity, 0.36);
    assert_eq!(start.visuals.snow_intensity, 0.0);
    assert_eq!(start.visuals.petal_intensity, 0.0);
    assert_eq!(start.visuals.leaf_intensity, 0.0);

    let end = season_palette(1150.0, &t);
    assert_eq!(end.key, SeasonKind::Winter);
    assert_eq!(end.visuals.snow_intensity, 1.0);
    assert_eq!(end.visuals.rain_intensity, 0.0);
    assert_eq!(end.visuals.petal_intensity, 0.0);
    assert_eq!(end.visuals.leaf_intensity, 0.0);
}

#[test]
fn every_transition_band_reports_its_seasons() {
    let t = tuning();
    let cases = [
        (250.0, SeasonKind::Spring, SeasonKind::Summer),
        (550.0, SeasonKind::Summer, SeasonKind::Autumn),
        (850.0, SeasonKind::Autumn, SeasonKind::Winter),
    ];

    for (distance, from, to) in cases {
        let palette = season_palette(distance, &t);
        assert_eq!(palette.primary_season, from, "at {distance}");
        assert_eq!(palette.next_season, to, "at {distance}");
        assert!(palette.transition_progress > 0.0 && palette.transition_progress < 1.0);
    }
}
