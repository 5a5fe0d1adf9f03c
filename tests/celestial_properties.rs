//! Integration tests for the celestial state: activation windows, the
//! diametric sun/moon geometry, and the exclusivity invariant.

use core::f32::consts::{PI, TAU};
use wildwood::config::CelestialTuning;
use wildwood::journey::celestial::{
    CelestialState, celestial_state, moon_angle, sun_activation, sun_angle,
};
use wildwood::journey::season::{AUTUMN, SPRING, SUMMER, SeasonVisuals, WINTER};

fn tuning() -> CelestialTuning {
    CelestialTuning::default()
}

#[test]
fn peak_activation_shows_exactly_one_body() {
    let t = tuning();

    // A season where both bodies are fully authored
    let mut visuals: SeasonVisuals = SPRING;
    visuals.sun_visibility = 1.0;
    visuals.moon_visibility = 1.0;

    let state = celestial_state(&visuals, 0.5, t.orbit_depth, &t);
    let visible = [state.sun.is_some(), state.moon.is_some()]
        .iter()
        .filter(|v| **v)
        .count();

    assert_eq!(visible, 1, "exactly one body at the activation peak");
    assert!(state.sun.is_some(), "and it is the sun at midday");
}

#[test]
fn nothing_renders_outside_the_travel_window() {
    let t = tuning();

    for visuals in [&SPRING, &SUMMER, &AUTUMN, &WINTER] {
        for progress in [0.0, 0.05, 0.15, 0.87, 0.95, 1.0] {
            let state = celestial_state(visuals, progress, t.orbit_depth, &t);
            assert_eq!(
                state,
                CelestialState::default(),
                "sky should be empty at progress {progress}"
            );
        }
    }
}

#[test]
fn moon_is_always_diametrically_opposed() {
    let t = tuning();

    for step in 0..=1000 {
        let progress = step as f32 / 1000.0;
        let sun = sun_angle(progress, &t);
        let moon = moon_angle(progress, &t);

        let separation = (moon - sun).rem_euclid(TAU);
        assert!(
            (separation - PI).abs() < 1e-5,
            "separation {separation} at progress {progress}"
        );
    }
}

#[test]
fn clamping_matches_the_endpoints() {
    let t = tuning();

    assert_eq!(sun_angle(-3.0, &t), sun_angle(0.0, &t));
    assert_eq!(sun_angle(7.0, &t), sun_angle(1.0, &t));
    assert_eq!(sun_activation(-1.0, &t), 0.0);
    assert_eq!(sun_activation(2.0, &t), 0.0);

    let below = celestial_state(&SUMMER, -0.5, t.orbit_depth, &t);
    let at_zero = celestial_state(&SUMMER, 0.0, t.orbit_depth, &t);
    assert_eq!(below, at_zero);
}

#[test]
fn opacities_stay_in_unit_range() {
    let t = tuning();

    for visuals in [&SPRING, &SUMMER, &AUTUMN, &WINTER] {
        for step in 0..=2000 {
            let progress = step as f32 / 2000.0;
            let state = celestial_state(visuals, progress, t.orbit_depth, &t);

            for body in [state.sun, state.moon].into_iter().flatten() {
                assert!(
                    (0.0..=1.0).contains(&body.opacity),
                    "opacity {} at progress {progress}",
                    body.opacity
                );
                assert!(body.radius > 0.0);
            }
        }
    }
}

#[test]
fn bodies_never_render_below_the_opacity_floor() {
    let t = tuning();

    for visuals in [&SPRING, &SUMMER, &AUTUMN, &WINTER] {
        for step in 0..=2000 {
            let progress = step as f32 / 2000.0;
            let state = celestial_state(visuals, progress, t.orbit_depth, &t);

            for body in [state.sun, state.moon].into_iter().flatten() {
                assert!(
                    body.opacity > 0.001,
                    "degenerate near-invisible body at progress {progress}"
                );
            }
        }
    }
}

#[test]
fn summer_authored_zero_moon_never_appears() {
    let t = tuning();

    for step in 0..=500 {
        let progress = step as f32 / 500.0;
        let state = celestial_state(&SUMMER, progress, t.orbit_depth, &t);
        assert!(state.moon.is_none(), "at progress {progress}");
    }
}

#[test]
fn exclusivity_invariant_over_dense_sweep() {
    let t = tuning();
    let floor = t.fade_end_y + t.horizon_exclusion_margin;

    let mut visuals: SeasonVisuals = AUTUMN;
    visuals.sun_visibility = 1.0;
    visuals.moon_visibility = 1.0;

    for step in 0..=5000 {
        let progress = step as f32 / 5000.0;
        let state = celestial_state(&visuals, progress, t.orbit_depth, &t);

        if let (Some(sun), Some(moon)) = (&state.sun, &state.moon) {
            let sun_counts = sun.position[1] > floor && sun.opacity > 0.015;
            let moon_counts = moon.position[1] > floor && moon.opacity > 0.015;
            assert!(
                !(sun_counts && moon_counts),
                "both bodies meaningfully visible at progress {progress}"
            );
        }
    }
}

#[test]
fn bodies_ride_the_configured_orbit() {
    let t = tuning();
    let state = celestial_state(&SUMMER, 0.5, t.orbit_depth, &t);
    let sun = state.sun.expect("midday sun");

    let dx = sun.position[0] - t.center_x;
    let dy = sun.position[1] - t.orbit_center_y;
    let radius = (dx * dx + dy * dy).sqrt();

    assert!((radius - t.orbit_radius).abs() < 1e-3);
    assert_eq!(sun.position[2], t.orbit_depth);
}
