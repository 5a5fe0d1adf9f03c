//! Sun and moon state along the travel arc.
//!
//! Both bodies ride the same fixed orbit circle, always diametrically
//! opposed: the moon's angle is the sun's plus pi, which enforces day/night
//! exclusivity at the geometry level. The sun's angle follows a
//! piecewise-smoother-step curve over anchored progress points, so it
//! accelerates into and out of each phase instead of sweeping at constant
//! angular velocity.
//!
//! Visibility is governed by activation scalars. The travel window (fade-in
//! times fade-out) gates both bodies: outside it the night holds and neither
//! renders. Inside it, a dominance score built from sun presence and sun
//! altitude decides how much room the moon gets; past the dominance
//! threshold the moon is fully suppressed. The handoff is continuous, and a
//! final exclusivity pass guards the one seam where both could otherwise be
//! faintly visible at once.
//!
//! Every function here is pure and total. Out-of-range inputs clamp.

use crate::config::CelestialTuning;
use crate::journey::season::SeasonVisuals;
use crate::utils::color::Rgb;
use crate::utils::math::{clamp01, lerp, smootherstep};
use core::f32::consts::{PI, TAU};

/// Shaping exponent applied to the moon's dominance release curve.
const MOON_RELEASE_EXPONENT: f32 = 1.08;
/// Authored visibility below this renders nothing at all.
const VISIBILITY_EPSILON: f32 = 0.0005;
/// Activation below this renders nothing at all.
const ACTIVATION_EPSILON: f32 = 0.001;
/// Final opacity below this is dropped rather than drawn near-invisible.
const OPACITY_EPSILON: f32 = 0.001;
/// Opacity a body needs before the exclusivity pass counts it as visible.
const EXCLUSIVITY_OPACITY: f32 = 0.015;

const SUN_ALTITUDE_EXPONENT: f32 = 0.82;
const SUN_GLOW_EXPONENT: f32 = 0.76;
const MOON_ALTITUDE_EXPONENT: f32 = 0.68;
const MOON_GLOW_EXPONENT: f32 = 0.6;
const HORIZON_PIVOT_EXPONENT: f32 = 0.72;

/// A renderable sky body. Absent entirely (`None` at the call sites) when it
/// should not be drawn; consumers must not invent a fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    pub position: [f32; 3],
    pub radius: f32,
    pub opacity: f32,
    pub color: Rgb,
    pub glow_color: Rgb,
}

/// Sun and moon for one frame.
///
/// Invariant: never both `Some` while both are above the horizon margin and
/// meaningfully opaque. The exclusivity pass keeps only the more opaque one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CelestialState {
    pub sun: Option<CelestialBody>,
    pub moon: Option<CelestialBody>,
}

#[derive(Clone, Copy, PartialEq)]
enum BodyKind {
    Sun,
    Moon,
}

/// Orbit angle at which a body sits exactly on the fade horizon.
pub fn horizon_angle(tuning: &CelestialTuning) -> f32 {
    let sine = (tuning.fade_end_y - tuning.orbit_center_y) / tuning.orbit_radius.max(f32::EPSILON);
    libm::asinf(sine.clamp(-1.0, 1.0))
}

/// The anchored `(progress, angle)` curve the sun follows: rise from below
/// the horizon, hold near apex through midday, then set and continue under.
pub fn sun_angle_anchors(tuning: &CelestialTuning) -> [(f32, f32); 7] {
    let horizon = horizon_angle(tuning);
    [
        (0.0, -PI / 2.0),
        (0.18, horizon),
        (0.25, PI / 2.0),
        (0.55, PI / 2.0),
        (0.72, horizon + PI),
        (0.86, 3.0 * PI / 2.0),
        (1.0, -PI / 2.0 + TAU),
    ]
}

/// Sun orbit angle for a travel progress in `[0, 1]`.
///
/// Between consecutive anchors the local parameter is smoother-step eased
/// before the angle lerp, which keeps angular velocity continuous across
/// anchor joints.
pub fn sun_angle(progress: f32, tuning: &CelestialTuning) -> f32 {
    let anchors = sun_angle_anchors(tuning);
    let normalized = clamp01(progress);

    if normalized <= anchors[0].0 {
        return anchors[0].1;
    }

    for window in anchors.windows(2) {
        let (start_progress, start_angle) = window[0];
        let (end_progress, end_angle) = window[1];

        if normalized <= end_progress {
            let range = (end_progress - start_progress).max(1e-4);
            let raw = (normalized - start_progress) / range;
            let eased = smootherstep(raw, 0.0, 1.0);
            return lerp(start_angle, end_angle, eased);
        }
    }

    anchors[anchors.len() - 1].1
}

/// Moon orbit angle: always diametrically opposite the sun.
pub fn moon_angle(progress: f32, tuning: &CelestialTuning) -> f32 {
    sun_angle(progress, tuning) + PI
}

/// Point on the orbit circle at `angle`, on the `depth` plane.
pub fn orbit_position(angle: f32, depth: f32, tuning: &CelestialTuning) -> [f32; 3] {
    [
        tuning.center_x + libm::cosf(angle) * tuning.orbit_radius,
        tuning.orbit_center_y + libm::sinf(angle) * tuning.orbit_radius,
        depth,
    ]
}

/// Travel activation window shared by both bodies.
///
/// Product of a smoother-step fade-in and fade-out, so activation is zero
/// outside `[fade_in_start, fade_out_end]`, one through the middle, and
/// smooth at both shoulders.
pub fn sun_activation(progress: f32, tuning: &CelestialTuning) -> f32 {
    let t = clamp01(progress);
    let fade_in = clamp01(smootherstep(t, tuning.sun_fade_in_start, tuning.sun_fade_in_end));
    let fade_out = 1.0
        - clamp01(smootherstep(
            t,
            tuning.sun_fade_out_start,
            tuning.sun_fade_out_end,
        ));
    clamp01(fade_in * fade_out)
}

/// How much room the sun leaves the moon, before the travel window gate.
///
/// Dominance blends sun presence (activation times authored visibility) with
/// sun altitude. At or past the threshold the moon is hard zero; below it,
/// release eases in with smoother-step and a slight shaping exponent.
pub fn moon_release(
    sun_activation: f32,
    sun_visibility: f32,
    sun_altitude: f32,
    tuning: &CelestialTuning,
) -> f32 {
    let sun_presence = clamp01(sun_activation * clamp01(sun_visibility));
    let altitude_span = (tuning.fade_start_y - tuning.fade_end_y).max(1e-4);
    let altitude_presence = clamp01((sun_altitude - tuning.fade_end_y) / altitude_span);
    let dominance = sun_presence.max(altitude_presence * tuning.altitude_weight);

    if dominance >= tuning.dominance_threshold {
        return 0.0;
    }

    let release = clamp01((tuning.dominance_threshold - dominance) / tuning.dominance_threshold);
    if release <= 0.0 {
        return 0.0;
    }

    libm::powf(smootherstep(release, 0.0, 1.0), MOON_RELEASE_EXPONENT)
}

fn body(
    kind: BodyKind,
    visuals: &SeasonVisuals,
    activation: f32,
    position: [f32; 3],
    tuning: &CelestialTuning,
) -> Option<CelestialBody> {
    let (base_visibility, radius, base_color, base_glow) = match kind {
        BodyKind::Sun => (
            visuals.sun_visibility,
            visuals.sun_size,
            visuals.sun_color,
            visuals.sun_glow_color,
        ),
        BodyKind::Moon => (
            visuals.moon_visibility,
            visuals.moon_size,
            visuals.moon_color,
            visuals.moon_glow_color,
        ),
    };

    let base_visibility = clamp01(base_visibility);
    if base_visibility <= VISIBILITY_EPSILON || activation <= ACTIVATION_EPSILON {
        return None;
    }

    let fade_range = (tuning.fade_start_y - tuning.fade_end_y).max(1e-4);
    let altitude_factor = clamp01((position[1] - tuning.fade_end_y) / fade_range);
    let opacity = base_visibility * activation * altitude_factor;
    if opacity <= OPACITY_EPSILON {
        return None;
    }

    // Low bodies take on the horizon tint; high bodies show their own color.
    let sky_low = visuals.sky_bottom_color;
    let sky_high = visuals.sky_top_color;
    let (altitude_exponent, glow_exponent) = match kind {
        BodyKind::Sun => (SUN_ALTITUDE_EXPONENT, SUN_GLOW_EXPONENT),
        BodyKind::Moon => (MOON_ALTITUDE_EXPONENT, MOON_GLOW_EXPONENT),
    };
    let altitude_blend = libm::powf(altitude_factor, altitude_exponent);
    let glow_blend = libm::powf(altitude_factor, glow_exponent);
    let horizon_pivot = sky_low.lerp(sky_high, libm::powf(altitude_factor, HORIZON_PIVOT_EXPONENT));

    Some(CelestialBody {
        position,
        radius,
        opacity,
        color: sky_low.lerp(base_color, altitude_blend),
        glow_color: horizon_pivot.lerp(base_glow, glow_blend),
    })
}

/// Computes the frame's sun and moon from the blended season visuals and the
/// normalized travel progress.
pub fn celestial_state(
    visuals: &SeasonVisuals,
    travel_progress: f32,
    orbit_depth: f32,
    tuning: &CelestialTuning,
) -> CelestialState {
    let normalized = clamp01(travel_progress);

    let sun_orbit_angle = sun_angle(normalized, tuning);
    let sun_position = orbit_position(sun_orbit_angle, orbit_depth, tuning);
    let moon_orbit_angle = sun_orbit_angle + PI;
    let moon_position = orbit_position(moon_orbit_angle, orbit_depth, tuning);

    let activation = sun_activation(normalized, tuning);
    // The travel window gates the moon too: outside it the walk sits in deep
    // night and neither body renders.
    let moon_activation = moon_release(activation, visuals.sun_visibility, sun_position[1], tuning)
        * activation;

    let mut sun = body(BodyKind::Sun, visuals, activation, sun_position, tuning);
    let mut moon = body(BodyKind::Moon, visuals, moon_activation, moon_position, tuning);

    // Seam guard: the activation curves can leave both bodies faintly lit at
    // the crossover. Keep only the more opaque one when both sit above the
    // horizon margin.
    if let (Some(sun_body), Some(moon_body)) = (&sun, &moon) {
        let floor = tuning.fade_end_y + tuning.horizon_exclusion_margin;
        let sun_above = sun_body.position[1] > floor && sun_body.opacity > EXCLUSIVITY_OPACITY;
        let moon_above = moon_body.position[1] > floor && moon_body.opacity > EXCLUSIVITY_OPACITY;

        match (sun_above, moon_above) {
            (true, true) => {
                if sun_body.opacity >= moon_body.opacity {
                    moon = None;
                } else {
                    sun = None;
                }
            }
            (true, false) => moon = None,
            (false, true) => sun = None,
            (false, false) => {}
        }
    }

    CelestialState { sun, moon }
}

#[cfg(test)]
mod celestial_tests {
    use super::*;
    use crate::journey::season::{SPRING, SUMMER, WINTER};

    fn tuning() -> CelestialTuning {
        CelestialTuning::default()
    }

    #[test]
    fn horizon_angle_is_below_apex() {
        let t = tuning();
        let angle = horizon_angle(&t);

        // Orbit center sits above the fade line, so the horizon crossing is a
        // negative angle
        assert!(angle < 0.0);
        let y = t.orbit_center_y + libm::sinf(angle) * t.orbit_radius;
        assert!((y - t.fade_end_y).abs() < 1e-3);
    }

    #[test]
    fn sun_angle_clamps_and_hits_anchors() {
        let t = tuning();

        assert_eq!(sun_angle(-1.0, &t), -PI / 2.0);
        assert_eq!(sun_angle(0.0, &t), -PI / 2.0);
        assert!((sun_angle(0.25, &t) - PI / 2.0).abs() < 1e-5);
        // Apex hold between the two middle anchors
        assert!((sun_angle(0.4, &t) - PI / 2.0).abs() < 1e-5);
        assert!((sun_angle(1.0, &t) - (-PI / 2.0 + TAU)).abs() < 1e-5);
        assert!((sun_angle(2.0, &t) - (-PI / 2.0 + TAU)).abs() < 1e-5);
    }

    #[test]
    fn sun_angle_is_monotonic_over_progress() {
        let t = tuning();
        let mut previous = sun_angle(0.0, &t);
        for step in 1..=1000 {
            let angle = sun_angle(step as f32 / 1000.0, &t);
            assert!(
                angle >= previous - 1e-5,
                "sun should never run backwards: {angle} < {previous}"
            );
            previous = angle;
        }
    }

    #[test]
    fn activation_window_shape() {
        let t = tuning();

        assert_eq!(sun_activation(0.0, &t), 0.0);
        assert_eq!(sun_activation(0.16, &t), 0.0);
        assert_eq!(sun_activation(0.5, &t), 1.0);
        assert_eq!(sun_activation(0.86, &t), 0.0);
        assert_eq!(sun_activation(1.0, &t), 0.0);

        let rising = sun_activation(0.22, &t);
        assert!(rising > 0.0 && rising < 1.0);
        let setting = sun_activation(0.8, &t);
        assert!(setting > 0.0 && setting < 1.0);
    }

    #[test]
    fn moon_release_hard_zero_past_threshold() {
        let t = tuning();

        // Sun at full presence dominates outright
        assert_eq!(moon_release(1.0, 1.0, t.fade_end_y, &t), 0.0);
        // Sun high in the sky dominates through altitude alone
        assert_eq!(moon_release(0.0, 0.0, t.fade_start_y, &t), 0.0);
        // No sun at all: full release
        let free = moon_release(0.0, 0.0, t.fade_end_y, &t);
        assert!((free - 1.0).abs() < 1e-5);
    }

    #[test]
    fn moon_release_is_continuous_near_threshold() {
        let t = tuning();
        // Presence just below and just above the threshold
        let below = moon_release(t.dominance_threshold - 0.001, 1.0, t.fade_end_y, &t);
        let above = moon_release(t.dominance_threshold + 0.001, 1.0, t.fade_end_y, &t);

        assert_eq!(above, 0.0);
        assert!(below < 0.01, "release should approach zero smoothly: {below}");
    }

    #[test]
    fn midday_summer_shows_exactly_the_sun() {
        let t = tuning();
        let state = celestial_state(&SUMMER, 0.5, t.orbit_depth, &t);

        let sun = state.sun.expect("summer midday sun");
        assert!(state.moon.is_none());
        assert!(sun.opacity > 0.9);
        // Apex: directly above the orbit center
        assert!((sun.position[1] - (t.orbit_center_y + t.orbit_radius)).abs() < 1e-3);
    }

    #[test]
    fn trailhead_and_road_end_are_empty_sky() {
        let t = tuning();

        for visuals in [&SPRING, &SUMMER, &WINTER] {
            let start = celestial_state(visuals, 0.0, t.orbit_depth, &t);
            assert_eq!(start, CelestialState::default());

            let end = celestial_state(visuals, 1.0, t.orbit_depth, &t);
            assert_eq!(end, CelestialState::default());
        }
    }

    #[test]
    fn spring_dawn_hands_sky_to_the_moon() {
        let t = tuning();
        // Just inside the fade-in window, with the sun still under the
        // horizon and spring's tiny sun visibility
        let state = celestial_state(&SPRING, 0.17, t.orbit_depth, &t);

        assert!(state.sun.is_none());
        let moon = state.moon.expect("spring dawn moon");
        assert!(moon.opacity > 0.0 && moon.opacity <= 1.0);
    }

    #[test]
    fn summer_never_shows_a_moon() {
        let t = tuning();
        // moon_visibility is authored to zero in summer
        for step in 0..=100 {
            let state = celestial_state(&SUMMER, step as f32 / 100.0, t.orbit_depth, &t);
            assert!(state.moon.is_none());
        }
    }

    #[test]
    fn exclusivity_holds_across_the_whole_walk() {
        let t = tuning();
        let floor = t.fade_end_y + t.horizon_exclusion_margin;

        for visuals in [&SPRING, &SUMMER, &WINTER] {
            for step in 0..=2000 {
                let progress = step as f32 / 2000.0;
                let state = celestial_state(visuals, progress, t.orbit_depth, &t);

                if let (Some(sun), Some(moon)) = (&state.sun, &state.moon) {
                    let sun_visible = sun.position[1] > floor && sun.opacity > 0.015;
                    let moon_visible = moon.position[1] > floor && moon.opacity > 0.015;
                    assert!(
                        !(sun_visible && moon_visible),
                        "both bodies visible at progress {progress}"
                    );
                }
            }
        }
    }

    #[test]
    fn low_bodies_take_the_horizon_tint() {
        let t = tuning();
        // Catch the summer sun just clearing the horizon on its way up
        let state = celestial_state(&SUMMER, 0.19, t.orbit_depth, &t);

        let sun = state.sun.expect("rising summer sun");
        assert!(sun.opacity < 0.1, "the rising sun should still be faint");

        // Near the horizon the color sits closer to the sky bottom than to
        // the authored sun color
        let to_sky = (sun.color.b - SUMMER.sky_bottom_color.b).abs();
        let to_sun = (sun.color.b - SUMMER.sun_color.b).abs();
        assert!(to_sky < to_sun);
    }
}
