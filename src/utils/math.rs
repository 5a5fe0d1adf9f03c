//! Scalar easing and smoothing helpers shared by the journey core and the
//! presentation systems.
//!
//! Everything here is pure and total: inputs outside the expected ranges are
//! clamped, never rejected. The scene leans on these in two places: the
//! season/celestial computations (every transition runs through
//! [`smootherstep`]) and the per-frame travel smoothing ([`damp`]).

use crate::resources::SharedRng;
use bevy::math::Vec3;
use rand::Rng;

/// Clamps a scalar to the unit interval.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `from` and `to` by `t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Quintic smoother-step easing over `[edge0, edge1]`.
///
/// Zero first and second derivative at both edges, so chained segments meet
/// without velocity or acceleration discontinuities. Returns 0 below `edge0`
/// and 1 above `edge1`.
pub fn smootherstep(value: f32, edge0: f32, edge1: f32) -> f32 {
    let span = edge1 - edge0;
    if span.abs() <= f32::EPSILON {
        return if value < edge0 { 0.0 } else { 1.0 };
    }

    let t = clamp01((value - edge0) / span);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Frame-rate independent exponential smoothing toward `target`.
///
/// `response` is the decay rate: higher values converge faster. Equivalent to
/// `lerp(current, target, 1 - e^(-response * delta))`.
pub fn damp(current: f32, target: f32, response: f32, delta: f32) -> f32 {
    lerp(current, target, 1.0 - libm::expf(-response * delta))
}

/// Random direction on the upper unit hemisphere.
///
/// Used to scatter the star dome above the horizon. Uniform over the
/// hemisphere surface.
pub fn random_sky_direction(rng: &mut SharedRng) -> Vec3 {
    let theta = rng.random_range(0.0..=2.0 * core::f32::consts::PI);
    let phi = libm::acosf(rng.random_range(0.0..=1.0));

    Vec3::new(
        libm::sinf(phi) * libm::cosf(theta),
        libm::cosf(phi),
        libm::sinf(phi) * libm::sinf(theta),
    )
}

#[cfg(test)]
mod math_tests {
    use super::*;

    #[test]
    fn smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0, 0.0, 1.0), 0.0);
        assert_eq!(smootherstep(1.0, 0.0, 1.0), 1.0);
        assert_eq!(smootherstep(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(smootherstep(5.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn smootherstep_midpoint_is_half() {
        assert!((smootherstep(0.5, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smootherstep_flat_at_edges() {
        // Numerical derivative near both edges should be ~0
        let eps = 1e-3;
        let near_zero = (smootherstep(eps, 0.0, 1.0) - smootherstep(0.0, 0.0, 1.0)) / eps;
        let near_one = (smootherstep(1.0, 0.0, 1.0) - smootherstep(1.0 - eps, 0.0, 1.0)) / eps;

        assert!(
            near_zero.abs() < 1e-2,
            "derivative at 0 should vanish, was {near_zero}"
        );
        assert!(
            near_one.abs() < 1e-2,
            "derivative at 1 should vanish, was {near_one}"
        );
    }

    #[test]
    fn smootherstep_shifted_window() {
        assert_eq!(smootherstep(0.16, 0.16, 0.27), 0.0);
        assert_eq!(smootherstep(0.27, 0.16, 0.27), 1.0);
        let mid = smootherstep(0.215, 0.16, 0.27);
        assert!((mid - 0.5).abs() < 1e-5);
    }

    #[test]
    fn smootherstep_degenerate_window() {
        assert_eq!(smootherstep(0.5, 0.3, 0.3), 1.0);
        assert_eq!(smootherstep(0.1, 0.3, 0.3), 0.0);
    }

    #[test]
    fn damp_converges_monotonically() {
        let mut value = 0.0;
        let mut previous_gap = 10.0_f32;
        for _ in 0..200 {
            value = damp(value, 10.0, 3.8, 1.0 / 60.0);
            let gap = (10.0 - value).abs();
            assert!(gap <= previous_gap);
            previous_gap = gap;
        }
        assert!(
            previous_gap < 0.05,
            "damp should approach target, gap {previous_gap}"
        );
    }

    #[test]
    fn damp_is_frame_rate_stable() {
        // One long step lands at the same place as two half steps
        let one = damp(0.0, 1.0, 2.0, 0.2);
        let half = damp(0.0, 1.0, 2.0, 0.1);
        let two = damp(half, 1.0, 2.0, 0.1);
        assert!((one - two).abs() < 1e-6);
    }

    #[test]
    fn sky_directions_stay_above_horizon() {
        let mut rng = SharedRng::from_seed(7);
        for _ in 0..1_000 {
            let dir = random_sky_direction(&mut rng);
            assert!(dir.y >= 0.0, "star direction dipped below horizon: {dir}");
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }
}
