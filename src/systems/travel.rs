//! Travel input and smoothing.
//!
//! The walk input moves a target distance; the displayed distance chases it
//! with exponential smoothing so the palette never jumps. Both values stay
//! inside `[0, scroll_limit]`, which keeps winter holding at the end of the
//! road instead of running off the authored tables.

use crate::config::SavedJourney;
use crate::prelude::*;
use crate::utils::math::damp;
use bevy::app::AppExit;
use bevy::input::mouse::MouseWheel;

/// Below this gap the smoothed distance snaps to the target.
const SNAP_PRECISION: f32 = 0.0002;

pub fn advance_travel(
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel_events: EventReader<MouseWheel>,
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut travel: ResMut<TravelDistance>,
) {
    let journey = &config.journey;
    let mut direction = 0.0;

    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        direction += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        direction -= 1.0;
    }

    let sprint = if keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight) {
        journey.sprint_multiplier
    } else {
        1.0
    };

    let mut delta = direction * journey.walk_speed * sprint * time.delta_secs();

    for event in wheel_events.read() {
        delta += event.y * journey.wheel_step;
    }

    if delta != 0.0 {
        travel.target = (travel.target + delta).clamp(0.0, journey.scroll_limit);
    }
}

pub fn smooth_travel(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut travel: ResMut<TravelDistance>,
) {
    let gap = travel.target - travel.current;
    if gap == 0.0 {
        return;
    }

    if gap.abs() <= SNAP_PRECISION {
        travel.current = travel.target;
        return;
    }

    travel.current = damp(
        travel.current,
        travel.target,
        config.journey.travel_response,
        time.delta_secs(),
    );
}

/// Persists the session when the app exits: the return-point snapshot so the
/// next launch resumes mid-road, and the config so the quality tier sticks.
/// A walk that never left the trailhead saves no return point.
pub fn save_session_on_exit(
    mut exit_events: EventReader<AppExit>,
    travel: Res<TravelDistance>,
    config: Res<SceneConfig>,
) {
    for _ in exit_events.read() {
        if let Err(e) = config.save_to_user_config() {
            warn!("Failed to save configuration: {}", e);
        }

        if travel.current <= 1.0 {
            continue;
        }

        let snapshot = SavedJourney {
            distance: travel.current,
        };
        match snapshot.persist() {
            Ok(()) => info!("Saved return point at {:.1}", travel.current),
            Err(e) => warn!("Failed to save return point: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn fixed_frames(app: &mut App, frames: usize) {
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            16,
        )));
        for _ in 0..frames {
            app.update();
        }
    }

    #[test]
    fn smoothing_chases_and_snaps() {
        let mut app = create_test_app();
        app.add_systems(Update, smooth_travel);
        app.insert_resource(TravelDistance {
            target: 100.0,
            current: 0.0,
        });

        fixed_frames(&mut app, 600);

        let travel = app.world().resource::<TravelDistance>();
        assert_eq!(
            travel.current, travel.target,
            "smoothing should converge and snap exactly"
        );
    }

    #[test]
    fn advance_clamps_to_scroll_limit() {
        let mut app = create_test_app();
        app.add_systems(Update, advance_travel);
        app.insert_resource(TravelDistance {
            target: 1074.0,
            current: 1074.0,
        });

        crate::test_utils::press_key(&mut app, KeyCode::KeyW);
        fixed_frames(&mut app, 600);

        let travel = app.world().resource::<TravelDistance>();
        let limit = app.world().resource::<SceneConfig>().journey.scroll_limit;
        assert_eq!(travel.target, limit);
    }

    #[test]
    fn walking_backward_stops_at_the_trailhead() {
        let mut app = create_test_app();
        app.add_systems(Update, advance_travel);
        app.insert_resource(TravelDistance {
            target: 5.0,
            current: 5.0,
        });

        crate::test_utils::press_key(&mut app, KeyCode::KeyS);
        fixed_frames(&mut app, 600);

        assert_eq!(app.world().resource::<TravelDistance>().target, 0.0);
    }
}
