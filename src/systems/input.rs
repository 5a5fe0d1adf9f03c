//! Keyboard bindings and scene command handling.
//!
//! Key presses translate into [`SceneCommand`] events; a single handler
//! applies them. Walking input itself lives in `travel.rs` since it is
//! continuous rather than edge-triggered.

use crate::prelude::*;
use bevy::app::AppExit;

pub fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<SceneCommand>,
) {
    for &keycode in keys.get_just_pressed() {
        match keycode {
            KeyCode::Space => {
                commands.write(SceneCommand::TogglePause);
            }
            KeyCode::KeyN => {
                commands.write(SceneCommand::Restart);
            }
            KeyCode::KeyO => {
                commands.write(SceneCommand::ToggleOrbitVisualization);
            }
            KeyCode::Enter => {
                commands.write(SceneCommand::OpenFocusedWaypoint);
            }
            KeyCode::KeyQ => {
                commands.write(SceneCommand::CycleQuality);
            }
            KeyCode::Escape => {
                commands.write(SceneCommand::Quit);
            }
            _ => {}
        }
    }
}

pub fn handle_scene_commands(
    mut commands: EventReader<SceneCommand>,
    mut travel: ResMut<TravelDistance>,
    mut orbit_settings: ResMut<OrbitVisualizationSettings>,
    mut quality: ResMut<QualityTier>,
    mut config: ResMut<SceneConfig>,
    focused: Res<FocusedWaypoint>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands.read() {
        match command {
            SceneCommand::Restart => {
                *travel = TravelDistance::default();
                info!("Walking back to the trailhead");
            }
            SceneCommand::TogglePause => {
                let next = match state.get() {
                    AppState::Walking => AppState::Paused,
                    AppState::Paused => AppState::Walking,
                };
                next_state.set(next);
            }
            SceneCommand::ToggleOrbitVisualization => {
                orbit_settings.enabled = !orbit_settings.enabled;
            }
            SceneCommand::OpenFocusedWaypoint => match focused.0 {
                Some((waypoint, _)) => match waypoint.link {
                    Some(link) => {
                        if let Err(e) = webbrowser::open(link) {
                            warn!("Failed to open {}: {}", link, e);
                        }
                    }
                    None => info!("{} has no link to open", waypoint.title),
                },
                None => info!("No waypoint in focus"),
            },
            SceneCommand::CycleQuality => {
                *quality = quality.next();
                // Mirrored into the config resource; persisted on exit
                config.ui.quality = *quality;
                info!("Quality tier: {}", quality.label());
            }
            SceneCommand::Quit => {
                exit.write_default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, press_key};

    fn app_with_input_systems() -> App {
        let mut app = create_test_app();
        app.add_systems(Update, (keyboard_commands, handle_scene_commands).chain());
        app
    }

    #[test]
    fn space_toggles_pause_state() {
        let mut app = app_with_input_systems();
        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Walking
        );

        press_key(&mut app, KeyCode::Space);
        app.update();
        // State transitions apply on the following frame boundary
        app.update();

        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Paused
        );
    }

    #[test]
    fn restart_returns_to_the_trailhead() {
        let mut app = app_with_input_systems();
        app.insert_resource(TravelDistance::starting_at(640.0));

        press_key(&mut app, KeyCode::KeyN);
        app.update();

        let travel = app.world().resource::<TravelDistance>();
        assert_eq!(travel.target, 0.0);
        assert_eq!(travel.current, 0.0);
    }

    #[test]
    fn orbit_overlay_toggles() {
        let mut app = app_with_input_systems();
        assert!(!app.world().resource::<OrbitVisualizationSettings>().enabled);

        press_key(&mut app, KeyCode::KeyO);
        app.update();
        assert!(app.world().resource::<OrbitVisualizationSettings>().enabled);
    }

    #[test]
    fn quality_cycles_through_tiers() {
        let mut app = app_with_input_systems();
        app.insert_resource(QualityTier::Low);

        press_key(&mut app, KeyCode::KeyQ);
        app.update();

        assert_eq!(*app.world().resource::<QualityTier>(), QualityTier::Medium);
    }
}
