//! Core journey plugin: resources, state, events, and the frame ordering
//! every other plugin hangs off.
//!
//! The Update schedule runs in four chained sets: input first, then travel,
//! then the scene-state refresh, and finally the consumers (camera, sky,
//! HUD). Consumers therefore always read the palette and celestial records
//! computed from this frame's distance.

use crate::prelude::*;
use crate::systems::{input, scene_state, travel};
#[cfg(feature = "diagnostics")]
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum JourneySet {
    Input,
    Travel,
    SceneState,
    Consume,
}

pub struct JourneyPlugin;

impl Plugin for JourneyPlugin {
    fn build(&self, app: &mut App) {
        // main inserts a config with CLI overrides applied; fall back to the
        // user config when running bare (tests, examples).
        if !app.world().contains_resource::<SceneConfig>() {
            app.insert_resource(SceneConfig::load_from_user_config());
        }
        let quality = app.world().resource::<SceneConfig>().ui.quality;
        app.insert_resource(quality);

        app.init_resource::<SharedRng>();
        app.init_resource::<TravelDistance>();
        app.init_resource::<ActivePalette>();
        app.init_resource::<SkyState>();
        app.init_resource::<FocusedWaypoint>();
        app.init_resource::<OrbitVisualizationSettings>();

        app.init_state::<AppState>();
        app.add_event::<SceneCommand>();

        #[cfg(feature = "diagnostics")]
        app.edit_schedule(Update, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.configure_sets(
            Update,
            (
                JourneySet::Input,
                JourneySet::Travel,
                JourneySet::SceneState,
                JourneySet::Consume,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (input::keyboard_commands, input::handle_scene_commands)
                .chain()
                .in_set(JourneySet::Input),
        );
        app.add_systems(
            Update,
            (
                travel::advance_travel.run_if(in_state(AppState::Walking)),
                travel::smooth_travel,
            )
                .chain()
                .in_set(JourneySet::Travel),
        );
        app.add_systems(
            Update,
            scene_state::refresh_scene_state.in_set(JourneySet::SceneState),
        );
        app.add_systems(Update, travel::save_session_on_exit);
    }
}
