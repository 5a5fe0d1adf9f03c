//! HUD plugin: season label, distance readout, and waypoint panel.

use crate::plugins::journey::JourneySet;
use crate::systems::hud;
use bevy::prelude::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::setup_hud);
        app.add_systems(
            Update,
            (
                hud::update_season_label,
                hud::update_distance_readout,
                hud::update_waypoint_panel,
            )
                .in_set(JourneySet::Consume),
        );
    }
}
