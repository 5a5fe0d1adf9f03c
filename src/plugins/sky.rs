//! Sky plugin: wires the palette and celestial consumers into the frame.

use crate::plugins::journey::JourneySet;
use crate::systems::sky;
use bevy::prelude::*;

pub struct SkyPlugin;

impl Plugin for SkyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, sky::setup_sky);
        app.add_systems(
            Update,
            (
                sky::apply_palette_environment,
                sky::sync_celestial_bodies,
                sky::update_star_material,
                sky::respawn_star_dome,
                sky::visualize_orbit,
            )
                .in_set(JourneySet::Consume),
        );
    }
}
