//! Per-frame scene state refresh.
//!
//! One system recomputes the palette, the celestial state, and the focused
//! waypoint from the same smoothed distance, so every consumer this frame
//! reads an internally consistent snapshot.

use crate::journey::waypoints::focused_waypoint;
use crate::prelude::*;

pub fn refresh_scene_state(
    travel: Res<TravelDistance>,
    config: Res<SceneConfig>,
    mut palette: ResMut<ActivePalette>,
    mut sky: ResMut<SkyState>,
    mut focused: ResMut<FocusedWaypoint>,
) {
    let distance = travel.current;

    palette.0 = season_palette(distance, &config.journey);
    sky.0 = celestial_state(
        &palette.visuals,
        config.journey.progress(distance),
        config.celestial.orbit_depth,
        &config.celestial,
    );
    focused.0 = focused_waypoint(distance);
}
