use crate::journey::celestial::CelestialState;
use crate::journey::season::SeasonPalette;
use crate::journey::waypoints::{Waypoint, WaypointActivation};
use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Distance traveled along the road.
///
/// `target` moves with the input; `current` chases it with exponential
/// smoothing and is what every palette query reads. Both stay within
/// `[0, scroll_limit]`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TravelDistance {
    pub target: f32,
    pub current: f32,
}

impl TravelDistance {
    pub fn starting_at(distance: f32) -> Self {
        Self {
            target: distance,
            current: distance,
        }
    }
}

/// The blended palette for the current frame. Recomputed every frame; thin
/// consumers read it, nothing mutates it in place.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default, PartialEq)]
pub struct ActivePalette(pub SeasonPalette);

/// Sun and moon state for the current frame.
#[derive(Resource, Deref, DerefMut, Debug, Clone, Copy, Default, PartialEq)]
pub struct SkyState(pub CelestialState);

/// The waypoint currently claiming the HUD, if any.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FocusedWaypoint(pub Option<(&'static Waypoint, WaypointActivation)>);

/// Debug overlay drawing the celestial orbit and the band breakpoints.
#[derive(Resource, Default)]
pub struct OrbitVisualizationSettings {
    pub enabled: bool,
}
