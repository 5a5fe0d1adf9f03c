//! Wildwood prelude module
//!
//! Re-exports the most commonly used types, traits, and functions across the
//! application to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::{QualityTier, SceneConfig};

// Internal re-exports - States and events
pub use crate::events::SceneCommand;
pub use crate::states::AppState;

// Internal re-exports - Resources (most commonly used)
pub use crate::resources::{
    ActivePalette, FocusedWaypoint, OrbitVisualizationSettings, SharedRng, SkyState,
    TravelDistance,
};

// Internal re-exports - Journey core
pub use crate::journey::celestial::{CelestialBody, CelestialState, celestial_state};
pub use crate::journey::season::{SeasonKind, SeasonPalette, season_palette};
