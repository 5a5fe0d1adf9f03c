//! Centralized event definitions.
//!
//! Scene commands are the single mechanism by which input reaches the scene:
//! keyboard systems translate key presses into commands, and one handler
//! applies them. Keeps the bindings and the behavior in separate places.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Walk back to the trailhead.
    Restart,
    TogglePause,
    ToggleOrbitVisualization,
    /// Open the focused waypoint's link in the system browser.
    OpenFocusedWaypoint,
    CycleQuality,
    Quit,
}
