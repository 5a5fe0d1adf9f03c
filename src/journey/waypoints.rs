//! Waypoints along the road and their approach activation.
//!
//! Each waypoint is a milestone marker the traveler walks up to. Activation
//! rises over a long lead-in ahead of the marker and falls off over a
//! shorter tail behind it, with different shaping for each direction so a
//! marker greets the traveler early but lets go quickly once passed.

use crate::utils::math::{clamp01, smootherstep};

/// Distance ahead of a marker over which it fades in.
pub const APPROACH_LEAD_IN: f32 = 110.0;
/// Distance behind a marker over which it fades out.
pub const APPROACH_FALLOFF: f32 = 85.0;

const APPROACH_SHAPING: f32 = 0.88;
const FALLOFF_SHAPING: f32 = 1.2;
const APPROACH_PRIORITY_WEIGHT: f32 = 1.18;
const APPROACH_PROXIMITY_WEIGHT: f32 = 0.08;
const FALLOFF_PRIORITY_WEIGHT: f32 = 0.82;

/// Minimum eased activation before a waypoint is considered in focus.
const FOCUS_THRESHOLD: f32 = 0.02;

/// A milestone marker along the road.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub id: &'static str,
    pub distance: f32,
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub link: Option<&'static str>,
    /// Once reached, stays in focus through the end of the road.
    pub persist_until_end: bool,
}

/// Authored markers, sorted by distance.
pub static WAYPOINTS: &[Waypoint] = &[
    Waypoint {
        id: "trailhead",
        distance: 150.0,
        tag: "Welcome",
        title: "The Forest Road",
        subtitle: "A walk through four seasons",
        body: "Keep walking. The light, the weather, and the sky all answer to how far you have come.",
        link: None,
        persist_until_end: false,
    },
    Waypoint {
        id: "aurora-trail",
        distance: 340.0,
        tag: "Project",
        title: "Aurora Trail",
        subtitle: "Real-time scene engine",
        body: "A deterministic palette and celestial engine driving everything you see on this road.",
        link: Some("https://github.com/jmu-dev/aurora-trail"),
        persist_until_end: false,
    },
    Waypoint {
        id: "fern-studio",
        distance: 520.0,
        tag: "Experience",
        title: "Fern Studio",
        subtitle: "Graphics engineer, 2023 to 2024",
        body: "Shipped interactive installations and the tooling behind their show control.",
        link: Some("https://fern.studio"),
        persist_until_end: false,
    },
    Waypoint {
        id: "understory",
        distance: 700.0,
        tag: "Project",
        title: "Understory",
        subtitle: "Procedural forest toolkit",
        body: "Growth rules and wind simulation for forests that feel lived in rather than placed.",
        link: Some("https://github.com/jmu-dev/understory"),
        persist_until_end: false,
    },
    Waypoint {
        id: "north-ridge",
        distance: 860.0,
        tag: "Experience",
        title: "North Ridge Labs",
        subtitle: "Rendering intern, 2022",
        body: "Profiled and rebuilt the particle pipeline; the winters here are a small homage.",
        link: None,
        persist_until_end: false,
    },
    Waypoint {
        id: "degree",
        distance: 1000.0,
        tag: "Education",
        title: "Honours B.Sc., Computer Science",
        subtitle: "Minors in Mathematics and Statistics",
        body: "Theory, algorithms, and software design, carried all the way to the end of the road.",
        link: None,
        persist_until_end: true,
    },
];

/// How strongly a marker claims the traveler's attention right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaypointActivation {
    /// Positive while the marker is still ahead.
    pub distance_ahead: f32,
    /// Raw closeness in `[0, 1]` over the active influence range.
    pub proximity: f32,
    /// Eased, direction-shaped activation in `[0, 1]`.
    pub eased: f32,
    /// Ranking score used to pick the focused marker.
    pub priority: f32,
}

/// Activation of a marker at `marker_distance` for a traveler at
/// `current_distance`. Pure and total.
pub fn approach_activation(marker_distance: f32, current_distance: f32) -> WaypointActivation {
    let distance_ahead = marker_distance - current_distance;
    let approaching = distance_ahead >= 0.0;
    let influence_range = if approaching {
        APPROACH_LEAD_IN
    } else {
        APPROACH_FALLOFF
    };
    let proximity = 1.0 - clamp01(distance_ahead.abs() / influence_range.max(f32::EPSILON));
    let smoothed = clamp01(smootherstep(proximity, 0.0, 1.0));
    let eased = libm::powf(
        smoothed,
        if approaching {
            APPROACH_SHAPING
        } else {
            FALLOFF_SHAPING
        },
    );
    let priority = if approaching {
        eased * APPROACH_PRIORITY_WEIGHT + proximity * APPROACH_PROXIMITY_WEIGHT
    } else {
        eased * FALLOFF_PRIORITY_WEIGHT
    };

    WaypointActivation {
        distance_ahead,
        proximity,
        eased,
        priority,
    }
}

/// The marker currently in focus, if any: highest priority among those above
/// the focus threshold. Persistent markers hold their peak once reached.
pub fn focused_waypoint(current_distance: f32) -> Option<(&'static Waypoint, WaypointActivation)> {
    WAYPOINTS
        .iter()
        .map(|waypoint| {
            let probe_distance = if waypoint.persist_until_end {
                current_distance.min(waypoint.distance)
            } else {
                current_distance
            };
            (waypoint, approach_activation(waypoint.distance, probe_distance))
        })
        .filter(|(_, activation)| activation.eased > FOCUS_THRESHOLD)
        .max_by(|(_, a), (_, b)| a.priority.total_cmp(&b.priority))
}
