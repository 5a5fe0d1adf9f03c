//! Scene configuration.
//!
//! Every tunable the journey core consumes lives here, with defaults equal to
//! the authored design constants. Configuration round-trips through TOML; a
//! missing or malformed file degrades to defaults with a log line, never a
//! failure. Visual parity with the original scene depends on these defaults,
//! so treat changes as design decisions, not cleanups.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

const USER_CONFIG_FILE: &str = "wildwood.toml";
const SESSION_FILE: &str = "session.toml";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub journey: JourneyTuning,
    pub celestial: CelestialTuning,
    pub camera: CameraTuning,
    pub ui: UiTuning,
}

/// Distance domain of the forest walk: band breakpoints, the transition bias,
/// and the travel feel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct JourneyTuning {
    /// Total travel range; distances beyond this clamp.
    pub max_distance: f32,
    /// How far the walk input may actually carry the traveler. Slightly short
    /// of `max_distance` so winter holds at the end of the road.
    pub scroll_limit: f32,
    /// Band breakpoints. The band test is strictly-less-than at every edge,
    /// so each distance maps to exactly one band.
    pub spring_only_end: f32,
    pub spring_summer_end: f32,
    pub summer_only_end: f32,
    pub summer_autumn_end: f32,
    pub autumn_only_end: f32,
    pub autumn_winter_end: f32,
    /// Asymmetric fade exponent for the weather intensity fields. An effect
    /// ramping in uses `t^(1/bias)`, one winding down uses `t^bias`.
    pub transition_bias: f32,
    /// Exponential smoothing rate for the displayed distance.
    pub travel_response: f32,
    /// Walk speed in distance units per second.
    pub walk_speed: f32,
    /// Forward-speed multiplier while shift is held.
    pub sprint_multiplier: f32,
    /// Distance units per mouse-wheel line.
    pub wheel_step: f32,
}

impl Default for JourneyTuning {
    fn default() -> Self {
        Self {
            max_distance: 1150.0,
            scroll_limit: 1075.0,
            spring_only_end: 200.0,
            spring_summer_end: 300.0,
            summer_only_end: 500.0,
            summer_autumn_end: 600.0,
            autumn_only_end: 800.0,
            autumn_winter_end: 900.0,
            transition_bias: 1.55,
            travel_response: 3.8,
            walk_speed: 42.0,
            sprint_multiplier: 2.5,
            wheel_step: 1.6,
        }
    }
}

impl JourneyTuning {
    /// Normalized travel progress for a distance, clamped to `[0, 1]`.
    pub fn progress(&self, distance: f32) -> f32 {
        (distance / self.max_distance.max(1.0)).clamp(0.0, 1.0)
    }
}

/// Geometry and timing of the shared sun/moon orbit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CelestialTuning {
    pub center_x: f32,
    /// World height of the visual horizon; bodies are fully faded here.
    pub fade_end_y: f32,
    /// Height above which the altitude fade no longer attenuates.
    pub fade_start_y: f32,
    pub orbit_center_y: f32,
    pub orbit_radius: f32,
    /// Depth plane the bodies ride on.
    pub orbit_depth: f32,
    pub sun_fade_in_start: f32,
    pub sun_fade_in_end: f32,
    pub sun_fade_out_start: f32,
    pub sun_fade_out_end: f32,
    /// Above this dominance score the moon is fully suppressed.
    pub dominance_threshold: f32,
    /// Weight of sun altitude (vs. sun presence) in the dominance score.
    pub altitude_weight: f32,
    /// Margin above the fade floor inside which the exclusivity pass does not
    /// force a winner.
    pub horizon_exclusion_margin: f32,
}

impl Default for CelestialTuning {
    fn default() -> Self {
        let horizon = 72.0;
        Self {
            center_x: 0.0,
            fade_end_y: horizon,
            fade_start_y: horizon + 16.0,
            orbit_center_y: horizon + 46.0,
            orbit_radius: 54.0,
            orbit_depth: -1226.0,
            sun_fade_in_start: 0.16,
            sun_fade_in_end: 0.27,
            sun_fade_out_start: 0.70,
            sun_fade_out_end: 0.86,
            dominance_threshold: 0.48,
            altitude_weight: 0.85,
            horizon_exclusion_margin: 2.2,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraTuning {
    pub base_height: f32,
    pub base_pitch_degrees: f32,
    pub yaw_range_degrees: f32,
    pub pitch_range_degrees: f32,
    pub pointer_response: f32,
    pub position_response: f32,
    pub rotation_response: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    pub bloom_intensity: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            base_height: 1.82,
            base_pitch_degrees: -4.0,
            yaw_range_degrees: 20.0,
            pitch_range_degrees: 12.0,
            pointer_response: 8.2,
            position_response: 6.2,
            rotation_response: 7.1,
            bob_frequency: 0.55,
            bob_amplitude: 0.02,
            bloom_intensity: 2.4,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiTuning {
    pub hud_font_size: f32,
    pub attribution_font_size: f32,
    pub quality: QualityTier,
}

impl Default for UiTuning {
    fn default() -> Self {
        Self {
            hud_font_size: 14.0,
            attribution_font_size: 10.0,
            quality: QualityTier::Low,
        }
    }
}

/// Scene density preset, persisted with the user config between runs.
#[derive(
    Resource,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Low,
    Medium,
    High,
}

impl QualityTier {
    pub fn star_count(self) -> usize {
        match self {
            QualityTier::Low => 140,
            QualityTier::Medium => 260,
            QualityTier::High => 420,
        }
    }

    pub fn next(self) -> Self {
        match self {
            QualityTier::Low => QualityTier::Medium,
            QualityTier::Medium => QualityTier::High,
            QualityTier::High => QualityTier::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityTier::Low => "low",
            QualityTier::Medium => "medium",
            QualityTier::High => "high",
        }
    }
}

impl SceneConfig {
    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist or doesn't parse.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Load from the per-user config directory, falling back to defaults.
    pub fn load_from_user_config() -> Self {
        match user_config_path() {
            Some(path) => Self::load_or_default(&path.to_string_lossy()),
            None => Self::default(),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to the per-user config directory, creating it if needed.
    pub fn save_to_user_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = user_config_path().ok_or("no user config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save(&path.to_string_lossy())
    }
}

/// Where the traveler left off, restored once at the next launch.
///
/// The equivalent of a return-point snapshot: written on exit, consumed on
/// startup, then cleared so a fresh walk starts from the trailhead.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SavedJourney {
    pub distance: f32,
}

impl SavedJourney {
    pub fn restore() -> Option<Self> {
        let path = session_path()?;
        let content = std::fs::read_to_string(&path).ok()?;
        // One-shot: the snapshot is consumed whether or not it parses
        let _ = std::fs::remove_file(&path);
        match toml::from_str::<Self>(&content) {
            Ok(saved) => Some(saved),
            Err(e) => {
                warn!("Discarding unreadable session snapshot: {}", e);
                None
            }
        }
    }

    pub fn persist(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = session_path().ok_or("no user config directory available")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "wildwood")
}

fn user_config_path() -> Option<std::path::PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
}

fn session_path() -> Option<std::path::PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SESSION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_design_constants() {
        let config = SceneConfig::default();

        assert_eq!(config.journey.max_distance, 1150.0);
        assert_eq!(config.journey.scroll_limit, 1075.0);
        assert_eq!(config.journey.spring_only_end, 200.0);
        assert_eq!(config.journey.spring_summer_end, 300.0);
        assert_eq!(config.journey.summer_only_end, 500.0);
        assert_eq!(config.journey.summer_autumn_end, 600.0);
        assert_eq!(config.journey.autumn_only_end, 800.0);
        assert_eq!(config.journey.autumn_winter_end, 900.0);
        assert_eq!(config.journey.transition_bias, 1.55);

        assert_eq!(config.celestial.orbit_radius, 54.0);
        assert_eq!(config.celestial.fade_end_y, 72.0);
        assert_eq!(config.celestial.fade_start_y, 88.0);
        assert_eq!(config.celestial.orbit_center_y, 118.0);
        assert_eq!(config.celestial.sun_fade_in_start, 0.16);
        assert_eq!(config.celestial.sun_fade_in_end, 0.27);
        assert_eq!(config.celestial.sun_fade_out_start, 0.70);
        assert_eq!(config.celestial.sun_fade_out_end, 0.86);
        assert_eq!(config.celestial.dominance_threshold, 0.48);
        assert_eq!(config.celestial.altitude_weight, 0.85);
        assert_eq!(config.celestial.horizon_exclusion_margin, 2.2);
    }

    #[test]
    fn toml_round_trip_preserves_config() {
        let mut config = SceneConfig::default();
        config.journey.transition_bias = 1.7;
        config.ui.quality = QualityTier::High;

        let text = toml::to_string_pretty(&config).unwrap();
        let restored: SceneConfig = toml::from_str(&text).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: SceneConfig =
            toml::from_str("[journey]\nmax_distance = 900.0\n").unwrap();

        assert_eq!(config.journey.max_distance, 900.0);
        // Untouched fields come from Default
        assert_eq!(config.journey.transition_bias, 1.55);
        assert_eq!(config.celestial.dominance_threshold, 0.48);
    }

    #[test]
    fn progress_clamps_both_ends() {
        let journey = JourneyTuning::default();

        assert_eq!(journey.progress(-50.0), 0.0);
        assert_eq!(journey.progress(0.0), 0.0);
        assert_eq!(journey.progress(575.0), 0.5);
        assert_eq!(journey.progress(1150.0), 1.0);
        assert_eq!(journey.progress(5000.0), 1.0);
    }

    #[test]
    fn quality_tier_cycles() {
        assert_eq!(QualityTier::Low.next(), QualityTier::Medium);
        assert_eq!(QualityTier::Medium.next(), QualityTier::High);
        assert_eq!(QualityTier::High.next(), QualityTier::Low);
    }
}
