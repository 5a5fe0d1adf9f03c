//! Command line interface for Wildwood

use clap::Parser;
use std::fmt;

use crate::config::{QualityTier, SavedJourney, SceneConfig};
use crate::journey::season::SeasonKind;
use crate::journey::waypoints::WAYPOINTS;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Starting distance was not a usable number
    InvalidDistance(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidDistance(msg) => write!(f, "Invalid distance: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Wildwood - a walk through four seasons
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Starting distance along the road, in meters
    #[arg(short = 'd', long, value_name = "METERS")]
    pub distance: Option<f32>,

    /// Random seed for the star scatter and camera bob phase
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Quality tier (overrides config file)
    #[arg(short = 'q', long, value_name = "TIER")]
    pub quality: Option<QualityTier>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Ignore any saved return point and start at the trailhead
    #[arg(long)]
    pub fresh: bool,

    /// List the seasons with their distance bands and exit
    #[arg(long)]
    pub list_seasons: bool,

    /// List the waypoints along the road and exit
    #[arg(long)]
    pub list_waypoints: bool,
}

/// Handles the --list-seasons flag by printing the season bands
pub fn handle_list_seasons(config: &SceneConfig) {
    let journey = &config.journey;
    let bands = [
        (SeasonKind::Spring, 0.0, journey.spring_only_end),
        (
            SeasonKind::Summer,
            journey.spring_summer_end,
            journey.summer_only_end,
        ),
        (
            SeasonKind::Autumn,
            journey.summer_autumn_end,
            journey.autumn_only_end,
        ),
        (
            SeasonKind::Winter,
            journey.autumn_winter_end,
            journey.max_distance,
        ),
    ];

    println!("Seasons along the road (transitions between the bands):");
    for (kind, start, end) in bands {
        let visuals = kind.visuals();
        println!(
            "  {:<7} {:>4.0} to {:>4.0} m   snow {:.2}  rain {:.2}  petals {:.2}  leaves {:.2}",
            kind.label(),
            start,
            end,
            visuals.snow_intensity,
            visuals.rain_intensity,
            visuals.petal_intensity,
            visuals.leaf_intensity,
        );
    }
}

/// Handles the --list-waypoints flag by printing the marker table
pub fn handle_list_waypoints() {
    println!("Waypoints along the road:");
    for waypoint in WAYPOINTS {
        let link = waypoint.link.unwrap_or("-");
        println!(
            "  {:>5.0} m  [{}] {} ({link})",
            waypoint.distance, waypoint.tag, waypoint.title
        );
    }
}

/// Loads configuration from file or defaults, then applies command-line
/// overrides. An explicit --config path that cannot be read is an error; the
/// implicit user config silently falls back to defaults.
pub fn load_and_apply_config(args: &Args) -> Result<SceneConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| CliError::ConfigLoad(format!("{config_path}: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigLoad(format!("{config_path}: {e}")))?
    } else {
        SceneConfig::load_from_user_config()
    };

    if let Some(distance) = args.distance {
        if !distance.is_finite() {
            return Err(CliError::InvalidDistance(format!(
                "{distance} is not a finite number of meters"
            )));
        }
    }

    if let Some(quality) = args.quality {
        println!("Using quality tier: {}", quality.label());
        config.ui.quality = quality;
    }

    Ok(config)
}

/// Where the walk starts: an explicit CLI distance wins, then the saved
/// return point, then the trailhead. Always clamped to the walkable range.
pub fn starting_distance(args: &Args, config: &SceneConfig) -> f32 {
    let limit = config.journey.scroll_limit;

    if let Some(distance) = args.distance {
        return distance.clamp(0.0, limit);
    }

    if args.fresh {
        return 0.0;
    }

    match SavedJourney::restore() {
        Some(saved) => {
            let clamped = saved.distance.clamp(0.0, limit);
            println!("Resuming the walk at {clamped:.0} m");
            clamped
        }
        None => 0.0,
    }
}
