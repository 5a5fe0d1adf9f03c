use bevy::prelude::*;
use clap::Parser;

use wildwood::cli::{self, Args};
use wildwood::plugins::attribution::AttributionPlugin;
use wildwood::plugins::camera::CameraPlugin;
use wildwood::plugins::hud::HudPlugin;
use wildwood::plugins::journey::JourneyPlugin;
use wildwood::plugins::sky::SkyPlugin;
use wildwood::resources::{SharedRng, TravelDistance};
use wildwood::states::AppState;

fn main() {
    let args = Args::parse();

    let config = match cli::load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.list_seasons {
        cli::handle_list_seasons(&config);
        return;
    }
    if args.list_waypoints {
        cli::handle_list_waypoints();
        return;
    }

    let start = cli::starting_distance(&args, &config);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("Wildwood v{}", env!("CARGO_PKG_VERSION")),
            ..default()
        }),
        ..default()
    }));

    app.insert_resource(config);
    app.insert_resource(TravelDistance::starting_at(start));
    app.insert_resource(SharedRng::from_optional_seed(args.seed));

    app.add_plugins((
        JourneyPlugin,
        CameraPlugin,
        SkyPlugin,
        HudPlugin,
        AttributionPlugin,
    ));

    if args.paused {
        app.insert_state(AppState::Paused);
    }

    app.run();
}
