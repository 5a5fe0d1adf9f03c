//! Attribution plugin - Displays program name and version
//!
//! Shows the attribution text in the lower right corner of the screen.
//! Clicking the attribution opens the project repository.

use crate::prelude::*;

#[derive(Component)]
pub struct AttributionText;

pub struct AttributionPlugin;

impl Plugin for AttributionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_attribution);
        app.add_systems(Update, handle_attribution_interaction);
    }
}

fn setup_attribution(mut commands: Commands, config: Res<SceneConfig>) {
    let attribution_text_font = TextFont::from_font_size(config.ui.attribution_font_size);

    commands.spawn((
        Button,
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(5.0),
            right: Val::Px(5.0),
            padding: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(Color::NONE),
        Text::new(format!(
            "Wildwood v{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("BUILD_DATE")
        )),
        attribution_text_font,
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
        AttributionText,
        Interaction::default(),
    ));
}

fn handle_attribution_interaction(
    mut interaction_query: Query<
        (&Interaction, &mut TextColor),
        (Changed<Interaction>, With<AttributionText>),
    >,
) {
    for (interaction, mut text_color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                // Open the repository URL from package metadata
                if let Some(repo_url) = option_env!("CARGO_PKG_REPOSITORY") {
                    if let Err(e) = webbrowser::open(repo_url) {
                        warn!("Failed to open repository URL: {}", e);
                    }
                } else {
                    warn!("Repository URL not found in package metadata");
                }
                text_color.0 = Color::srgba(1.0, 1.0, 1.0, 0.5);
            }
            Interaction::Hovered => {
                text_color.0 = Color::srgba(1.0, 1.0, 1.0, 0.5);
            }
            Interaction::None => {
                text_color.0 = Color::srgba(1.0, 1.0, 1.0, 0.3);
            }
        }
    }
}
