//! HUD: season label, distance readout, and the waypoint panel.
//!
//! Text and panel colors track the palette's HUD accent and milestone colors
//! so the chrome drifts through the seasons with the scene behind it.

use crate::prelude::*;

#[derive(Component)]
pub struct SeasonLabelText;

#[derive(Component)]
pub struct DistanceReadoutText;

#[derive(Component)]
pub struct WaypointPanel;

#[derive(Component)]
pub struct WaypointTagText;

#[derive(Component)]
pub struct WaypointTitleText;

#[derive(Component)]
pub struct WaypointBodyText;

const PANEL_BASE_ALPHA: f32 = 0.55;

pub fn setup_hud(mut commands: Commands, config: Res<SceneConfig>) {
    let label_font = TextFont::from_font_size(config.ui.hud_font_size + 6.0);
    let readout_font = TextFont::from_font_size(config.ui.hud_font_size);
    let tag_font = TextFont::from_font_size(config.ui.hud_font_size - 3.0);
    let title_font = TextFont::from_font_size(config.ui.hud_font_size + 2.0);
    let body_font = TextFont::from_font_size(config.ui.hud_font_size - 1.0);

    // Season and distance, top left
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(14.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Spring"),
                label_font,
                TextColor(Color::WHITE),
                SeasonLabelText,
            ));
            parent.spawn((
                Text::new("0 m"),
                readout_font,
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
                DistanceReadoutText,
            ));
        });

    // Waypoint panel, bottom center
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(26.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-220.0)),
                width: Val::Px(440.0),
                padding: UiRect::all(Val::Px(14.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BorderRadius::all(Val::Px(8.0)),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, PANEL_BASE_ALPHA)),
            Visibility::Hidden,
            WaypointPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                tag_font,
                TextColor(Color::WHITE),
                WaypointTagText,
            ));
            parent.spawn((
                Text::new(""),
                title_font,
                TextColor(Color::WHITE),
                WaypointTitleText,
            ));
            parent.spawn((
                Text::new(""),
                body_font,
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.75)),
                WaypointBodyText,
            ));
        });
}

pub fn update_season_label(
    palette: Res<ActivePalette>,
    mut label: Query<(&mut Text, &mut TextColor), With<SeasonLabelText>>,
) {
    for (mut text, mut color) in &mut label {
        text.0 = palette.active_label.to_string();
        color.0 = palette.visuals.hud_accent.to_bevy();
    }
}

pub fn update_distance_readout(
    travel: Res<TravelDistance>,
    config: Res<SceneConfig>,
    mut readout: Query<&mut Text, With<DistanceReadoutText>>,
) {
    for mut text in &mut readout {
        text.0 = format!(
            "{:.0} m of {:.0} m",
            travel.current, config.journey.max_distance
        );
    }
}

pub fn update_waypoint_panel(
    focused: Res<FocusedWaypoint>,
    palette: Res<ActivePalette>,
    mut panel: Query<(&mut Visibility, &mut BackgroundColor), With<WaypointPanel>>,
    mut texts: ParamSet<(
        Query<(&mut Text, &mut TextColor), With<WaypointTagText>>,
        Query<&mut Text, With<WaypointTitleText>>,
        Query<&mut Text, With<WaypointBodyText>>,
    )>,
) {
    let Ok((mut visibility, mut background)) = panel.single_mut() else {
        return;
    };

    let Some((waypoint, activation)) = focused.0 else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Visible;
    background.0 = Color::srgba(0.0, 0.0, 0.0, PANEL_BASE_ALPHA * activation.eased);

    for (mut text, mut color) in &mut texts.p0() {
        text.0 = waypoint.tag.to_string();
        color.0 = palette.visuals.hud_accent.to_bevy();
    }
    for mut text in &mut texts.p1() {
        let title = if waypoint.subtitle.is_empty() {
            waypoint.title.to_string()
        } else {
            format!("{} · {}", waypoint.title, waypoint.subtitle)
        };
        text.0 = title;
    }
    for mut text in &mut texts.p2() {
        text.0 = waypoint.body.to_string();
    }
}
