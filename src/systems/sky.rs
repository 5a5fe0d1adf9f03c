//! Sky, light, and celestial body consumers.
//!
//! These systems are deliberately thin: they read the palette and celestial
//! records as plain data and push them into Bevy's rendering state. No scene
//! logic lives here. A body that comes back absent is hidden, not faked.

use crate::prelude::*;
use crate::utils::color::{emissive_material, intensify_for_bloom};
use crate::utils::math::random_sky_direction;
use bevy::pbr::{DistanceFog, FogFalloff};

/// Baseline exponential fog density, scaled by the palette's multiplier.
const BASE_FOG_DENSITY: f32 = 0.0022;
/// Baseline illuminance of the main directional light, in lux.
const MAIN_LIGHT_ILLUMINANCE: f32 = 11_000.0;
/// Baseline illuminance of the secondary fill light, in lux.
const SECONDARY_LIGHT_ILLUMINANCE: f32 = 2_400.0;
/// Baseline ambient brightness.
const AMBIENT_BRIGHTNESS: f32 = 320.0;
/// Emissive boost for the glow side of the celestial discs.
const BODY_BLOOM_INTENSITY: f32 = 3.2;
/// Emissive boost for stars at full visibility.
const STAR_BLOOM_INTENSITY: f32 = 1.6;

/// Radius of the hemisphere the stars scatter over.
const STAR_DOME_RADIUS: f32 = 420.0;
/// Center of the star dome, pushed toward the horizon backdrop.
const STAR_DOME_CENTER: [f32; 3] = [0.0, 30.0, crate::journey::season::HORIZON_Z + 90.0];

#[derive(Component)]
pub struct SunDisc;

#[derive(Component)]
pub struct MoonDisc;

#[derive(Component)]
pub struct Star;

#[derive(Component)]
pub struct MainLight;

#[derive(Component)]
pub struct SecondaryLight;

/// Shared handles for everything the sky systems mutate per frame.
#[derive(Resource)]
pub struct SkyAssets {
    pub sun_material: Handle<StandardMaterial>,
    pub moon_material: Handle<StandardMaterial>,
    pub star_material: Handle<StandardMaterial>,
    pub star_mesh: Handle<Mesh>,
}

pub fn setup_sky(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    quality: Res<QualityTier>,
    mut rng: ResMut<SharedRng>,
) {
    let disc_mesh = meshes.add(Sphere::new(1.0));
    let star_mesh = meshes.add(Sphere::new(1.0));

    // Seeded from the spring palette; repainted every frame once the walk
    // starts
    let spring = SeasonKind::Spring.visuals();
    let sun_material = emissive_material(
        &mut materials,
        spring.sun_color,
        spring.sun_glow_color,
        BODY_BLOOM_INTENSITY,
    );
    let moon_material = emissive_material(
        &mut materials,
        spring.moon_color,
        spring.moon_glow_color,
        BODY_BLOOM_INTENSITY,
    );
    let star_material = emissive_material(
        &mut materials,
        spring.star_color,
        spring.star_color,
        STAR_BLOOM_INTENSITY,
    );

    commands.spawn((
        Name::new("Sun"),
        Mesh3d(disc_mesh.clone()),
        MeshMaterial3d(sun_material.clone()),
        Transform::default(),
        Visibility::Hidden,
        SunDisc,
    ));
    commands.spawn((
        Name::new("Moon"),
        Mesh3d(disc_mesh),
        MeshMaterial3d(moon_material.clone()),
        Transform::default(),
        Visibility::Hidden,
        MoonDisc,
    ));

    commands.spawn((
        Name::new("Main Light"),
        DirectionalLight {
            illuminance: MAIN_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(-0.3, -0.7, -0.65), Vec3::Y),
        MainLight,
    ));
    commands.spawn((
        Name::new("Secondary Light"),
        DirectionalLight {
            illuminance: SECONDARY_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(0.45, -0.2, 0.87), Vec3::Y),
        SecondaryLight,
    ));

    spawn_star_dome(
        &mut commands,
        &star_mesh,
        &star_material,
        &mut *rng,
        quality.star_count(),
    );

    commands.insert_resource(SkyAssets {
        sun_material,
        moon_material,
        star_material,
        star_mesh,
    });
}

fn spawn_star_dome(
    commands: &mut Commands,
    mesh: &Handle<Mesh>,
    material: &Handle<StandardMaterial>,
    rng: &mut SharedRng,
    count: usize,
) {
    let center = Vec3::from_array(STAR_DOME_CENTER);

    for _ in 0..count {
        let direction = random_sky_direction(rng);
        let position = center + direction * STAR_DOME_RADIUS;
        let size = rng.random_range(0.5..=1.6);

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
            Star,
        ));
    }
}

/// Tears the dome down and rebuilds it when the quality tier changes.
pub fn respawn_star_dome(
    mut commands: Commands,
    quality: Res<QualityTier>,
    assets: Res<SkyAssets>,
    stars: Query<Entity, With<Star>>,
    mut rng: ResMut<SharedRng>,
) {
    if !quality.is_changed() || quality.is_added() {
        return;
    }

    for entity in &stars {
        commands.entity(entity).despawn();
    }
    spawn_star_dome(
        &mut commands,
        &assets.star_mesh,
        &assets.star_material,
        &mut *rng,
        quality.star_count(),
    );
}

/// Pushes the blended palette into the clear color, fog, and lights.
pub fn apply_palette_environment(
    palette: Res<ActivePalette>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
    mut fog: Query<&mut DistanceFog>,
    mut main_light: Query<&mut DirectionalLight, (With<MainLight>, Without<SecondaryLight>)>,
    mut secondary_light: Query<&mut DirectionalLight, (With<SecondaryLight>, Without<MainLight>)>,
) {
    let visuals = &palette.visuals;

    clear_color.0 = visuals.background_color.to_bevy();

    ambient.color = visuals.ambient_color.to_bevy();
    ambient.brightness = AMBIENT_BRIGHTNESS * visuals.ambient_intensity;

    for mut fog_settings in &mut fog {
        fog_settings.color = visuals.fog_color.to_bevy();
        fog_settings.falloff = FogFalloff::Exponential {
            density: BASE_FOG_DENSITY * visuals.fog_density,
        };
    }

    for mut light in &mut main_light {
        light.color = visuals.main_light_color.to_bevy();
        light.illuminance = MAIN_LIGHT_ILLUMINANCE * visuals.main_light_intensity;
    }
    for mut light in &mut secondary_light {
        light.color = visuals.secondary_light_color.to_bevy();
        light.illuminance = SECONDARY_LIGHT_ILLUMINANCE * visuals.secondary_light_intensity;
    }
}

/// Moves, shows, and hides the sun and moon discs to match the frame's
/// celestial state. `None` means hidden, full stop.
pub fn sync_celestial_bodies(
    sky: Res<SkyState>,
    assets: Res<SkyAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut sun: Query<(&mut Transform, &mut Visibility), (With<SunDisc>, Without<MoonDisc>)>,
    mut moon: Query<(&mut Transform, &mut Visibility), (With<MoonDisc>, Without<SunDisc>)>,
) {
    if let Ok((mut transform, mut visibility)) = sun.single_mut() {
        apply_body(
            sky.sun.as_ref(),
            &mut transform,
            &mut visibility,
            &assets.sun_material,
            &mut materials,
        );
    }
    if let Ok((mut transform, mut visibility)) = moon.single_mut() {
        apply_body(
            sky.moon.as_ref(),
            &mut transform,
            &mut visibility,
            &assets.moon_material,
            &mut materials,
        );
    }
}

fn apply_body(
    body: Option<&CelestialBody>,
    transform: &mut Transform,
    visibility: &mut Visibility,
    material_handle: &Handle<StandardMaterial>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Some(body) = body else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Visible;
    transform.translation = Vec3::from_array(body.position);
    transform.scale = Vec3::splat(body.radius);

    if let Some(material) = materials.get_mut(material_handle) {
        let base = body.color;
        material.base_color = Color::srgba(base.r, base.g, base.b, body.opacity);

        let glow = intensify_for_bloom(body.glow_color.to_linear(), BODY_BLOOM_INTENSITY);
        material.emissive = glow * body.opacity;
    }
}

/// Fades the whole star dome with the palette's star visibility.
pub fn update_star_material(
    palette: Res<ActivePalette>,
    assets: Res<SkyAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let visuals = &palette.visuals;
    let Some(material) = materials.get_mut(&assets.star_material) else {
        return;
    };

    let star = visuals.star_color;
    material.base_color = Color::srgba(star.r, star.g, star.b, visuals.star_visibility);
    material.emissive = intensify_for_bloom(star.to_linear(), STAR_BLOOM_INTENSITY)
        * visuals.star_visibility;
}

/// Debug overlay: the orbit circle, the fade horizon, and the live body
/// positions.
pub fn visualize_orbit(
    mut gizmos: Gizmos,
    settings: Res<OrbitVisualizationSettings>,
    config: Res<SceneConfig>,
    sky: Res<SkyState>,
) {
    if !settings.enabled {
        return;
    }

    let celestial = &config.celestial;
    let center = Vec3::new(
        celestial.center_x,
        celestial.orbit_center_y,
        celestial.orbit_depth,
    );

    gizmos.circle(
        Isometry3d::from_translation(center),
        celestial.orbit_radius,
        Color::srgba(1.0, 1.0, 1.0, 0.4),
    );

    let horizon_half_width = celestial.orbit_radius * 2.4;
    gizmos.line(
        Vec3::new(-horizon_half_width, celestial.fade_end_y, celestial.orbit_depth),
        Vec3::new(horizon_half_width, celestial.fade_end_y, celestial.orbit_depth),
        Color::srgba(1.0, 0.6, 0.3, 0.6),
    );

    if let Some(sun) = &sky.sun {
        gizmos.line(center, Vec3::from_array(sun.position), Color::srgb(1.0, 0.9, 0.4));
    }
    if let Some(moon) = &sky.moon {
        gizmos.line(center, Vec3::from_array(moon.position), Color::srgb(0.7, 0.8, 1.0));
    }
}
