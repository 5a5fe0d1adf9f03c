//! Rail camera plugin.
//!
//! The camera rides the road at a fixed height, chasing the smoothed travel
//! distance, with pointer-driven sway and a subtle walking bob. There is no
//! free-look: the walk is the interface.

use crate::plugins::journey::JourneySet;
use crate::prelude::*;
use crate::utils::math::damp;
use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::window::PrimaryWindow;
use core::f32::consts::TAU;

const CAMERA_BASE_Z: f32 = -18.0;
/// World units of camera motion per unit of travel distance.
const TRAVEL_SCALE: f32 = 1.0;
/// Pointer influence clips at this fraction of the half-window.
const POINTER_LIMIT_X: f32 = 0.85;
const POINTER_LIMIT_Y: f32 = 0.75;

#[derive(Component)]
pub struct RailCamera;

/// Damped pointer sway state, plus the walk-bob phase offset.
#[derive(Resource, Default)]
struct CameraSway {
    yaw: f32,
    pitch: f32,
    bob_phase: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSway>();
        app.add_systems(Startup, spawn_camera);
        app.add_systems(Update, drive_camera.in_set(JourneySet::Consume));
    }
}

fn spawn_camera(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut sway: ResMut<CameraSway>,
    mut rng: ResMut<SharedRng>,
) {
    // Desynchronize the bob between runs
    sway.bob_phase = rng.random_range(0.0..TAU);
    sway.pitch = config.camera.base_pitch_degrees.to_radians();

    commands.spawn((
        Name::new("Rail Camera"),
        Camera {
            hdr: true,
            ..default()
        },
        Camera3d::default(),
        Tonemapping::TonyMcMapface,
        Bloom::NATURAL,
        Msaa::default(),
        DistanceFog {
            color: Color::BLACK,
            falloff: FogFalloff::Exponential { density: 0.002 },
            ..default()
        },
        Transform::from_xyz(0.0, config.camera.base_height, CAMERA_BASE_Z),
        RailCamera,
    ));
}

fn drive_camera(
    time: Res<Time>,
    travel: Res<TravelDistance>,
    config: Res<SceneConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sway: ResMut<CameraSway>,
    mut cameras: Query<&mut Transform, With<RailCamera>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    let camera = &config.camera;
    let delta = time.delta_secs();

    // Pointer position normalized to [-1, 1] around the window center
    let pointer = windows
        .single()
        .ok()
        .and_then(|window| {
            window.cursor_position().map(|cursor| {
                let size = Vec2::new(window.width(), window.height()).max(Vec2::ONE);
                let normalized = (cursor / size) * 2.0 - Vec2::ONE;
                Vec2::new(
                    normalized.x.clamp(-POINTER_LIMIT_X, POINTER_LIMIT_X),
                    normalized.y.clamp(-POINTER_LIMIT_Y, POINTER_LIMIT_Y),
                )
            })
        })
        .unwrap_or(Vec2::ZERO);

    let yaw_target = -pointer.x * camera.yaw_range_degrees.to_radians();
    let pitch_target =
        camera.base_pitch_degrees.to_radians() - pointer.y * camera.pitch_range_degrees.to_radians();

    sway.yaw = damp(sway.yaw, yaw_target, camera.pointer_response, delta);
    sway.pitch = damp(sway.pitch, pitch_target, camera.rotation_response, delta);

    let target_z = CAMERA_BASE_Z - travel.current * TRAVEL_SCALE;
    let z = damp(
        transform.translation.z,
        target_z,
        camera.position_response,
        delta,
    );

    let bob = libm::sinf(time.elapsed_secs() * camera.bob_frequency * TAU + sway.bob_phase)
        * camera.bob_amplitude;

    transform.translation = Vec3::new(0.0, camera.base_height + bob, z);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, sway.yaw, sway.pitch, 0.0);
}
