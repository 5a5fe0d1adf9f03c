//! Test utilities for plugin and system testing

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::prelude::*;

/// Creates a minimal headless app with the resources and events the scene
/// systems expect, without any rendering.
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::asset::AssetPlugin::default(),
        bevy::input::InputPlugin,
        bevy::state::app::StatesPlugin,
        bevy::transform::TransformPlugin,
    ));

    // Assets the sky systems create and mutate
    app.init_asset::<bevy::render::mesh::Mesh>();
    app.init_asset::<bevy::render::prelude::Shader>();
    app.init_asset::<bevy::pbr::StandardMaterial>();
    app.init_asset::<bevy::text::Font>();

    app.insert_resource(SceneConfig::default());
    app.insert_resource(QualityTier::Low);
    app.insert_resource(SharedRng::from_seed(1));
    app.init_resource::<TravelDistance>();
    app.init_resource::<ActivePalette>();
    app.init_resource::<SkyState>();
    app.init_resource::<FocusedWaypoint>();
    app.init_resource::<OrbitVisualizationSettings>();

    app.add_event::<SceneCommand>();
    app.init_state::<AppState>();

    app
}

/// Helper to simulate a key press
pub fn press_key(app: &mut App, key: KeyCode) {
    // Direct press gives immediate visibility to callers that inspect
    // `pressed()` before the next `update()` runs.
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.clear();
        input.press(key);
    }
    // Bevy's `keyboard_input_system` runs in `PreUpdate` and rebuilds
    // `ButtonInput<KeyCode>` from `KeyboardInput` events, clearing the
    // `just_pressed` set each frame. `ButtonInput::press` only records a
    // `just_pressed` for keys not already in the `pressed` set, so a lone
    // press event would be swallowed by the direct press above. Emit a release
    // first so the PreUpdate rebuild registers a fresh `just_pressed` that the
    // `Update` schedule command systems can observe.
    app.world_mut()
        .send_event(keyboard_event(key, ButtonState::Released));
    app.world_mut()
        .send_event(keyboard_event(key, ButtonState::Pressed));
}

/// Helper to simulate a key release
pub fn release_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
    app.world_mut().send_event(keyboard_event(key, ButtonState::Released));
}

fn keyboard_event(key: KeyCode, state: ButtonState) -> KeyboardInput {
    KeyboardInput {
        key_code: key,
        logical_key: Key::Dead(None),
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    }
}
