pub mod hud;
pub mod input;
pub mod scene_state;
pub mod sky;
pub mod travel;
