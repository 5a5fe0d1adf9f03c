pub mod attribution;
pub mod camera;
pub mod hud;
pub mod journey;
pub mod sky;
