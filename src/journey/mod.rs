//! The journey core: pure, deterministic scene-state computation.
//!
//! Everything in this module is a total function of its inputs. The
//! presentation layer feeds in a travel distance each frame and reads back
//! plain data records; nothing here touches ECS state, time, or randomness.

pub mod celestial;
pub mod season;
pub mod waypoints;
