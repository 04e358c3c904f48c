// Library exports for workout-stats
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod package;

pub use error::WorkoutError;
pub use models::{InfoMessage, Training};
pub use package::{read_package, Package, WorkoutCode};
