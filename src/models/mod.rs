// src/models/mod.rs

pub mod time_grid;
pub mod particle;
pub mod velocity;

pub use time_grid::TimeGrid;
pub use particle::Particle;
pub use velocity::{FnField, VelocityField};
