// src/lib.rs

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{FieldConfig, Scenario, Scheme};
pub use math::{Result, SimError};
pub use models::{FnField, Particle, TimeGrid, VelocityField};
pub use simulation::output::{load_export, ParticleData, TrajectoryData};
pub use simulation::{ConfigState, TrajectorySystem};
