// src/config/mod.rs

pub mod scenario;

pub use scenario::{FieldConfig, InitialConditions, Scenario, Scheme};
