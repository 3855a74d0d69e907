// src/math/mod.rs

pub mod integrator;
pub mod error;

pub use integrator::{adams_bashforth_2, euler_step, AdamsBashforth2State};
pub use error::{Result, SimError};
