//! Data Transfer Objects - For external document boundaries
//!
//! DTOs live in the application layer so serde stays out of the domain model.

pub mod simulation_result;

pub use simulation_result::*;
