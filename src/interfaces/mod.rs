//! Adapters between the register and the outside world.

pub mod csv;
pub mod simulation;
