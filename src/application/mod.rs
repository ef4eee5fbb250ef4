//! Application layer: the change engine and the register session driving it.
//!
//! `ChangeEngine` runs a single purchase against a till. `Register` owns the
//! till for a trading day, cross-checks its balance after every purchase and
//! journals the outcome.

pub mod engine;
pub mod register;
