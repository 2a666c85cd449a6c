//! Server-side domain models and parameter types.
//!
//! Domain models used throughout the service layer: operation parameters,
//! typed status values, the parsed recurrence rule, and the internal quiz
//! document with its scoring weights. Wire DTOs never reach below the
//! controller layer; these types do.

pub mod billing;
pub mod chat;
pub mod quiz;
pub mod schedule;
