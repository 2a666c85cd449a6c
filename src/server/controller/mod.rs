//! HTTP request handlers.
//!
//! One module per REST resource. Handlers validate access, convert DTOs, and
//! delegate to the service layer; admin handlers go through `AuthGuard`
//! first. Consumer handlers identify the caller by the UID path segment the
//! authenticated client supplies.

pub mod admin;
pub mod auth;
pub mod billing;
pub mod content;
pub mod counseling;
pub mod emotion;
pub mod param;
pub mod quiz;
pub mod schedule;
pub mod user;
