//! Wire DTOs shared by every API endpoint.
//!
//! These types define the JSON request and response shapes of the REST API.
//! They carry serde attributes for the wire format and `ToSchema` derives for
//! the OpenAPI document. Conversion to and from entity models happens in the
//! service and controller layers, never here.

pub mod admin;
pub mod api;
pub mod billing;
pub mod content;
pub mod counseling;
pub mod emotion;
pub mod quiz;
pub mod schedule;
pub mod user;
