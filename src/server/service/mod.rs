//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Core business rules and write-time validation
//! - **Orchestration**: Coordinating repository calls and external services
//! - **Dual-Write**: Triggering best-effort Firestore mirror writes after
//!   Postgres mutations (see `mirror`)

pub mod admin;
pub mod billing;
pub mod content;
pub mod counseling;
pub mod emotion;
pub mod mirror;
pub mod quiz;
pub mod schedule;
pub mod user;
