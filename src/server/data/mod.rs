//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work directly with SeaORM entity models and
//! return them to the service layer; entity-to-DTO conversion happens above. All database
//! queries, inserts, updates, and deletes are performed through these repositories.

pub mod admin;
pub mod billing;
pub mod content;
pub mod counseling;
pub mod emotion;
pub mod quiz;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;
