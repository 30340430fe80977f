//! Domain layer for TeamHub: credential issuing and verification, plus seeding of the
//! reference data set.
//!
//! Binaries depend on this crate rather than on `entity_api` directly, so the entity
//! records they need are re-exported here.

pub use entity_api::{members, organizations, Id};
pub use entity_api::{priority, roles, status};

pub mod error;
pub mod jwt;
pub mod seed;
