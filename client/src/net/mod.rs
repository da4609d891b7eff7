//! Server API access: DTOs and REST helpers.

pub mod api;
pub mod types;
