//! Shared domain types for the DigitalPro site: record ids, the four record
//! models with their create DTOs, required-field validation, and the
//! shutdown signal shared by the binaries.

pub mod error;
pub mod models;
pub mod shutdown;
pub mod types;
pub mod validation;
