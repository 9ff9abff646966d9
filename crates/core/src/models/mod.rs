//! Record models and their create DTOs.
//!
//! Records serialize with camelCase keys (`fullName`, `createdAt`). Create
//! DTOs default every missing field to an empty string so that the
//! required-field check in [`crate::validation`] reports it.

pub mod client;
pub mod contact;
pub mod project;
pub mod subscriber;
