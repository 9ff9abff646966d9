//! Client (testimonial) record model and DTO.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// A client testimonial shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    /// Testimonial text.
    pub description: String,
    /// Job title, e.g. "CEO".
    pub designation: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for creating a client. All fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateClient {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub designation: String,
    #[validate(length(min = 1))]
    pub image: String,
}
