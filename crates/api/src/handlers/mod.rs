pub mod client;
pub mod contact;
pub mod project;
pub mod subscriber;

use digitalpro_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a record id taken from the request path.
pub(crate) fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid record id '{raw}': {e}")))
}
