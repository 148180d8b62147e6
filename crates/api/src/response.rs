//! Shared response body types for API handlers.
//!
//! Entries and lists are returned as bare JSON; these types cover the small
//! acknowledgement bodies returned by delete, login, and logout.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "success": true }`, optionally with the authenticated username.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            username: None,
        }
    }

    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            success: true,
            username: Some(username.into()),
        }
    }
}
