//! Request extractors.
//!
//! - [`auth::SessionToken`] -- the session cookie, if any.
//! - [`auth::RequireAuth`] -- rejects with 401 unless the cookie maps to a live session.
//! - [`json::JsonBody`] -- `Json` with rejections rendered as JSON errors.

pub mod auth;
pub mod json;
