//! Client for the dictionary API.
//!
//! [`controller::UiController`] owns the client state and reacts to user
//! actions; [`api::HttpApi`] talks to the server; [`render`] turns entries
//! into HTML or terminal text.

pub mod api;
pub mod controller;
pub mod render;
pub mod state;
