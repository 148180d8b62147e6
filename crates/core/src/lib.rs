//! Domain building blocks shared by the dictionary server and client.
//!
//! Nothing in this crate touches the database or the network.

pub mod accent;
pub mod error;
pub mod seed;
pub mod types;
pub mod validation;
