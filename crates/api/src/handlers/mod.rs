pub mod auth;
pub mod words;
