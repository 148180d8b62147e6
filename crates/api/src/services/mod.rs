//! Services the handlers delegate to.
//!
//! Both are cheap to clone and hold their stores behind `Arc<dyn _>`, so
//! they can be exercised without an HTTP stack.

pub mod auth;
pub mod dictionary;

pub use auth::{AuthService, AuthStatus, IssuedSession};
pub use dictionary::DictionaryService;
