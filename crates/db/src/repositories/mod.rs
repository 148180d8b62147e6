//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod session_repo;
pub mod word_repo;

pub use session_repo::SessionRepo;
pub use word_repo::WordRepo;
