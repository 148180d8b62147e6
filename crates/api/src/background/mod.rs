//! Tasks spawned next to the HTTP server. Each one loops until its
//! [`CancellationToken`] fires.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod session_cleanup;
