//! Periodic purge of expired admin sessions.
//!
//! Expired sessions are already invisible to lookups; this only keeps the
//! session store from growing without bound.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::services::AuthService;

/// Run the cleanup loop every `interval` until `cancel` is triggered.
pub async fn run(auth: AuthService, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Session cleanup job started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session cleanup job stopping");
                break;
            }
            _ = ticker.tick() => {
                match auth.purge_expired().await {
                    Ok(0) => tracing::debug!("Session cleanup: nothing to purge"),
                    Ok(purged) => tracing::info!(purged, "Session cleanup: purged expired sessions"),
                    Err(e) => tracing::error!(error = %e, "Session cleanup failed"),
                }
            }
        }
    }
}
