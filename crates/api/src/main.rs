use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use kansai_core::seed::BundledDictionary;
use kansai_db::store::{
    MemorySessionStore, MemoryWordStore, PgSessionStore, PgWordStore, SessionStore, WordStore,
};
use kansai_db::DbPool;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use kansai_api::background::session_cleanup;
use kansai_api::config::ServerConfig;
use kansai_api::router::build_app_router;
use kansai_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "kansai_api=debug,kansai_db=debug,tower_http=debug";

/// How long shutdown waits for the cleanup task to notice cancellation.
const CLEANUP_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Word and session stores, plus the pool behind them when persistent.
struct Stores {
    pool: Option<DbPool>,
    words: Arc<dyn WordStore>,
    sessions: Arc<dyn SessionStore>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        persistent = config.database_url.is_some(),
        "Configuration loaded",
    );

    let stores = open_stores(config.database_url.as_deref()).await;
    if let Some(path) = &config.seed_path {
        seed_from_file(stores.words.as_ref(), path).await;
    }

    let state = AppState::new(config.clone(), stores.words, stores.sessions);

    let cancel = CancellationToken::new();
    let cleanup = tokio::spawn(session_cleanup::run(
        state.auth.clone(),
        Duration::from_secs(config.session.cleanup_interval_secs),
        cancel.clone(),
    ));

    let app = build_app_router(state, &config);
    let host: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(host, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "Dictionary API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");

    cancel.cancel();
    if tokio::time::timeout(CLEANUP_STOP_TIMEOUT, cleanup).await.is_err() {
        tracing::warn!("Session cleanup did not stop in time");
    }

    if let Some(pool) = stores.pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }
    tracing::info!("Shutdown complete");
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Postgres stores when a URL is configured, in-memory ones otherwise.
///
/// Panics if the database is configured but unreachable or cannot be
/// migrated.
async fn open_stores(database_url: Option<&str>) -> Stores {
    let Some(url) = database_url else {
        tracing::warn!("DATABASE_URL not set, words and sessions live in memory only");
        return Stores {
            pool: None,
            words: Arc::new(MemoryWordStore::new()),
            sessions: Arc::new(MemorySessionStore::new()),
        };
    };

    let pool = kansai_db::create_pool(url)
        .await
        .expect("Failed to connect to database");
    kansai_db::health_check(&pool)
        .await
        .expect("Database is not answering queries");
    kansai_db::run_migrations(&pool)
        .await
        .expect("Failed to apply database migrations");
    tracing::info!("Database ready");

    Stores {
        words: Arc::new(PgWordStore::new(pool.clone())),
        sessions: Arc::new(PgSessionStore::new(pool.clone())),
        pool: Some(pool),
    }
}

/// Seed an empty store from the bundled dictionary at `path`.
///
/// Problems with the file are logged; the server starts with whatever the
/// store holds.
async fn seed_from_file(store: &dyn WordStore, path: &str) {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(path, error = %e, "Bundled dictionary not readable, skipping seed");
            return;
        }
    };

    let dictionary = match BundledDictionary::from_json(&json) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            tracing::error!(path, error = %e, "Bundled dictionary is invalid, skipping seed");
            return;
        }
    };
    tracing::debug!(path, entries = dictionary.len(), "Loaded bundled dictionary");

    if let Err(e) = kansai_db::seed::seed_if_empty(store, &dictionary).await {
        tracing::error!(error = %e, "Seeding failed");
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to listen for SIGTERM");
        let received = tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.expect("Failed to listen for Ctrl-C");
                "SIGINT"
            }
            _ = sigterm.recv() => "SIGTERM",
        };
        tracing::info!(signal = received, "Shutting down");
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl-C");
        tracing::info!(signal = "Ctrl-C", "Shutting down");
    }
}
