use portal_nav::{
    build_navigator,
    config::{Env, NavConfig},
    credentials::{CredentialState, FileCredentialStore, MemoryCredentialStore},
    views::{NoopViewLoader, ViewState},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Driver for the navigation core: evaluates each path given on the command
/// line through the portal's standard route table and prints the resulting
/// decision as JSON, one per line. Useful for smoke-testing a deployment's
/// credential wiring without booting the whole shell.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = NavConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to a sensible local default.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portal_nav=debug".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty print for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for centralized log aggregation.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Navigation core starting in {:?} mode", config.env);

    // 4. Credential Store Initialization
    // File-backed when configured (production always is, per NavConfig::load);
    // otherwise an empty in-memory store, under which every protected
    // navigation denies.
    let credentials: CredentialState = match &config.credential_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "using file-backed credential store");
            Arc::new(FileCredentialStore::new(path.clone()))
        }
        None => {
            tracing::warn!("no credential file configured; protected routes will deny");
            Arc::new(MemoryCredentialStore::empty())
        }
    };

    // 5. View Loader: the CLI has no bundle to split, so loads are no-ops.
    let views: ViewState = Arc::new(NoopViewLoader);

    // 6. Navigator Assembly
    let navigator =
        build_navigator(config, credentials, views).expect("FATAL: standard route table invalid");

    // 7. Evaluate each requested path.
    for path in std::env::args().skip(1) {
        match navigator.navigate(&path, None).await {
            Ok(decision) => {
                let line = serde_json::to_string(&decision)
                    .expect("FATAL: decision serialization cannot fail");
                println!("{line}");
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "navigation failed");
                eprintln!("{path}: {e}");
            }
        }
    }
}
