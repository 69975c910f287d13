use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curtail::{config, db, router, AppState};

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "curtail=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting curtail on {}:{}", config.host, config.port);
    tracing::info!(
        "Allow-list: {} address(es), forwarded-for trust {}",
        config.allowed_ips.len(),
        if config.trust_forwarded_for { "on" } else { "off" },
    );

    // Open the store; the schema is created if it is absent
    let db = db::connect(&config.database_url).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let bind_addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        db: db.clone(),
        config,
    });

    // ── Serve ──────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // In-flight requests have drained; close the store explicitly.
    tracing::info!("Shutting down");
    db.close().await;

    Ok(())
}

/// Resolve when the process is asked to stop (Ctrl-C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
