use std::process::ExitCode;
use std::time::Instant;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use item_service::app;
use item_service::utils::constant::{DEFAULT_LOG_FILTER, SHUTDOWN_GRACE_PERIOD};
use item_service::utils::secret::get_secret;
use item_service::utils::static_object::{
    BIND_ADDR, DB_MAX_CONNECTIONS, DB_PING_TIMEOUT, IS_PRODUCTION,
};

#[tokio::main]
async fn main() -> ExitCode {
    let started_at = Instant::now();

    dotenvy::dotenv().ok();
    init_tracing();

    let Some(database_url) = get_secret("DATABASE_URL") else {
        error!("Env variable `DATABASE_URL` or `DATABASE_URL_FILE` should be set");
        return ExitCode::FAILURE;
    };

    // Lazy, so the service comes up and reports `Disconnected` while the database is down.
    let db_pool = match PgPoolOptions::new()
        .max_connections(*DB_MAX_CONNECTIONS)
        .acquire_timeout(*DB_PING_TIMEOUT)
        .connect_lazy(&database_url)
    {
        Ok(pool) => pool,
        Err(e) => {
            error!(?e, "Invalid database URL");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(BIND_ADDR.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %BIND_ADDR.as_str(), ?e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };
    info!("Server starting at http://{}", *BIND_ADDR);

    let app = app(db_pool.clone(), started_at);
    let served = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db_pool.close().await;

    match served {
        Ok(()) => {
            info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(?e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// JSON logs in production, human-readable logs otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if *IS_PRODUCTION {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on Ctrl+C or SIGTERM, then bounds how long draining may take.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }

    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_GRACE_PERIOD).await;
        error!(
            grace_period_secs = SHUTDOWN_GRACE_PERIOD.as_secs(),
            "Connections did not drain in time, exiting"
        );
        std::process::exit(1);
    });
}
