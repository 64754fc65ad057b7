//! CloudsDew server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cloudsdew::adapters::auth::JwtAdminAuthenticator;
use cloudsdew::adapters::http::{app_router, AppState};
use cloudsdew::adapters::postgres::{
    run_migrations, PostgresContactMessageRepository, PostgresNewsletterRepository,
    PostgresRegistrationRepository,
};
use cloudsdew::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        environment = ?config.server.environment,
        database = %config.database.redacted_url(),
        status_transitions = ?config.admin.status_transitions,
        "Starting CloudsDew"
    );

    let pool = config.database.connect().await?;
    if config.database.run_migrations {
        info!("Running database migrations");
        run_migrations(&pool).await?;
    }

    let state = AppState {
        registrations: Arc::new(PostgresRegistrationRepository::new(pool.clone())),
        contact_messages: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
        newsletter: Arc::new(PostgresNewsletterRepository::new(pool.clone())),
        authenticator: Arc::new(JwtAdminAuthenticator::new(
            &config.admin.password,
            &config.admin.token_secret,
            config.admin.session_ttl_secs,
        )),
        transition_policy: config.admin.status_transitions,
    };

    let app = app_router(state, &config.server);

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!(%address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// JSON lines in production, human-readable text elsewhere. `RUST_LOG`
/// overrides the configured filter.
fn init_tracing(server: &ServerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.json_logs() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
