use anyhow::Result;
use article_ledger::application::{
    ports::{events::EventPublisher, settlement::Settlement, time::Clock},
    services::ApplicationServices,
};
use article_ledger::config::AppConfig;
use article_ledger::infrastructure::{BroadcastEventPublisher, InMemorySettlement, SystemClock};
use article_ledger::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let settlement: Arc<dyn Settlement> = Arc::new(InMemorySettlement::with_balances(
        config.genesis_balances().iter().cloned(),
    ));
    let events: Arc<dyn EventPublisher> = Arc::new(BroadcastEventPublisher::with_capacity(
        config.event_channel_capacity(),
        Arc::clone(&clock),
    ));

    for (account, amount) in config.genesis_balances() {
        tracing::info!(%account, %amount, "genesis balance");
    }

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&settlement),
        Arc::clone(&events),
        Arc::clone(&clock),
    ));

    spawn_event_logger(&services);

    let state = HttpState {
        services: Arc::clone(&services),
        faucet_enabled: config.faucet_enabled(),
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        faucet = config.faucet_enabled(),
        rate_limited = config.rate_limit_enabled(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Mirrors committed ledger events into the log.
fn spawn_event_logger(services: &ApplicationServices) {
    use tokio::sync::broadcast::error::RecvError;

    let mut receiver = services.subscribe();
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(record) => tracing::debug!(
                    sequence = record.sequence,
                    kind = record.event.kind(),
                    article_id = %record.event.article_id(),
                    "ledger event"
                ),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event logger lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
