use axum::Router;
use clap::Parser;
use common::{AppState, Config};
use ledger::LedgerStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load Config from CLI args
    let config = Config::parse();

    // 3. Initialize the in-memory store with the demo data set
    let store = LedgerStore::with_sample_data();

    let state = Arc::new(AppState {
        store,
        config: config.clone(),
    });

    // 4. Routing
    let app = Router::<Arc<AppState>>::new()
        .nest("/api/budgets", budgets::handler::budgets_router(state.clone()))
        .nest(
            "/api/transactions",
            transactions::handler::transactions_router(state.clone()),
        )
        .nest(
            "/api/savings-goals",
            savings_goals::handler::savings_goals_router(state.clone()),
        )
        .with_state(state)
        // The demo frontends are served from other origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // 5. Start Server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
