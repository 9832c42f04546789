#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else, clippy::module_name_repetitions)]

use crate::{
    client::HttpStudentApi,
    config::{RuntimeConfiguration, StoreKind},
    routes::router,
    state::RosterState,
    store::{StudentStore, memory::MemoryStudentStore, postgres::PostgresStudentStore},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod client;
mod config;
mod data;
mod error;
mod maud_conveniences;
mod roster;
mod routes;
mod state;
mod store;
mod ui;

async fn shutdown_signal(state: RosterState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    state.sensible_shutdown().await;
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv {
        warn!(?e, "No .env file loaded");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");

    let store: Arc<dyn StudentStore> = match config.store() {
        StoreKind::Postgres => {
            let db_config = config
                .db_config()
                .expect("postgres store configured without database settings");
            let options = PgPoolOptions::new().max_connections(15);
            Arc::new(
                PostgresStudentStore::new(options, &db_config)
                    .await
                    .expect("unable to open student database"),
            )
        }
        StoreKind::Memory => {
            warn!("Using the in-memory student store, nothing will be persisted");
            Arc::new(MemoryStudentStore::new())
        }
    };

    let api = Arc::new(HttpStudentApi::new(config.api_url()));
    info!(api_url = config.api_url(), "UI consuming student API");

    let state = RosterState::new(store, api, config.clone());
    let app = router(state.clone());

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("unable to serve app");
}
