//! Tablebill JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use tablebill_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod catalog;
mod config;
mod extensions;
mod healthcheck;
mod invoices;
mod members;
mod router;
mod shutdown;
mod state;
mod tables;
#[cfg(test)]
mod test_helpers;
mod users;

/// Tablebill JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|config_error| {
        eprintln!("Configuration error: {config_error}");

        process::exit(1);
    });

    // Initialize logging
    if let Err(init_error) = config::logging::init_subscriber(&config) {
        eprintln!("Logging error: {init_error}");

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    // All collections start empty; the store holds no data across restarts.
    let app = AppContext::in_memory();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::api_router());

    let doc = OpenApi::new("Tablebill API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(signal_error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {signal_error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
