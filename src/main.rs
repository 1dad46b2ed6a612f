use crate::api::HttpBackend;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod views;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Client for the listings/bookings API
    let backend = match HttpBackend::new(config.api_base_url.clone(), config.api_timeout) {
        Ok(backend) => backend,
        Err(e) => {
            error!(error = %e, "could not build API client");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!(
        addr = %config.bind_addr,
        api = %config.api_base_url,
        workers = config.max_workers,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &backend) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
