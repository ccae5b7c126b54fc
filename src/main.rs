use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use school_activities::config::Config;
use school_activities::database::activities_repo::ActivityDirectory;
use school_activities::database::seed_repo;
use school_activities::web;

#[tokio::main]
async fn main() {
    // 1. Configuration (.env is optional)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 3. Activity directory
    let seed = match &config.seed_file {
        Some(path) => seed_repo::load_seed_file(path),
        None => seed_repo::seed_directory(),
    };
    let seed = match seed {
        Ok(seed) => seed,
        Err(e) => {
            error!("cannot load activities: {}", e);
            std::process::exit(1);
        }
    };
    info!(activities = seed.len(), "activity directory loaded");
    let directory = Arc::new(ActivityDirectory::new(seed));

    let app = web::app_router(directory, &config.static_dir);

    // 4. Serve (with fallback port)
    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr();
            warn!("could not bind {}: {}; trying {}", addr, e, fallback);
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!(
            version = env!("CARGO_PKG_VERSION"),
            "listening on http://{}", bound
        ),
        Err(e) => warn!("listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}
