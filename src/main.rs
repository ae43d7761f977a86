use std::env;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use employer_cost_engine::api::{AppState, create_router};
use employer_cost_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/es_2024";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when set and valid, otherwise `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let config_dir =
        env::var("COST_ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("COST_ENGINE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load rate table");
            return ExitCode::FAILURE;
        }
    };
    let rate_table = config.metadata().code.clone();
    let router = create_router(AppState::new(config));

    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %bind_addr, rate_table = %rate_table, "Employer cost engine listening");
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_is_info() {
        assert_eq!(EnvFilter::new(DEFAULT_LOG_FILTER).to_string(), "info");
    }

    #[test]
    fn test_filter_directives_are_not_extended() {
        // A requested debug level must survive untouched.
        let filter = EnvFilter::new("debug");
        assert_eq!(filter.to_string(), "debug");
    }
}
