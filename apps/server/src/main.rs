//! tas — text analysis service.
//!
//! Accepts web page content over HTTP and returns readable text, ranked
//! keyword phrases, and social-metadata cards.

mod error_codes;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tas_analysis::ContentAnalyser;
use tas_keywords::StopList;
use tas_shared::{AppConfig, SETTINGS_FILE_NAME, load_config};

use routes::AppState;

/// Text analysis service CLI.
#[derive(Parser)]
#[command(name = "tas", version, about = "Text analysis service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server.
    Run {
        /// Bind address override.
        #[arg(long)]
        host: Option<String>,

        /// Bind port override.
        #[arg(long)]
        port: Option<u16>,

        /// Path to the settings file (defaults to `settings.toml`, which
        /// may be absent; an explicit path must exist).
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            host,
            port,
            settings,
        } => {
            let mut config =
                load_settings(settings.as_deref()).wrap_err("failed to load settings")?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_tracing(&config);
            run(config).await
        }
    }
}

/// Load settings. The implicit `settings.toml` may be absent (defaults
/// apply), but a path the operator passed explicitly must exist.
fn load_settings(settings: Option<&std::path::Path>) -> tas_shared::Result<AppConfig> {
    match settings {
        Some(path) => tas_shared::load_config_from(path),
        None => load_config(std::path::Path::new(SETTINGS_FILE_NAME)),
    }
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides the configured
/// level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load process-wide state and serve until shutdown.
async fn run(config: AppConfig) -> Result<()> {
    // Stop-list load failure is fatal at startup, never per-request.
    let stop_list_path = PathBuf::from(&config.keywords.stop_list);
    let stoplist = Arc::new(
        StopList::load(&stop_list_path)
            .wrap_err_with(|| format!("failed to load stop list {}", stop_list_path.display()))?,
    );

    info!(
        host = %config.server.host,
        port = config.server.port,
        stop_words = stoplist.len(),
        "starting text analysis service"
    );

    let bind = (config.server.host.clone(), config.server.port);
    let data = web::Data::new(AppState {
        analyser: ContentAnalyser::with_defaults(stoplist),
        config,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn explicit_missing_settings_path_is_an_error() {
        let err = load_settings(Some(Path::new("/nonexistent/typoed.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/typoed.toml"));
    }

    #[test]
    fn implicit_settings_file_may_be_absent() {
        // Runs from the crate dir, where no settings.toml is shipped.
        let config = load_settings(None).expect("defaults");
        assert_eq!(config.server.port, 8020);
    }
}
