//! NomeUsuario service - CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/nomeusuario-service/config.toml)
//! nomeusuario-service
//!
//! # Custom config path, port and database
//! nomeusuario-service --config ./config.toml --api-port 5000 \
//!     --database-url "sqlite://./users.db?mode=rwc"
//!
//! # Validate config without starting
//! nomeusuario-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use nomeusuario_api::config::AppConfig;
use nomeusuario_api::server::{init_tracing, ServerHandle, ServerOptions};

/// REST API for managing user profiles.
#[derive(Parser, Debug)]
#[command(name = "nomeusuario-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "NOMEUSUARIO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the database connection URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(nomeusuario_api::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default().with_env_overrides(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            if cli.check {
                return Err(e.into());
            }
            error!("{}", e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        info!("CLI override: api_port = {}", port);
        config.server.api_port = port;
    }
    if let Some(url) = cli.database_url {
        info!("CLI override: database.url = {}", url);
        config.database.url = url;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        info!("✅ Configuration is valid");
        info!("   Config file : {}", config_path.display());
        info!("   API address : {}", config.api_address());
        info!("   Storage     : {:?}", config.database.backend);
        info!("   Database    : {}", config.database.connection_url());
        info!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
