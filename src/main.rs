use clap::Parser;
use newscard::utils::{logger, validation::Validate};
use newscard::{router, AppConfig, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = CliConfig::parse();
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting newscard");
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration validation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        tracing::debug!(
            "Render settings: font={} size={}",
            config.render.font_path,
            config.render.font_size
        );
    }
    if !std::path::Path::new(&config.render.font_path).exists() {
        tracing::warn!(
            "Font {} not found; image requests will fail until it is present",
            config.render.font_path
        );
    }

    let state = AppState::from_config(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_config(cli: &CliConfig) -> newscard::Result<AppConfig> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
