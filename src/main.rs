use activity_signup::utils::logger;
use activity_signup::{CliConfig, Server};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Initialise logging before anything else reports
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting activity-signup v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Config file (or built-in seed) with flag overrides, validated
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            // Invalid configuration never reaches the listener
            std::process::exit(1);
        }
    };

    // Seed the directory and serve until Ctrl+C / SIGTERM
    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
