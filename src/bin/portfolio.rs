use clap::Parser;
use portfolio_rust::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so PORTFOLIO_API_URL and friends apply
    let _ = dotenvy::dotenv();

    // Subscriber first: building the config may log warnings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(portfolio_rust::config::log_filter_from_env()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = portfolio_rust::config::config();
    tracing::debug!("Starting portfolio console in {:?} mode", config.environment);

    let cli = Cli::parse();

    if let Err(e) = portfolio_rust::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
