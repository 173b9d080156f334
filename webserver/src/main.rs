//! postboard-web entry point

use std::net::SocketAddr;
use anyhow::Context;
use clap::Parser;

use feed::{FeedConfig, HttpResourceSource, ENV_BASE_URL, ENV_DELAY_MS, ENV_TIMEOUT_SECS, ENV_VARIANT};
use shared::{component_info, logging, ComponentId, FeedVariant};
use webserver::WebServer;

#[derive(Parser, Debug)]
#[command(name = "postboard-web")]
#[command(about = "Serve the joined blog feed as an HTML page")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Base URL of the REST API (overrides POSTBOARD_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Which collections to fetch: full or posts-and-users (overrides POSTBOARD_VARIANT)
    #[arg(long)]
    variant: Option<FeedVariant>,

    /// Per-request timeout in seconds (overrides POSTBOARD_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Flag value standing in for an environment key
    fn override_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_BASE_URL => self.base_url.clone(),
            ENV_VARIANT => self.variant.map(|v| v.to_string()),
            ENV_TIMEOUT_SECS => self.timeout_secs.map(|secs| secs.to_string()),
            // Pages are rendered once settled, never with a startup delay
            ENV_DELAY_MS => Some("0".to_string()),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let component = *ComponentId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = FeedConfig::from_env_with(|key| args.override_for(key))
        .context("Invalid POSTBOARD_* configuration")?;

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.host, args.port))?;

    logging::log_startup(component, &format!("postboard-web on {bind_address}"));
    component_info!(component, "Fetching {} from {}", config.variant, config.base_url);

    let source = HttpResourceSource::from_config(&config)?;
    let server = WebServer::new(bind_address, config, source);
    server.run().await?;

    logging::log_success(component, "WebServer stopped gracefully");
    Ok(())
}
