//! postboard binary entry point

use std::io::IsTerminal;
use clap::{Parser, ValueEnum};

use shared::{logging, ComponentId, FeedVariant};
use feed::{
    render_view, Feed, FeedConfig, FeedResult, HttpResourceSource, JsonRenderer, Renderer, TextRenderer,
    ENV_BASE_URL, ENV_DELAY_MS, ENV_TIMEOUT_SECS, ENV_VARIANT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(about = "Fetch blog posts, their authors and comments, and print them joined")]
struct Args {
    /// Base URL of the REST API (overrides POSTBOARD_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Which collections to fetch: full or posts-and-users (overrides POSTBOARD_VARIANT)
    #[arg(long)]
    variant: Option<FeedVariant>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pause before fetching, in milliseconds (overrides POSTBOARD_DELAY_MS)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-request timeout in seconds (overrides POSTBOARD_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Flag value standing in for an environment key
    fn override_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_BASE_URL => self.base_url.clone(),
            ENV_VARIANT => self.variant.map(|v| v.to_string()),
            ENV_DELAY_MS => self.delay_ms.map(|ms| ms.to_string()),
            ENV_TIMEOUT_SECS => self.timeout_secs.map(|secs| secs.to_string()),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> FeedResult<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let component = *ComponentId::init_cli();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = FeedConfig::from_env_with(|key| args.override_for(key))?;
    logging::log_startup(component, &format!("postboard against {} ({})", config.base_url, config.variant));

    let renderer: Box<dyn Renderer> = match args.format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::pretty()),
    };

    let source = HttpResourceSource::from_config(&config)?;
    let feed = Feed::new(config, source);

    // The loading screen goes to stderr so piped output only holds the final render
    if args.format == OutputFormat::Text && std::io::stderr().is_terminal() {
        eprintln!("{}", render_view(renderer.as_ref(), &feed.view().await)?);
    }

    feed.mount().await?;
    let view = feed.view().await;
    println!("{}", render_view(renderer.as_ref(), &view)?);
    feed.unmount().await;

    if view.error().is_some() {
        std::process::exit(1);
    }

    logging::log_success(component, "Feed rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_flags_win_over_invalid_environment() {
        let args = Args::parse_from(["postboard", "--timeout-secs", "5", "--variant", "full"]);
        let env = |key: &str| match key {
            ENV_TIMEOUT_SECS => Some("0".to_string()),
            ENV_VARIANT => Some("bogus".to_string()),
            _ => None,
        };

        let config = FeedConfig::from_layers(|key| args.override_for(key), env).unwrap();

        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.variant, FeedVariant::Full);
    }

    #[test]
    fn test_unset_flags_defer_to_environment() {
        let args = Args::parse_from(["postboard"]);
        assert_eq!(args.override_for(ENV_BASE_URL), None);
        assert_eq!(args.override_for(ENV_DELAY_MS), None);

        let args = Args::parse_from(["postboard", "--variant", "posts-and-users", "--delay-ms", "2000"]);
        assert_eq!(args.override_for(ENV_VARIANT).as_deref(), Some("posts-and-users"));
        assert_eq!(args.override_for(ENV_DELAY_MS).as_deref(), Some("2000"));
    }
}
