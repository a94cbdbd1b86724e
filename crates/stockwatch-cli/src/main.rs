use clap::Parser;
use stockwatch_core::AppConfig;
use stockwatch_scraper::{AvailabilityChecker, AvailabilityReport, Target};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stockwatch")]
#[command(about = "Check whether a product page reports the item as available")]
struct Cli {
    /// Product page to check (overrides `STOCKWATCH_TARGET_URL`)
    #[arg(long)]
    url: Option<String>,

    /// `User-Agent` header sent with the request (overrides `STOCKWATCH_USER_AGENT`)
    #[arg(long)]
    user_agent: Option<String>,

    /// Total request timeout in seconds (overrides `STOCKWATCH_REQUEST_TIMEOUT_SECS`)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Also print the result record to stdout as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Command-line flags take precedence over environment configuration.
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.url {
            config.target_url.clone_from(url);
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent.clone_from(user_agent);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout_secs = timeout_secs;
        }
        config
    }
}

/// Renders the result record as a single-line JSON object.
fn report_json(report: &AvailabilityReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply_overrides(stockwatch_core::load_app_config()?);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let target = Target::new(config.target_url, config.user_agent);
    let checker = AvailabilityChecker::new(target, config.request_timeout_secs)?;
    let report = checker.check().await;

    tracing::info!(
        status = %report.status,
        message = %report.message,
        "availability check result"
    );

    if cli.json {
        println!("{}", report_json(&report)?);
    }

    Ok(())
}
