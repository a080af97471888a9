use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

use trustlens::api::{ApiClient, CheckResult, Session};
use trustlens::config;
use trustlens::dedup::ReportLog;
use trustlens::insights::{
    aggregate, load_datasets, DatasetSource, FileSource, HttpSource, InsightsParams,
};
use trustlens::output::terminal;
use trustlens::risk::CheckKind;
use trustlens::validate;

/// TrustLens: check links, emails and phone numbers against known scams.
///
/// A thin client for the TrustLens backend plus local insights over the
/// published risk datasets.
#[derive(Parser)]
#[command(name = "trustlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the local report log
    Init,

    /// Check a link against known scams
    CheckUrl {
        /// The link to check (scheme optional)
        url: String,
    },

    /// Check an email address against known scams
    CheckEmail {
        /// The address to check
        address: String,
    },

    /// Check a mobile number against known scams
    CheckMobile {
        /// The number, international (+614...) or national (04...) format
        number: String,
    },

    /// Report a scam link
    ReportUrl {
        url: String,

        /// Submit even if this was already reported today from this machine
        #[arg(long)]
        force: bool,
    },

    /// Report a scam email address
    ReportEmail {
        address: String,

        #[arg(long)]
        force: bool,
    },

    /// Report a scam mobile number
    ReportMobile {
        number: String,

        #[arg(long)]
        force: bool,
    },

    /// Show trending scam themes and high-risk domains
    Insights {
        /// Trailing window in days
        #[arg(long, default_value = "14")]
        days: u32,

        /// Cap on each ranked list
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Short three-entry summary (overrides --limit)
        #[arg(long)]
        peek: bool,
    },

    /// List published articles
    Articles,

    /// Show service-wide check volume for the last 7 days
    Metrics,

    /// Show local status (config, report log, datasets)
    Status,

    /// Run the dashboard JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trustlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = config::Config::load()?;
            trustlens::dedup::store::SqliteStore::open(&config.db_path)?;
            println!("Report log initialized at: {}", config.db_path);
            println!("\nNext step: set TRUSTLENS_API_URL in your .env file");
            println!("  (see .env.example for the available variables)");
        }

        Commands::CheckUrl { url } => {
            let url = validate::validate_url(&url)?;
            let api = build_client()?;
            let data = with_spinner("Checking link...", api.check_url(&url)).await?;
            terminal::display_check_result(&CheckResult::Url(data));
        }

        Commands::CheckEmail { address } => {
            let address = validate::validate_email(&address)?;
            let api = build_client()?;
            let data = with_spinner("Checking address...", api.check_email(&address)).await?;
            terminal::display_check_result(&CheckResult::Email(data));
        }

        Commands::CheckMobile { number } => {
            let number = validate::parse_mobile(&number)?;
            let api = build_client()?;
            let data = with_spinner("Checking number...", api.check_mobile(&number)).await?;
            terminal::display_check_result(&CheckResult::Mobile(data));
        }

        Commands::ReportUrl { url, force } => {
            let url = validate::validate_url(&url)?;
            let config = config::Config::load()?;
            config.require_api()?;
            let log = ReportLog::open(&config.db_path);

            if !force && log.is_already_reported(CheckKind::Url, &url).await {
                println!("{}", ALREADY_REPORTED.yellow());
                return Ok(());
            }

            let api = client_from(&config)?;
            let data = with_spinner("Submitting report...", api.report_url(&url)).await?;
            log.mark_reported(CheckKind::Url, &url).await;
            println!("{}", "Report submitted. Thank you!".green());
            terminal::display_check_result(&CheckResult::Url(data));
        }

        Commands::ReportEmail { address, force } => {
            let address = validate::validate_email(&address)?;
            let config = config::Config::load()?;
            config.require_api()?;
            let log = ReportLog::open(&config.db_path);

            if !force && log.is_already_reported(CheckKind::Email, &address).await {
                println!("{}", ALREADY_REPORTED.yellow());
                return Ok(());
            }

            let api = client_from(&config)?;
            let data = with_spinner("Submitting report...", api.report_email(&address)).await?;
            log.mark_reported(CheckKind::Email, &address).await;
            println!("{}", "Report submitted. Thank you!".green());
            terminal::display_check_result(&CheckResult::Email(data));
        }

        Commands::ReportMobile { number, force } => {
            let number = validate::parse_mobile(&number)?;
            let config = config::Config::load()?;
            config.require_api()?;
            let log = ReportLog::open(&config.db_path);

            if !force && log.is_already_reported(CheckKind::Mobile, &number.e164).await {
                println!("{}", ALREADY_REPORTED.yellow());
                return Ok(());
            }

            let api = client_from(&config)?;
            let data = with_spinner("Submitting report...", api.report_mobile(&number)).await?;
            log.mark_reported(CheckKind::Mobile, &number.e164).await;
            println!("{}", "Report submitted. Thank you!".green());
            terminal::display_check_result(&CheckResult::Mobile(data));
        }

        Commands::Insights { days, limit, peek } => {
            let config = config::Config::load()?;
            let source = dataset_source(&config)?;

            let params = InsightsParams {
                days: days.max(1),
                limit: if peek { InsightsParams::PEEK_LIMIT } else { limit.max(1) },
            };

            let datasets =
                with_spinner("Loading datasets...", load_datasets(source.as_ref())).await?;
            let summary = aggregate(
                &datasets.urls,
                &datasets.emails,
                &datasets.mobiles,
                &params,
                chrono::Utc::now(),
            );
            terminal::display_insights(&summary);
        }

        Commands::Articles => {
            let api = build_client()?;
            let articles = with_spinner("Fetching articles...", api.list_articles()).await?;
            terminal::display_articles(&articles);
        }

        Commands::Metrics => {
            let api = build_client()?;
            let metrics = with_spinner("Fetching metrics...", api.usage_metrics()).await?;
            terminal::display_metrics(&metrics);
        }

        Commands::Status => {
            let config = config::Config::load()?;
            show_status(&config).await;
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = config::Config::load()?;
            config.require_api()?;
            let api = Arc::new(client_from(&config)?);
            let report_log = Arc::new(ReportLog::open(&config.db_path));
            let datasets = dataset_source(&config)?;

            tracing::info!("Starting dashboard API");
            let state = trustlens::web::AppState {
                config: Arc::new(config),
                api,
                report_log,
                datasets,
            };
            trustlens::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

const ALREADY_REPORTED: &str =
    "You've already reported this today. Thanks for keeping an eye out!";

/// Load config and build an API client in one step (for check commands).
fn build_client() -> Result<ApiClient> {
    let config = config::Config::load()?;
    config.require_api()?;
    client_from(&config)
}

fn client_from(config: &config::Config) -> Result<ApiClient> {
    let session = match &config.api_token {
        Some(token) => Session::authenticated(token.as_str()),
        None => Session::anonymous(),
    };
    let client = ApiClient::new(&config.api_url, config.timeout_secs, session)?;
    Ok(client)
}

/// Pick the dataset source: HTTP when TRUSTLENS_DATA_URL is set, local
/// data directory otherwise.
fn dataset_source(config: &config::Config) -> Result<Arc<dyn DatasetSource>> {
    Ok(match &config.data_url {
        Some(url) => Arc::new(HttpSource::new(url)?),
        None => Arc::new(FileSource::new(&config.data_dir)),
    })
}

/// Run a future behind a terminal spinner.
async fn with_spinner<T, E, F>(message: &'static str, fut: F) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = fut.await;
    pb.finish_and_clear();
    result
}

/// Display local status: configuration, report log, dataset presence.
async fn show_status(config: &config::Config) {
    if config.api_url.is_empty() {
        println!("Backend: {}", "not configured (set TRUSTLENS_API_URL)".yellow());
    } else {
        println!("Backend: {}", config.api_url);
    }

    if std::path::Path::new(&config.db_path).exists() {
        let log = ReportLog::open(&config.db_path);
        let entries = log.entry_count(chrono::Utc::now()).await;
        println!("Report log: {} ({entries} entries in the last 24h)", config.db_path);
    } else {
        println!("Report log: not initialized (run `trustlens init`)");
    }

    match &config.data_url {
        Some(url) => println!("Datasets: {url} (HTTP)"),
        None => {
            let dir = std::path::Path::new(&config.data_dir);
            let mut missing = Vec::new();
            for name in [
                trustlens::insights::loader::URL_DATASET,
                trustlens::insights::loader::EMAIL_DATASET,
                trustlens::insights::loader::MOBILE_DATASET,
            ] {
                if !dir.join(name).exists() {
                    missing.push(name);
                }
            }
            if missing.is_empty() {
                println!("Datasets: {} (all three present)", config.data_dir);
            } else {
                println!(
                    "Datasets: {} ({} missing: {})",
                    config.data_dir,
                    missing.len(),
                    missing.join(", ")
                );
            }
        }
    }
}
