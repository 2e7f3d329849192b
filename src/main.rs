use clap::Parser;
use price_scout::adapters::output::{render, write_output};
use price_scout::domain::model::SiteStatus;
use price_scout::utils::error::Result;
use price_scout::utils::{logger, validation::Validate};
use price_scout::{Aggregator, CliConfig, HttpFetcher, ScoutConfig};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 先載入 .env，讓其中的 RUST_LOG 也能影響日誌設定
    let dotenv = dotenvy::dotenv();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("⚠️ Could not read .env file: {}", e),
    }

    tracing::info!("Starting price-scout");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ price-scout failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.load_config()?;
    config.validate()?;

    for warning in config.url_warnings() {
        tracing::warn!("⚠️ {} (this site will return no products)", warning);
    }

    if cli.dry_run {
        print_catalog(&config);
        return Ok(());
    }

    let fetcher = HttpFetcher::from_config(&config)?;
    let aggregator = Aggregator::new_with_monitoring(&config, fetcher, cli.monitor);

    let report = aggregator.search_with_report(&cli.query).await;

    for site in &report.sites {
        if let SiteStatus::Failed { reason } = &site.status {
            eprintln!("⚠️ {} unavailable: {}", site.site_name, reason);
        }
    }

    let rendered = render(&report, cli.format)?;
    write_output(&rendered, cli.output.as_deref())
}

fn print_catalog(config: &ScoutConfig) {
    println!("🔍 DRY RUN - {} sites would be searched:", config.sites.len());
    for site in &config.sites {
        let url = if site.url.is_empty() {
            "<not configured>"
        } else {
            site.url.as_str()
        };
        println!(
            "  {} {} (names: '{}', prices: '{}')",
            site.site_name, url, site.name_selector, site.price_selector
        );
    }
    match config.request_timeout_seconds {
        Some(secs) => println!("  request timeout: {}s", secs),
        None => println!("  request timeout: none"),
    }
}
