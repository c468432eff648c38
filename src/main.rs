use bookfinder::core::{ConfigProvider, ConnectivityCheck};
use bookfinder::utils::error::ErrorSeverity;
use bookfinder::utils::logger;
use bookfinder::{
    AppConfig, AssumeConnected, BookFinderError, CliConfig, ConsolePresenter, HttpFetcher,
    OutputFormat, SearchEngine, TcpConnectivityCheck,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    match cli.log_format.as_str() {
        "json" => logger::init_json_logger(cli.verbose),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(
                "bookfinder failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // Pre-fetch conditions were already shown by the presenter.
            if !matches!(
                e,
                BookFinderError::EmptyInput | BookFinderError::NetworkUnavailable { .. }
            ) {
                eprintln!("{}", e.user_friendly_message());
                eprintln!("Hint: {}", e.recovery_suggestion());
            }

            match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &CliConfig) -> Result<(), BookFinderError> {
    let config = cli.resolve()?;
    let format: OutputFormat = config.output_format().parse()?;
    let query = cli.query();

    let fetcher = HttpFetcher::new()?;
    let mut presenter = ConsolePresenter::stdio(format, query.clone());

    if cli.skip_connectivity_check {
        search(&config, fetcher, AssumeConnected, &query, &mut presenter).await
    } else {
        let probe = TcpConnectivityCheck::from_endpoint(&config.endpoint)?;
        search(&config, fetcher, probe, &query, &mut presenter).await
    }
}

async fn search<N: ConnectivityCheck + 'static>(
    config: &AppConfig,
    fetcher: HttpFetcher,
    connectivity: N,
    query: &str,
    presenter: &mut ConsolePresenter<std::io::Stdout, std::io::Stderr>,
) -> Result<(), BookFinderError> {
    let engine = Arc::new(SearchEngine::from_config(config, fetcher, connectivity));
    tracing::debug!("Searching {} for \"{}\"", engine.endpoint(), query);
    let outcome = engine.run(query, presenter).await?;

    if outcome.is_absent() {
        tracing::info!("Search for \"{}\" produced no result set", query);
    }
    Ok(())
}
