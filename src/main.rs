use clap::Parser;
use kotacari::core::scramble::scramble_city;
use kotacari::domain::model::SessionSummary;
use kotacari::domain::ports::ConfigProvider;
use kotacari::utils::error::ErrorSeverity;
use kotacari::utils::{logger, validation::Validate};
use kotacari::{CliConfig, FileCitySource, LocalStorage, PuzzleEngine, TomlConfig};
use tokio::io::{stdin, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kotacari");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Generation mode prints a single practice scramble and leaves.
    if let Some(name) = &config.scramble {
        let scramble = scramble_city(name, config.hard, &mut rand::thread_rng())?;
        println!("{}", scramble);
        return Ok(());
    }

    let result = match config.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(toml_config) => run_session(toml_config).await,
            Err(e) => Err(e),
        },
        None => run_session(config).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!("✅ Session finished");
            println!(
                "✅ Session finished: {} scrambles checked, {} matches found",
                summary.queries, summary.matches
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Solve session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_session<C>(config: C) -> kotacari::Result<SessionSummary>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let storage = LocalStorage::new(".".to_string());
    let max_results = config.max_results();
    let source = FileCitySource::new(storage, config);
    let engine = PuzzleEngine::new(source).with_max_results(max_results);

    engine.run(BufReader::new(stdin()), std::io::stdout()).await
}
