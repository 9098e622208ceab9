use chiron_oracle::utils::error::ErrorSeverity;
use chiron_oracle::utils::{logger, validation::Validate};
use chiron_oracle::{AppConfig, CliConfig, OracleError, Reading};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting chiron-oracle CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    match run(&cli).await {
        Ok(reading) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print_reading(&reading);
            }
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> chiron_oracle::Result<Reading> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    let engine = config.build_engine()?;
    engine.compute(&cli.birth_input()).await
}

fn print_reading(reading: &Reading) {
    println!(
        "🔮 Chiron in {} {:.2}°, house {}",
        reading.sign, reading.degree_in_sign, reading.house
    );
    println!();
    println!("Wound:    {}", reading.wound_text);
    println!("Strength: {}", reading.strength_text);
}

fn exit_with(e: OracleError) -> ! {
    tracing::error!(
        "❌ Reading failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // oracle unavailable, retryable
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
