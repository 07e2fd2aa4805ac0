use clap::Parser;
use credit_scoring::core::presenter;
use credit_scoring::domain::schema;
use credit_scoring::utils::error::{ErrorCategory, ErrorSeverity};
use credit_scoring::utils::validation::validate_required_field;
use credit_scoring::utils::{logger, validation::Validate};
use credit_scoring::{CliConfig, ModelLoader, ScoreRequest, ScoringEngine, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting credit-scoring CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.factors {
        println!("Factors affecting credit score (training-time impact):");
        for (factor, impact) in schema::FEATURE_IMPORTANCE {
            println!("  {:<25} {:.4}", factor, impact);
        }
        return Ok(());
    }

    if let Some(path) = config.config.clone() {
        let toml_config = TomlConfig::from_file(&path)?;
        toml_config.validate_config()?;
        config.model_path = toml_config.model_path().to_string();
        tracing::debug!("Model path from {}: {}", path, config.model_path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let input = match validate_required_field("input", &config.input) {
        Ok(input) => input.clone(),
        Err(_) => {
            eprintln!("No score request given; pass --input <request.json> or --factors.");
            std::process::exit(2);
        }
    };

    let loader = ModelLoader::from_config(&config);
    let engine = ScoringEngine::from_handle(loader.load());
    if !engine.is_ready() {
        eprintln!("Model file not found or unreadable; predictions are disabled.");
        eprintln!("Expected a JSON artifact at: {}", config.model_path);
        std::process::exit(3);
    }

    let request_json = std::fs::read_to_string(&input)?;
    let request: ScoreRequest = serde_json::from_str(&request_json)?;

    match engine.score(&request) {
        Ok(report) => {
            tracing::info!("Prediction complete for '{}'", report.name);
            println!(
                "{}, your predicted credit score is: {}",
                report.name, report.label
            );
            println!();
            println!("{}", report.guidance.headline);
            for tip in report.guidance.recommendations {
                println!("  - {}", tip);
            }
            if config.verbose {
                println!();
                println!("Raw class scores: {:?}", report.prediction.scores);
            }
        }
        Err(e) => {
            tracing::error!(
                "Scoring failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            if e.category() == ErrorCategory::Input {
                eprintln!();
                eprintln!("General credit improvement tips:");
                for tip in presenter::GENERAL_TIPS {
                    eprintln!("  - {}", tip);
                }
            }

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
