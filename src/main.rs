use agenda_export::core::ConfigProvider;
use agenda_export::utils::encoding::decode_document;
use agenda_export::utils::error::{AgendaError, ErrorSeverity};
use agenda_export::utils::{logger, validation::Validate};
use agenda_export::{
    transform_with_schema, AgendaPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let result = match cli.config.clone() {
        Some(config_path) => run_with_toml(&cli, &config_path).await,
        None => {
            logger::init_cli_logger(if cli.verbose { "debug" } else { "info" });
            tracing::debug!("CLI config: {:?}", cli);
            run(cli.clone(), cli.stdout).await
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "Agenda export failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run_with_toml(cli: &CliConfig, config_path: &str) -> Result<(), AgendaError> {
    let config = TomlConfig::from_file(config_path)?;

    let level = config.log_level(cli.verbose);
    if config.json_logging() {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }
    tracing::info!("Loaded configuration from: {}", config_path);

    run(config, cli.stdout).await
}

async fn run<C>(config: C, to_stdout: bool) -> Result<(), AgendaError>
where
    C: ConfigProvider + Validate + 'static,
{
    config.validate()?;

    if to_stdout {
        let raw = std::fs::read(config.input_path())?;
        let document = decode_document(&raw);
        println!("{}", transform_with_schema(&document, config.schema())?);
        return Ok(());
    }

    let storage = LocalStorage::new(".");
    let engine = EtlEngine::new(AgendaPipeline::new(storage, config));
    let output_path = engine.run().await?;

    println!("✅ Agenda export completed");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}
