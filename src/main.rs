use clap::Parser;
use stripe_export::config::credentials;
use stripe_export::core::ConfigProvider;
use stripe_export::utils::{logger, validation::Validate};
use stripe_export::{
    CliConfig, ExportEngine, ExportError, ExportOutcome, ExportPipeline, Result, TomlConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    credentials::load_dotenv();

    let strict = cli.strict;
    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli).await,
    };

    match result {
        Ok(outcome) => {
            if let ExportOutcome::Written { path, rows } = &outcome {
                println!("📁 {} transactions saved to: {}", rows, path);
            }
            println!("\n✓ Export completed successfully!");
        }
        Err(e) => {
            let exit_code = e.exit_code(strict);
            report(&e);
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<ExportOutcome> {
    let api_key = credentials::load_api_key()?;
    config.validate()?;

    tracing::debug!(
        "Export config: endpoint={} limit={} output={}",
        config.api_endpoint(),
        config.limit(),
        config.output_path()
    );

    let pipeline = ExportPipeline::new(config, api_key);
    ExportEngine::new(pipeline).run().await
}

fn report(e: &ExportError) {
    tracing::error!("❌ Export failed: {} (Category: {:?})", e, e.category());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("\n💡 {}", e.recovery_suggestion());
}
