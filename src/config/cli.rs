use crate::domain::ports::{ConfigProvider, DEFAULT_API_ENDPOINT, DEFAULT_OUTPUT_PATH, MAX_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "stripe-export")]
#[command(about = "Export Stripe charges to a CSV file")]
pub struct CliConfig {
    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Maximum number of charges to fetch (1-100, single page)
    #[arg(long, default_value_t = crate::domain::ports::DEFAULT_LIMIT)]
    pub limit: u32,

    /// List-charges endpoint
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// TOML config file; replaces --output, --limit and --api-endpoint
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Exit with a non-zero status on configuration errors
    #[arg(long)]
    pub strict: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn limit(&self) -> u32 {
        self.limit
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output", &self.output)?;
        validate_range("limit", self.limit, 1, MAX_LIMIT)?;
        Ok(())
    }
}
