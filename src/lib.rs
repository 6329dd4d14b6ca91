pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::stripe::{fetch_transactions, StripeClient};
pub use config::credentials::{load_api_key, load_api_key_from};
pub use core::{
    csv_writer::write_to_csv, etl::ExportEngine, fields::extract_fields, pipeline::ExportPipeline,
};
pub use domain::model::{ExportOutcome, NormalizedRecord, RawCharge, CSV_HEADERS};
pub use utils::error::{ExportError, Result};
