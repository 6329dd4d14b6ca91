pub mod csv_writer;
pub mod etl;
pub mod fields;
pub mod pipeline;

pub use crate::domain::model::{ExportOutcome, NormalizedRecord, RawCharge};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
