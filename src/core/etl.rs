use crate::core::{ExportOutcome, Pipeline};
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform and load in order, stopping at the first failure.
    pub async fn run(&self) -> Result<ExportOutcome> {
        tracing::debug!("Starting export");

        let raw_data = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} charges", raw_data.len());

        let records = self.pipeline.transform(raw_data).await?;
        tracing::debug!("Normalized {} records", records.len());

        let outcome = self.pipeline.load(records).await?;
        match &outcome {
            ExportOutcome::Written { path, rows } => {
                tracing::debug!("Wrote {} rows to {}", rows, path)
            }
            ExportOutcome::Skipped => tracing::debug!("Nothing written"),
        }

        Ok(outcome)
    }
}
