use crate::adapters::stripe::StripeClient;
use crate::core::csv_writer::write_to_csv;
use crate::core::fields::extract_fields;
use crate::core::{ConfigProvider, ExportOutcome, NormalizedRecord, Pipeline, RawCharge};
use crate::utils::error::Result;

pub struct ExportPipeline<C: ConfigProvider> {
    config: C,
    client: StripeClient,
}

impl<C: ConfigProvider> ExportPipeline<C> {
    pub fn new(config: C, api_key: impl Into<String>) -> Self {
        let client = StripeClient::with_endpoint(api_key, config.api_endpoint());
        Self { config, client }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ExportPipeline<C> {
    async fn extract(&self) -> Result<Vec<RawCharge>> {
        tracing::debug!("Extracting charges from {}", self.client.endpoint());
        self.client.fetch_transactions(self.config.limit()).await
    }

    async fn transform(&self, data: Vec<RawCharge>) -> Result<Vec<NormalizedRecord>> {
        Ok(data.iter().map(extract_fields).collect())
    }

    async fn load(&self, records: Vec<NormalizedRecord>) -> Result<ExportOutcome> {
        write_to_csv(&records, self.config.output_path())
    }
}
