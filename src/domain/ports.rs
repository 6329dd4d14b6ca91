use crate::domain::model::{ExportOutcome, NormalizedRecord, RawCharge};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.stripe.com/v1/charges";
pub const DEFAULT_OUTPUT_PATH: &str = "stripe_transactions.csv";
pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 100;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn limit(&self) -> u32;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawCharge>>;
    async fn transform(&self, data: Vec<RawCharge>) -> Result<Vec<NormalizedRecord>>;
    async fn load(&self, records: Vec<NormalizedRecord>) -> Result<ExportOutcome>;
}
