use crate::domain::model::{AgendaReport, DocumentSchema, EventRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn schema(&self) -> &DocumentSchema;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EventRecord>>;
    async fn transform(&self, records: Vec<EventRecord>) -> Result<AgendaReport>;
    async fn load(&self, report: AgendaReport) -> Result<String>;
}
