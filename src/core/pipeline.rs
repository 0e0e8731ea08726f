use crate::core::transform::build_report;
use crate::core::parser::parse_document;
use crate::core::{ConfigProvider, EventRecord, Pipeline, Storage};
use crate::domain::model::AgendaReport;
use crate::utils::encoding::decode_document;
use crate::utils::error::Result;
use std::path::Path;

pub struct AgendaPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AgendaPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_location(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_file())
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AgendaPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<EventRecord>> {
        tracing::debug!("Reading agenda export from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;
        tracing::debug!("Read {} bytes", raw.len());

        let document = decode_document(&raw);
        let parsed = parse_document(&document, self.config.schema())?;

        if parsed.skipped > 0 {
            tracing::info!(
                "Skipped {} <{}> elements with missing fields",
                parsed.skipped,
                self.config.schema().event
            );
        }

        Ok(parsed.records)
    }

    async fn transform(&self, records: Vec<EventRecord>) -> Result<AgendaReport> {
        Ok(build_report(records))
    }

    async fn load(&self, report: AgendaReport) -> Result<String> {
        let output_path = self.output_location();

        tracing::debug!(
            "Writing report ({} bytes) to storage",
            report.rendered.len()
        );
        self.storage
            .write_file(&output_path, report.rendered.as_bytes())
            .await?;

        Ok(output_path)
    }
}
