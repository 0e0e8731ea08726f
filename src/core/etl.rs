use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting agenda export");

        tracing::info!("Extracting events...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} events", records.len());

        tracing::info!("Grouping and rendering...");
        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Rendered {} events in {} places",
            report.event_count(),
            report.groups.len()
        );

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
