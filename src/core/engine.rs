use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting site index build...");

        // Extract
        let content = self.pipeline.extract().await?;
        tracing::info!(
            "📥 Loaded {} posts and {} projects",
            content.posts.len(),
            content.projects.len()
        );

        // Transform
        let index = self.pipeline.transform(content).await?;
        tracing::info!(
            "🔗 Computed links for {} pages across {} series",
            index.pages.len(),
            index.series.len()
        );

        // Load
        let output_path = self.pipeline.load(index).await?;
        tracing::info!("💾 Site index written to {} in {:?}", output_path, started.elapsed());

        Ok(output_path)
    }
}
