use crate::domain::model::{ContentManifest, SiteIndex};
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
    fn content_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn max_related(&self) -> usize;
    fn words_per_minute(&self) -> u32;
    fn include_drafts(&self) -> bool;
    fn site_url(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ContentManifest>;
    async fn transform(&self, content: ContentManifest) -> Result<SiteIndex>;
    async fn load(&self, index: SiteIndex) -> Result<String>;
}
