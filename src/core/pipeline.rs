use crate::core::feed::build_feed_items;
use crate::core::projects::{project_card, sorted_projects};
use crate::core::related::get_related_posts;
use crate::core::series::{get_all_series, get_series_navigation, get_series_posts};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    ContentManifest, PageLinks, Post, SeriesNavSummary, SeriesSummary, SiteIndex,
};
use crate::utils::error::Result;
use std::path::Path;

pub const SITE_INDEX_FILE: &str = "site-index.json";

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn page_links(&self, post: &Post, published: &[Post]) -> PageLinks {
        let related = get_related_posts(post, published, self.config.max_related());
        let series_posts = get_series_posts(post, published);
        let series = get_series_navigation(post, &series_posts).map(|nav| SeriesNavSummary::from(&nav));

        PageLinks {
            slug: post.slug.clone(),
            title: post.title.clone(),
            reading_time_minutes: post.reading_time_minutes(self.config.words_per_minute()),
            related: related.iter().map(|p| p.slug.clone()).collect(),
            series,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<ContentManifest> {
        tracing::debug!("Reading content manifest: {}", self.config.content_path());
        let data = self.storage.read_file(self.config.content_path()).await?;

        let manifest = ContentManifest::from_json_slice(&data)?;
        manifest.validate_content()?;

        tracing::debug!(
            "Manifest contains {} posts and {} projects",
            manifest.posts.len(),
            manifest.projects.len()
        );
        Ok(manifest)
    }

    async fn transform(&self, content: ContentManifest) -> Result<SiteIndex> {
        let ContentManifest { posts, projects } = content;

        // 草稿不產生頁面，也不參與關聯計算
        let published: Vec<Post> = if self.config.include_drafts() {
            posts
        } else {
            let total = posts.len();
            let published: Vec<Post> = posts.into_iter().filter(|p| !p.draft).collect();
            if published.len() < total {
                tracing::info!("📝 Skipping {} draft post(s)", total - published.len());
            }
            published
        };

        let pages: Vec<PageLinks> = published
            .iter()
            .map(|post| self.page_links(post, &published))
            .collect();

        let series: Vec<SeriesSummary> = get_all_series(&published)
            .iter()
            .map(SeriesSummary::from)
            .collect();

        let feed = build_feed_items(&published, self.config.site_url());

        let projects = sorted_projects(&projects)
            .into_iter()
            .map(project_card)
            .collect();

        tracing::debug!(
            "Built {} pages, {} series, {} feed items",
            pages.len(),
            series.len(),
            feed.len()
        );

        Ok(SiteIndex {
            pages,
            series,
            feed,
            projects,
        })
    }

    async fn load(&self, index: SiteIndex) -> Result<String> {
        let output_path = Path::new(self.config.output_path()).join(SITE_INDEX_FILE);

        let json = serde_json::to_vec_pretty(&index)?;
        tracing::debug!("Writing site index ({} bytes) to storage", json.len());
        self.storage.write_file(SITE_INDEX_FILE, &json).await?;

        Ok(output_path.display().to_string())
    }
}
