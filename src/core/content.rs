use crate::domain::model::ContentManifest;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use std::collections::{HashMap, HashSet};

impl ContentManifest {
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let manifest: ContentManifest = serde_json::from_slice(data)?;
        Ok(manifest)
    }

    /// 檢查關聯引擎依賴的不變條件：slug 唯一、系列 part 為正且不重複
    pub fn validate_content(&self) -> Result<()> {
        let mut slugs: HashSet<&str> = HashSet::new();
        let mut parts: HashMap<&str, HashSet<u32>> = HashMap::new();

        for post in &self.posts {
            if post.slug.trim().is_empty() {
                return Err(SiteError::ContentError {
                    message: format!("Post '{}' has an empty slug", post.title),
                });
            }

            if !slugs.insert(post.slug.as_str()) {
                return Err(SiteError::ContentError {
                    message: format!("Duplicate slug: {}", post.slug),
                });
            }

            if let Some(series) = &post.series {
                if series.part == 0 {
                    return Err(SiteError::ContentError {
                        message: format!(
                            "Post '{}' has series part 0; parts start at 1",
                            post.slug
                        ),
                    });
                }

                if !parts
                    .entry(series.name.as_str())
                    .or_default()
                    .insert(series.part)
                {
                    return Err(SiteError::ContentError {
                        message: format!(
                            "Series '{}' has more than one part {} (post '{}')",
                            series.name, series.part, post.slug
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Validate for ContentManifest {
    fn validate(&self) -> Result<()> {
        self.validate_content()
    }
}
