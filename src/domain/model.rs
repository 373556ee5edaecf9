use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::github::{GitHubRepoPayload, GitHubRepoRef, GitHubStats};

/// 系列文章資訊：同名系列以 `part` 由小到大排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    pub name: String,
    pub part: u32,
}

/// 部落格文章，已通過內容來源的 schema 驗證
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(alias = "pubDate")]
    pub pub_date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub series: Option<SeriesInfo>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// 預估閱讀時間，沒有內文時以摘要估算
    pub fn reading_time_minutes(&self, words_per_minute: u32) -> u32 {
        let text = self.body.as_deref().unwrap_or(&self.excerpt);
        crate::core::reading_time::reading_time(text, words_per_minute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: Option<bool>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: Option<String>,
    pub year: Option<u32>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stats: Option<GitHubRepoPayload>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// 內容匯出檔：靜態網站建置流程輸出的文章與專案清單
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentManifest {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesNavigation<'a> {
    pub series_name: &'a str,
    pub current_part: u32,
    pub total_parts: usize,
    pub previous_post: Option<&'a Post>,
    pub next_post: Option<&'a Post>,
    pub all_posts: Vec<&'a Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGroup<'a> {
    pub name: &'a str,
    pub posts: Vec<&'a Post>,
    pub total_parts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub pub_date: NaiveDate,
    pub description: String,
    pub link: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesNavSummary {
    pub series_name: String,
    pub current_part: u32,
    pub total_parts: usize,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl From<&SeriesNavigation<'_>> for SeriesNavSummary {
    fn from(nav: &SeriesNavigation<'_>) -> Self {
        Self {
            series_name: nav.series_name.to_string(),
            current_part: nav.current_part,
            total_parts: nav.total_parts,
            previous: nav.previous_post.map(|p| p.slug.clone()),
            next: nav.next_post.map(|p| p.slug.clone()),
        }
    }
}

/// 單一文章頁面需要的衍生資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    pub slug: String,
    pub title: String,
    pub reading_time_minutes: u32,
    pub related: Vec<String>,
    pub series: Option<SeriesNavSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub total_parts: usize,
    pub posts: Vec<String>,
}

impl From<&SeriesGroup<'_>> for SeriesSummary {
    fn from(group: &SeriesGroup<'_>) -> Self {
        Self {
            name: group.name.to_string(),
            total_parts: group.total_parts,
            posts: group.posts.iter().map(|p| p.slug.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub featured: bool,
    pub technologies: Vec<String>,
    pub github: Option<GitHubRepoRef>,
    pub stats_endpoint: Option<String>,
    pub stats: Option<GitHubStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIndex {
    pub pages: Vec<PageLinks>,
    pub series: Vec<SeriesSummary>,
    pub feed: Vec<FeedItem>,
    pub projects: Vec<ProjectCard>,
}
