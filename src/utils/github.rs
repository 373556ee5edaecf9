use crate::utils::error::{Result, SiteError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/?#]+)(?:/([^/?#]+))?").expect("GitHub URL pattern must compile")
});

const GITHUB_API_BASE: &str = "https://api.github.com";

/// 從 GitHub 網址拆出的 owner 與 repo；組織頁面沒有 repo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepoRef {
    pub owner: String,
    pub repo: Option<String>,
}

impl GitHubRepoRef {
    /// repo 統計 API 位址，組織頁面回傳 None
    pub fn api_url(&self) -> Option<String> {
        self.repo
            .as_ref()
            .map(|repo| format!("{}/repos/{}/{}", GITHUB_API_BASE, self.owner, repo))
    }
}

pub fn parse_github_url(url: &str) -> Result<GitHubRepoRef> {
    let caps = GITHUB_URL
        .captures(url)
        .ok_or_else(|| SiteError::InvalidGitHubUrl {
            url: url.to_string(),
        })?;

    let owner = caps[1].to_string();
    let repo = caps
        .get(2)
        .map(|m| m.as_str().trim_end_matches(".git").to_string())
        .filter(|repo| !repo.is_empty());

    Ok(GitHubRepoRef { owner, repo })
}

/// GitHub `GET /repos/{owner}/{repo}` 回應中用得到的欄位，
/// 由內容匯出流程抓取後存進 manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepoPayload {
    pub name: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubStats {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub issues: u64,
    pub language: Option<String>,
}

impl From<GitHubRepoPayload> for GitHubStats {
    fn from(payload: GitHubRepoPayload) -> Self {
        Self {
            stars: payload.stargazers_count,
            forks: payload.forks_count,
            watchers: payload.watchers_count,
            issues: payload.open_issues_count,
            language: payload.language,
        }
    }
}
