use crate::core::reading_time::DEFAULT_WORDS_PER_MINUTE;
use crate::core::related::DEFAULT_MAX_RELATED;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub content: ContentSection,
    #[serde(default)]
    pub related: RelatedSection,
    #[serde(default)]
    pub reading: ReadingSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub path: String,
    pub include_drafts: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedSection {
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingSection {
    pub words_per_minute: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;

        if let Some(url) = &self.site.url {
            validation::validate_site_url("site.url", url)?;
        }

        validation::validate_path("content.path", &self.content.path)?;
        validation::validate_file_extension("content.path", &self.content.path, &["json"])?;
        validation::validate_path("output.path", &self.output.path)?;

        if let Some(max) = self.related.max_results {
            validation::validate_max_related("related.max_results", max)?;
        }

        if let Some(wpm) = self.reading.words_per_minute {
            validation::validate_words_per_minute("reading.words_per_minute", wpm)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn content_path(&self) -> &str {
        &self.content.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn max_related(&self) -> usize {
        self.related.max_results.unwrap_or(DEFAULT_MAX_RELATED)
    }

    fn words_per_minute(&self) -> u32 {
        self.reading.words_per_minute.unwrap_or(DEFAULT_WORDS_PER_MINUTE)
    }

    fn include_drafts(&self) -> bool {
        self.content.include_drafts.unwrap_or(false)
    }

    fn site_url(&self) -> Option<&str> {
        self.site.url.as_deref()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
