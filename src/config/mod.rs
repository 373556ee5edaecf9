pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::related::DEFAULT_MAX_RELATED;
    use crate::core::reading_time::DEFAULT_WORDS_PER_MINUTE;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "content-relations")]
    #[command(about = "Build related-post, series and feed data for a static blog")]
    pub struct CliConfig {
        /// Exported content manifest (JSON)
        #[arg(long, default_value = "content/manifest.json")]
        pub content_path: String,

        #[arg(long, default_value = "./dist/data")]
        pub output_path: String,

        #[arg(long, default_value_t = DEFAULT_MAX_RELATED)]
        pub max_related: usize,

        #[arg(long, default_value_t = DEFAULT_WORDS_PER_MINUTE)]
        pub words_per_minute: u32,

        #[arg(long, help = "Build pages for draft posts too")]
        pub include_drafts: bool,

        /// Base URL used for absolute feed links
        #[arg(long)]
        pub site_url: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit JSON formatted logs")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn content_path(&self) -> &str {
            &self.content_path
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn max_related(&self) -> usize {
            self.max_related
        }

        fn words_per_minute(&self) -> u32 {
            self.words_per_minute
        }

        fn include_drafts(&self) -> bool {
            self.include_drafts
        }

        fn site_url(&self) -> Option<&str> {
            self.site_url.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("content_path", &self.content_path)?;
            validation::validate_file_extension("content_path", &self.content_path, &["json"])?;
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_max_related("max_related", self.max_related)?;
            validation::validate_words_per_minute("words_per_minute", self.words_per_minute)?;
            if let Some(url) = &self.site_url {
                validation::validate_site_url("site_url", url)?;
            }
            Ok(())
        }
    }

}
