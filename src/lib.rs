pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::SiteConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    engine::SiteEngine,
    feed::build_feed_items,
    pipeline::SitePipeline,
    reading_time::reading_time,
    related::get_related_posts,
    series::{get_all_series, get_series_navigation, get_series_posts},
};
pub use domain::model::{Post, SeriesGroup, SeriesInfo, SeriesNavigation};
pub use utils::error::{Result, SiteError};
