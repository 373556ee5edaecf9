pub mod content;
pub mod engine;
pub mod feed;
pub mod ordering;
pub mod pipeline;
pub mod projects;
pub mod reading_time;
pub mod related;
pub mod series;

pub use crate::domain::model::{ContentManifest, Post, SeriesInfo, SiteIndex};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
