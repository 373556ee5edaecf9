pub mod error;
pub mod github;
pub mod logger;
pub mod validation;
