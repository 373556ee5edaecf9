use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Content error: {message}")]
    ContentError { message: String },

    #[error("Invalid GitHub URL: {url}")]
    InvalidGitHubUrl { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 建置失敗時的退出碼，任何嚴重程度都不會是 0
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) => ErrorCategory::Serialization,
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::ContentError { .. } | SiteError::InvalidGitHubUrl { .. } => {
                ErrorCategory::Content
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // GitHub 連結錯誤只影響單一專案卡片
            SiteError::InvalidGitHubUrl { .. } => ErrorSeverity::Low,
            SiteError::IoError(_) => ErrorSeverity::Medium,
            SiteError::SerializationError(_) | SiteError::ContentError { .. } => {
                ErrorSeverity::High
            }
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(_) => {
                "Check that the content manifest exists and the output directory is writable"
                    .to_string()
            }
            SiteError::SerializationError(_) => {
                "Make sure the content manifest is valid JSON with a top-level \"posts\" array"
                    .to_string()
            }
            SiteError::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
            SiteError::ContentError { .. } => {
                "Fix the offending post front matter and export the content again".to_string()
            }
            SiteError::InvalidGitHubUrl { .. } => {
                "Use a URL of the form https://github.com/<owner>/<repo>".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Serialization => format!("Could not read the content manifest: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Content => format!("Invalid content: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        let config_err = SiteError::InvalidConfigValueError {
            field: "content.path".to_string(),
            value: "posts.yaml".to_string(),
            reason: "Unsupported file extension".to_string(),
        };
        let content_err = SiteError::ContentError {
            message: "duplicate slug".to_string(),
        };

        assert_eq!(config_err.severity(), ErrorSeverity::Critical);
        assert_eq!(content_err.severity(), ErrorSeverity::High);
        assert!(config_err.severity() > content_err.severity());
    }

    #[test]
    fn test_failed_builds_never_exit_zero() {
        let github_err = SiteError::InvalidGitHubUrl {
            url: "https://example.com".to_string(),
        };
        assert_eq!(github_err.severity(), ErrorSeverity::Low);
        assert_eq!(github_err.severity().exit_code(), 1);

        for severity in [
            ErrorSeverity::Low,
            ErrorSeverity::Medium,
            ErrorSeverity::High,
            ErrorSeverity::Critical,
        ] {
            assert_ne!(severity.exit_code(), 0);
        }
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_category_and_messages() {
        let err = SiteError::InvalidConfigValueError {
            field: "related.max_results".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("related.max_results"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
