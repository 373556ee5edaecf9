use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 本機檔案系統：讀取相對於工作目錄，寫入相對於輸出目錄
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(Path::new(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.output_dir.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_output_dir_and_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("dist").join("data");
        let storage = LocalStorage::new(&output_dir);

        storage.write_file("site-index.json", b"{}").await.unwrap();

        let written = output_dir.join("site-index.json");
        assert!(written.exists());
        let data = storage.read_file(written.to_str().unwrap()).await.unwrap();
        assert_eq!(data, b"{}");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let storage = LocalStorage::new("unused");

        let err = storage.read_file("definitely/missing/content.json").await.unwrap_err();

        assert!(matches!(err, crate::utils::error::SiteError::IoError(_)));
    }
}
