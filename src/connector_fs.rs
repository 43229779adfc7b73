use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::config::ColumnsConfig;
use crate::error::RosterError;
use crate::ingest::parse_roster;
use crate::models::Profile;
use crate::traits::RosterSource;

/// Roster read from a CSV file on disk.
pub struct FileSource {
    path: PathBuf,
    columns: ColumnsConfig,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnsConfig) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

#[async_trait]
impl RosterSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn is_healthy(&self) -> bool {
        self.path.is_file()
    }

    async fn load(&self) -> Result<Vec<Profile>, RosterError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            RosterError::Transport(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let text = decode_text(bytes, &self.path)?;
        parse_roster(&text, &self.columns)
    }
}

fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String, RosterError> {
    String::from_utf8(bytes)
        .map_err(|_| RosterError::Parse(format!("{} is not UTF-8 text", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_loads_csv_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mentors.csv");
        std::fs::write(&path, "名前,所属\nA,X\n,Y\nB,Z\n").unwrap();

        let source = FileSource::new(&path, ColumnsConfig::default());
        assert!(source.is_healthy());
        let profiles = source.load().await.unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].name, "B");
        assert_eq!(profiles[1].id, 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let tmp = TempDir::new().unwrap();
        let source = FileSource::new(tmp.path().join("absent.csv"), ColumnsConfig::default());
        assert!(!source.is_healthy());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, RosterError::Transport(_)));
    }

    #[tokio::test]
    async fn test_binary_payload_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mentors.csv");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let err = FileSource::new(&path, ColumnsConfig::default())
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }
}
