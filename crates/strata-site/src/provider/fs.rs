//! 로컬 파일 피드 Provider.

use async_trait::async_trait;
use std::path::PathBuf;

use strata_core::{StrataError, StrataResult};

use super::FeedSource;

/// 로컬 디렉토리에서 피드를 읽는 Provider.
pub struct FsFeedSource {
    dir: PathBuf,
    location: String,
}

impl FsFeedSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let location = dir.display().to_string();
        Self { dir, location }
    }
}

#[async_trait]
impl FeedSource for FsFeedSource {
    fn name(&self) -> &str {
        "fs"
    }

    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self, file_name: &str) -> StrataResult<String> {
        let path = self.dir.join(file_name);
        tracing::debug!(path = %path.display(), "피드 파일 읽기");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| StrataError::Io(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FsFeedSource::new(std::env::temp_dir().join("strata-does-not-exist"));
        let err = source.fetch("sp500_breakout_pro.json").await.unwrap_err();

        assert!(matches!(err, StrataError::Io(_)));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_reads_file() {
        let dir = std::env::temp_dir().join(format!("strata-fs-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("feed.json"), r#"{"picks":{}}"#)
            .await
            .unwrap();

        let source = FsFeedSource::new(&dir);
        assert_eq!(source.fetch("feed.json").await.unwrap(), r#"{"picks":{}}"#);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
