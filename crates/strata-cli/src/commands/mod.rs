//! CLI 명령어 구현 모듈.

pub mod build;
pub mod check;
pub mod sparkline;
pub mod summary;

use anyhow::{Context, Result};
use std::path::Path;

use strata_core::SiteConfig;

/// 설정 파일을 읽고 명령행 재정의를 적용합니다.
///
/// 파일이 없으면 기본값과 환경 변수만 사용합니다.
pub fn load_config(
    path: &Path,
    source: Option<String>,
    out: Option<String>,
) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;

    if let Some(source) = source {
        config.feeds.source = source;
    }
    if let Some(out) = out {
        config.output.dir = out;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let config = load_config(
            Path::new("does/not/exist.toml"),
            Some("https://signals.example.com/data".to_string()),
            Some("dist".to_string()),
        )
        .unwrap();

        assert_eq!(config.feeds.source, "https://signals.example.com/data");
        assert_eq!(config.output.dir, "dist");
    }

    #[test]
    fn test_empty_source_rejected() {
        let result = load_config(Path::new("does/not/exist.toml"), Some(String::new()), None);
        assert!(result.is_err());
    }
}
