//! 피드 Provider 모듈.
//!
//! 생성기가 게시한 JSON 피드를 원문 그대로 가져옵니다. 파싱은
//! 호출자(로더)가 담당합니다.
//!
//! ## HTTP
//! - `HttpFeedSource`: `{base_url}/{name}` GET, 캐시 무시
//!
//! ## 로컬 파일
//! - `FsFeedSource`: `{dir}/{name}` 읽기 (생성기 출력 디렉토리를 직접 사용)

pub mod fs;
pub mod http;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use strata_core::{FeedsConfig, StrataResult};

pub use fs::FsFeedSource;
pub use http::HttpFeedSource;

/// 피드 원문 Provider trait.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Provider 이름 (로그용).
    fn name(&self) -> &str;

    /// 피드 위치 (로그용).
    fn location(&self) -> &str;

    /// 피드 파일 하나의 원문을 가져옵니다.
    async fn fetch(&self, file_name: &str) -> StrataResult<String>;
}

/// 위치 문자열에 맞는 Provider를 만듭니다.
///
/// `http://` 또는 `https://`로 시작하면 HTTP, 그 외에는 로컬 디렉토리.
pub fn feed_source_from(
    location: &str,
    timeout: Option<Duration>,
) -> StrataResult<Arc<dyn FeedSource>> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpFeedSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(FsFeedSource::new(location)))
    }
}

/// 피드 설정으로 Provider를 만듭니다.
pub fn feed_source_from_config(config: &FeedsConfig) -> StrataResult<Arc<dyn FeedSource>> {
    feed_source_from(&config.source, config.timeout_secs.map(Duration::from_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        let http = feed_source_from("https://signals.example.com/data/", None).unwrap();
        assert_eq!(http.name(), "http");
        assert_eq!(http.location(), "https://signals.example.com/data");

        let fs = feed_source_from("./data", None).unwrap();
        assert_eq!(fs.name(), "fs");
        assert_eq!(fs.location(), "./data");
    }
}
