//! HTTP 피드 Provider.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::Duration;

use strata_core::{StrataError, StrataResult};

use super::FeedSource;

/// 원격 디렉토리에서 피드를 가져오는 Provider.
///
/// 재시도하지 않습니다. 실패한 피드는 해당 섹션만 에러로 표시됩니다.
pub struct HttpFeedSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeedSource {
    /// 새로운 HTTP Provider 생성.
    ///
    /// # Arguments
    /// * `base_url` - 피드 파일들이 있는 URL (끝의 `/`는 무시)
    /// * `timeout` - 요청 타임아웃 (`None`이면 무제한)
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> StrataResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("strata/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StrataError::Config(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name.trim_start_matches('/'))
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, file_name: &str) -> StrataResult<String> {
        let url = self.url_for(file_name);
        tracing::debug!(url = %url, "피드 요청");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| StrataError::Network(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StrataError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| StrataError::Network(format!("{}: {}", url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let source = HttpFeedSource::new("https://example.com/data/", None).unwrap();
        assert_eq!(
            source.url_for("sp500_breakout_pro.json"),
            "https://example.com/data/sp500_breakout_pro.json"
        );
        assert_eq!(
            source.url_for("/performance_summary.json"),
            "https://example.com/data/performance_summary.json"
        );
    }
}
