//! 설정 관리.
//!
//! 설정은 기본값 → TOML 파일 → 환경 변수(`STRATA__` 접두사) 순으로
//! 겹쳐 적용됩니다. 예: `STRATA__FEEDS__SOURCE=https://example.com/data`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{FeedKind, SeriesPalette, SeriesStyle, StrategyKey};
use crate::error::{StrataError, StrataResult};

/// 환경 변수 접두사
pub const ENV_PREFIX: &str = "STRATA";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 피드 소스 설정
    pub feeds: FeedsConfig,
    /// 출력 설정
    pub output: OutputConfig,
    /// 템플릿 설정
    pub templates: TemplatesConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 스파크라인 크기
    pub sparkline: SparklineConfig,
    /// 자산 곡선 차트 설정
    pub chart: ChartConfig,
}

/// 피드 소스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// 피드 위치 (`http(s)://` URL 또는 로컬 디렉토리)
    pub source: String,
    /// HTTP 요청 타임아웃 (초). 지정하지 않으면 타임아웃 없음
    pub timeout_secs: Option<u64>,
    /// 피드별 파일 이름
    pub files: FeedFiles,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            source: "data".to_string(),
            timeout_secs: None,
            files: FeedFiles::default(),
        }
    }
}

/// 피드별 파일 이름.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedFiles {
    pub sp500_phoenix: String,
    pub sp500_pullback: String,
    pub crypto_phoenix: String,
    pub crypto_pullback: String,
    pub performance: String,
}

impl Default for FeedFiles {
    fn default() -> Self {
        Self {
            sp500_phoenix: "sp500_breakout_pro.json".to_string(),
            sp500_pullback: "sp500_pullback_pro.json".to_string(),
            crypto_phoenix: "crypto_breakout_pro.json".to_string(),
            crypto_pullback: "crypto_pullback_pro.json".to_string(),
            performance: "performance_summary.json".to_string(),
        }
    }
}

impl FeedFiles {
    /// 피드 종류에 해당하는 파일 이름
    pub fn file_name(&self, kind: FeedKind) -> &str {
        match kind {
            FeedKind::Signals(StrategyKey::Sp500Phoenix) => &self.sp500_phoenix,
            FeedKind::Signals(StrategyKey::Sp500Pullback) => &self.sp500_pullback,
            FeedKind::Signals(StrategyKey::CryptoPhoenix) => &self.crypto_phoenix,
            FeedKind::Signals(StrategyKey::CryptoPullback) => &self.crypto_pullback,
            FeedKind::Performance => &self.performance,
        }
    }
}

/// 출력 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 생성된 페이지를 기록할 디렉토리
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
        }
    }
}

/// 템플릿 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// 내장 템플릿을 대체할 디렉토리 (`index.html`, `crypto.html`, `dashboard.html`)
    pub dir: Option<String>,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 스파크라인 크기.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct SparklineConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 40.0,
        }
    }
}

/// 자산 곡선 차트 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// 전략별 레이블/색상 재정의
    pub series: BTreeMap<StrategyKey, SeriesStyleOverride>,
}

/// 시리즈 스타일 부분 재정의.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SeriesStyleOverride {
    pub label: Option<String>,
    pub color: Option<String>,
}

impl ChartConfig {
    /// 기본 팔레트에 재정의를 합친 팔레트를 만듭니다.
    pub fn palette(&self) -> SeriesPalette {
        self.series
            .iter()
            .fold(SeriesPalette::new(), |palette, (key, over)| {
                let base = SeriesStyle::default_for(*key);
                palette.with_style(
                    *key,
                    SeriesStyle::new(
                        over.label.clone().unwrap_or(base.label),
                        over.color.clone().unwrap_or(base.color),
                    ),
                )
            })
    }
}

impl SiteConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> StrataResult<Self> {
        let builder = ::config::Config::builder()
            // 파일에서 로드
            .add_source(::config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config: SiteConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 로드합니다 (환경 변수 미적용).
    pub fn from_toml_str(text: &str) -> StrataResult<Self> {
        let config: SiteConfig = ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 설정값의 유효성을 검사합니다.
    pub fn validate(&self) -> StrataResult<()> {
        if self.feeds.source.trim().is_empty() {
            return Err(StrataError::Config("feeds.source must not be empty".to_string()));
        }
        if self.output.dir.trim().is_empty() {
            return Err(StrataError::Config("output.dir must not be empty".to_string()));
        }
        // 상하 여백 5씩을 제외한 높이가 남아야 함
        if !(self.sparkline.width > 0.0 && self.sparkline.height > 10.0) {
            return Err(StrataError::Config(format!(
                "sparkline size {}x{} is too small",
                self.sparkline.width, self.sparkline.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.feeds.source, "data");
        assert_eq!(config.output.dir, "public");
        assert_eq!(
            config.feeds.files.file_name(FeedKind::Signals(StrategyKey::CryptoPhoenix)),
            "crypto_breakout_pro.json"
        );
        assert_eq!(
            config.feeds.files.file_name(FeedKind::Performance),
            "performance_summary.json"
        );
        assert_eq!(config.sparkline.width, 120.0);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r##"
            [feeds]
            source = "https://signals.example.com/data"
            timeout_secs = 10

            [feeds.files]
            sp500_phoenix = "sp500_breakout_free.json"

            [chart.series.crypto_pullback]
            color = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.feeds.timeout_secs, Some(10));
        assert_eq!(config.feeds.files.sp500_phoenix, "sp500_breakout_free.json");
        assert_eq!(config.feeds.files.sp500_pullback, "sp500_pullback_pro.json");

        let style = config.chart.palette().style(StrategyKey::CryptoPullback);
        assert_eq!(style.color, "#ff0000");
        assert_eq!(style.label, "Crypto Pullback");
    }

    #[test]
    fn test_validate_rejects_tiny_sparkline() {
        let result = SiteConfig::from_toml_str(
            r#"
            [sparkline]
            width = 120.0
            height = 8.0
            "#,
        );
        assert!(matches!(result, Err(StrataError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = SiteConfig::load("does/not/exist/strata.toml").unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_shipped_config() {
        let config =
            SiteConfig::from_toml_str(include_str!("../../../config/strata.toml")).unwrap();
        assert_eq!(config.feeds.timeout_secs, None);
        assert_eq!(config.sparkline.height, 40.0);
        assert_eq!(
            config.chart.palette().style(StrategyKey::CryptoPullback).color,
            "#38bdf8"
        );
    }
}
