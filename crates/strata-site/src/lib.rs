//! 정적 시그널 사이트 생성.
//!
//! 이 crate는 다음을 제공합니다:
//! - HTTP/로컬 파일 피드 Provider
//! - 피드 동시 로딩 (피드별 실패 격리)
//! - 슬롯 기반 페이지 템플릿과 내장 템플릿
//! - 시그널 페이지, 대시보드 렌더러와 차트 슬롯 수명 관리

pub mod chart;
pub mod components;
pub mod loader;
pub mod pages;
pub mod provider;
pub mod renderer;
pub mod template;

pub use chart::{ChartHandle, ChartSlot};
pub use loader::{FeedLoader, SiteData};
pub use renderer::{BuildReport, SiteRenderer};
pub use template::{Page, PageTemplate, TemplateSet};

// Provider 재내보내기
pub use provider::{
    feed_source_from, feed_source_from_config, FeedSource, FsFeedSource, HttpFeedSource,
};
