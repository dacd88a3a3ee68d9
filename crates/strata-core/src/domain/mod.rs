//! 피드 도메인 모델.
//!
//! - [`strategy`]: 전략 키, 유니버스, 변형, 피드 종류
//! - [`feed`]: 전략별 시그널 피드
//! - [`performance`]: 성과 요약 피드와 자산 곡선
//! - [`lenient`]: 결함 있는 피드를 위한 관대한 역직렬화
//! - [`palette`]: 차트 시리즈 레이블/색상

pub mod feed;
pub mod lenient;
pub mod palette;
pub mod performance;
pub mod strategy;

pub use feed::{SignalFeed, SignalPick};
pub use lenient::sanitize_non_finite;
pub use palette::{SeriesPalette, SeriesStyle};
pub use performance::{NamedEquityCurve, PerformanceSummary, StrategyStats};
pub use strategy::{FeedKind, StrategyKey, Universe, Variant};
