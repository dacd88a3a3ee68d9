//! 시그널 사이트의 순수 계산 모듈.
//!
//! 이 크레이트는 페이지 상태를 갖지 않는 순수 함수만 제공합니다.
//! 각 페이지 렌더러는 이 함수들을 조합해서 사용합니다:
//! - 스파크라인 SVG 생성
//! - 숫자/문자열 포맷팅, 점수/RSI 구간 분류
//! - 전략별 자산 곡선의 날짜 정렬 및 차트 설정 생성
//!
//! # Re-exports
//!
//! - [`sparkline`]: `render_sparkline`
//! - [`format`]: 공통 포맷터
//! - [`portfolio`]: 자산 곡선 집계기와 차트 설정

pub mod format;
pub mod portfolio;
pub mod sparkline;

pub use format::{
    escape_html, format_fixed, format_grouped, format_price, tradingview_url, RsiZone, ScoreTier,
    TrendStyle, DASH, EN_DASH,
};
pub use portfolio::charts::{ChartDataset, LineChartConfig, LineChartData};
pub use portfolio::equity_curve::{aggregate_curves, union_dates, AlignedChartSeries, AlignedSeries};
pub use sparkline::{
    check_sparkline_size, render_sparkline, sparkline_points, SPARKLINE_PADDING_Y,
};
