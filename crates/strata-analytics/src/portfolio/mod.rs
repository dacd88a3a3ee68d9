//! 전략 성과 차트 모듈
//!
//! 전략별 자산 곡선을 하나의 날짜 축으로 정렬하고, 차트 라이브러리에
//! 넘길 설정을 만듭니다.
//!
//! # 모듈 구성
//!
//! - [`equity_curve`]: 날짜 합집합 정렬 및 시리즈 재샘플링
//! - [`charts`]: Chart.js 라인 차트 설정
//!
//! # 사용 예시
//!
//! ```rust
//! use std::collections::HashMap;
//! use strata_analytics::portfolio::{aggregate_curves, LineChartConfig};
//! use strata_core::{NamedEquityCurve, SeriesPalette, StrategyKey};
//!
//! let mut curves = HashMap::new();
//! curves.insert(
//!     StrategyKey::Sp500Phoenix,
//!     NamedEquityCurve::new(vec!["2024-01-01".into()], vec![1.0]),
//! );
//!
//! let aligned = aggregate_curves(&curves, &SeriesPalette::new()).expect("has data");
//! let config = LineChartConfig::from_aligned(&aligned);
//! assert_eq!(config.data.labels, vec!["2024-01-01"]);
//! ```

pub mod charts;
pub mod equity_curve;

pub use charts::*;
pub use equity_curve::*;
