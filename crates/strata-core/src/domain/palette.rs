//! 차트 시리즈 표시 메타데이터.
//!
//! 레이블과 색상은 계산 결과가 아니라 표시 정보이므로 집계기에
//! 하드코딩하지 않고 호출자(설정)가 팔레트로 전달합니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::strategy::StrategyKey;

/// 시리즈 하나의 표시 스타일.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

impl SeriesStyle {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    /// 전략 키의 기본 스타일
    pub fn default_for(key: StrategyKey) -> Self {
        Self::new(key.default_label(), key.default_color())
    }
}

/// 전략별 시리즈 팔레트.
///
/// 재정의되지 않은 전략은 [`StrategyKey::default_label`] 과
/// [`StrategyKey::default_color`] 를 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesPalette {
    overrides: BTreeMap<StrategyKey, SeriesStyle>,
}

impl SeriesPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// 전략 하나의 스타일을 재정의합니다.
    pub fn with_style(mut self, key: StrategyKey, style: SeriesStyle) -> Self {
        self.overrides.insert(key, style);
        self
    }

    pub fn style(&self, key: StrategyKey) -> SeriesStyle {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| SeriesStyle::default_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_fallback() {
        let palette = SeriesPalette::new().with_style(
            StrategyKey::CryptoPullback,
            SeriesStyle::new("Crypto PB", "#ffffff"),
        );

        assert_eq!(palette.style(StrategyKey::CryptoPullback).color, "#ffffff");
        assert_eq!(
            palette.style(StrategyKey::Sp500Phoenix),
            SeriesStyle::default_for(StrategyKey::Sp500Phoenix)
        );
    }
}
