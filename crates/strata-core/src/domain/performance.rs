//! 성과 요약 피드 모델.
//!
//! `performance_summary.json`은 전략별 마감 거래 통계와 자산 곡선을 담습니다.
//! 거래가 없는 전략은 `{}` 빈 객체로 기록될 수 있습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::lenient::{
    lenient_f64, lenient_opt_f64_vec, lenient_string_vec, lenient_u64, sanitize_non_finite,
};
use super::strategy::StrategyKey;
use crate::error::StrataResult;

/// 전략별 마감 거래 통계 (R 배수 기준).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyStats {
    /// 마감 거래 수
    #[serde(default, deserialize_with = "lenient_u64")]
    pub nb_trades: Option<u64>,
    /// 평균 R
    #[serde(default, rename = "avg_R", deserialize_with = "lenient_f64")]
    pub avg_r: Option<f64>,
    /// 승률 (%)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub winrate: Option<f64>,
    /// 본전 청산 비율 (%)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub breakeven_rate: Option<f64>,
    /// 기대값 (R)
    #[serde(default, rename = "expectancy_R", deserialize_with = "lenient_f64")]
    pub expectancy_r: Option<f64>,
    /// 평균 이익 (R)
    #[serde(default, rename = "avg_win_R", deserialize_with = "lenient_f64")]
    pub avg_win_r: Option<f64>,
    /// 평균 손실 절대값 (R)
    #[serde(default, rename = "avg_loss_R", deserialize_with = "lenient_f64")]
    pub avg_loss_r: Option<f64>,
}

impl StrategyStats {
    /// 통계를 표시할 만큼 마감 거래가 있는지 확인합니다.
    pub fn has_trades(&self) -> bool {
        self.nb_trades.unwrap_or(0) > 0
    }
}

/// 전략 하나의 자산 곡선 (날짜와 누적 수익률 %).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedEquityCurve {
    /// `YYYY-MM-DD` 형식 날짜
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub dates: Vec<String>,
    /// 날짜별 누적 수익률 (%)
    #[serde(default, deserialize_with = "lenient_opt_f64_vec")]
    pub equity_pct: Vec<Option<f64>>,
}

impl NamedEquityCurve {
    /// 유효한 값 배열로 곡선을 만듭니다.
    pub fn new(dates: Vec<String>, equity_pct: Vec<f64>) -> Self {
        Self {
            dates,
            equity_pct: equity_pct.into_iter().map(Some).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 인덱스 정렬된 (날짜, 값) 쌍.
    ///
    /// 두 배열 길이가 다르면 짧은 쪽에 맞춥니다.
    pub fn samples(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        if self.dates.len() != self.equity_pct.len() {
            warn!(
                dates = self.dates.len(),
                values = self.equity_pct.len(),
                "Equity curve arrays differ in length, truncating to shorter"
            );
        }
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.equity_pct.iter().copied())
    }
}

/// 성과 요약 피드.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceSummary {
    /// 마지막 갱신일
    pub last_update: Option<String>,
    /// 전략별 통계 (피드에 없는 전략은 빠짐)
    pub stats: HashMap<StrategyKey, StrategyStats>,
    /// 전략별 자산 곡선 (피드에 없는 전략은 빠짐)
    pub equity_curves: HashMap<StrategyKey, NamedEquityCurve>,
}

impl PerformanceSummary {
    /// 피드 원문을 파싱합니다.
    pub fn parse(text: &str) -> StrataResult<Self> {
        let root: Map<String, Value> = serde_json::from_str(&sanitize_non_finite(text))?;

        let last_update = root.get("last_update").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            _ => None,
        });

        let mut stats = HashMap::new();
        for key in StrategyKey::ALL {
            if let Some(value) = root.get(key.as_str()) {
                match serde_json::from_value::<StrategyStats>(value.clone()) {
                    Ok(s) => {
                        stats.insert(key, s);
                    }
                    Err(e) => warn!(strategy = %key, error = %e, "Malformed stats block, skipping"),
                }
            }
        }

        let mut equity_curves = HashMap::new();
        if let Some(Value::Object(curves)) = root.get("equity_curve") {
            for (name, value) in curves {
                let Ok(key) = name.parse::<StrategyKey>() else {
                    debug!(name = %name, "Ignoring equity curve for unknown strategy");
                    continue;
                };
                match serde_json::from_value::<NamedEquityCurve>(value.clone()) {
                    Ok(curve) => {
                        equity_curves.insert(key, curve);
                    }
                    Err(e) => warn!(strategy = %key, error = %e, "Malformed equity curve, skipping"),
                }
            }
        }

        Ok(Self {
            last_update,
            stats,
            equity_curves,
        })
    }

    /// 전략 통계 (없으면 빈 통계).
    pub fn stats_for(&self, key: StrategyKey) -> StrategyStats {
        self.stats.get(&key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "last_update": "2026-10-17",
        "sp500_phoenix": {"nb_trades": 12, "avg_R": 0.412, "winrate": 50.0,
                          "breakeven_rate": 16.7, "expectancy_R": 0.38},
        "sp500_pullback": {},
        "crypto_phoenix": {"nb_trades": 0, "avg_R": 0.0},
        "equity_curve": {
            "sp500_phoenix": {"dates": ["2026-10-01", "2026-10-02"], "equity_pct": [1.5, NaN]},
            "crypto_pullback": {"dates": [], "equity_pct": []},
            "forex_phoenix": {"dates": ["2026-10-01"], "equity_pct": [3.0]}
        }
    }"#;

    #[test]
    fn test_parse_stats() {
        let summary = PerformanceSummary::parse(SAMPLE).unwrap();
        assert_eq!(summary.last_update.as_deref(), Some("2026-10-17"));

        let phoenix = summary.stats_for(StrategyKey::Sp500Phoenix);
        assert_eq!(phoenix.nb_trades, Some(12));
        assert_eq!(phoenix.avg_r, Some(0.412));
        assert!(phoenix.has_trades());

        assert!(!summary.stats_for(StrategyKey::Sp500Pullback).has_trades());
        assert!(!summary.stats_for(StrategyKey::CryptoPhoenix).has_trades());
        // 피드에 없는 전략
        assert!(!summary.stats.contains_key(&StrategyKey::CryptoPullback));
    }

    #[test]
    fn test_parse_equity_curves() {
        let summary = PerformanceSummary::parse(SAMPLE).unwrap();

        assert_eq!(summary.equity_curves.len(), 2);
        let curve = &summary.equity_curves[&StrategyKey::Sp500Phoenix];
        assert_eq!(curve.equity_pct, vec![Some(1.5), None]);
        assert!(summary.equity_curves[&StrategyKey::CryptoPullback].is_empty());
    }

    #[test]
    fn test_samples_truncate_to_shorter() {
        let curve = NamedEquityCurve {
            dates: vec!["2026-01-01".into(), "2026-01-02".into()],
            equity_pct: vec![Some(1.0)],
        };
        let samples: Vec<_> = curve.samples().collect();
        assert_eq!(samples, vec![("2026-01-01", Some(1.0))]);
    }

    #[test]
    fn test_parse_empty_object() {
        let summary = PerformanceSummary::parse("{}").unwrap();
        assert!(summary.last_update.is_none());
        assert!(summary.stats.is_empty());
        assert!(summary.equity_curves.is_empty());
    }
}
