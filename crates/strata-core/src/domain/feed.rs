//! 시그널 피드 모델.
//!
//! `sp500_breakout_pro.json` 등 전략별 피드의 스키마입니다.
//!
//! ```json
//! { "date_mise_a_jour": "18/10/2026",
//!   "picks": { "AAPL": { "entry_price": 231.2, "stop_loss": 220.0, "score": 84.1 } } }
//! ```
//!
//! `picks` 객체의 키 순서(생성기가 점수순으로 정렬)는 그대로 보존됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::lenient::{lenient_f64, lenient_f64_vec, lenient_string, sanitize_non_finite};
use crate::error::StrataResult;

/// 하나의 시그널 종목.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalPick {
    /// 티커/심볼 (`picks` 객체의 키)
    #[serde(skip)]
    pub symbol: String,
    /// 표시 이름
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    /// 진입 가격
    #[serde(default, deserialize_with = "lenient_f64")]
    pub entry_price: Option<f64>,
    /// 기술적 손절 가격
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stop_loss: Option<f64>,
    /// 종합 점수 (0 ~ 100)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub score: Option<f64>,
    /// RSI(14)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rsi: Option<f64>,
    /// SMA200 대비 괴리율 (%)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub trend_pct: Option<f64>,
    /// 20일 평균 거래대금 (USD)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub dollar_vol_avg20: Option<f64>,
    /// 평균 대비 거래량 배수
    #[serde(default, deserialize_with = "lenient_f64")]
    pub vol_ratio: Option<f64>,
    /// 최근 종가 이력 (스파크라인용)
    #[serde(default, deserialize_with = "lenient_f64_vec")]
    pub history: Vec<f64>,
}

impl SignalPick {
    /// 이름이 없으면 심볼을 표시합니다.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.symbol)
    }
}

/// 전략별 시그널 피드.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalFeed {
    /// 생성기가 기록한 갱신일 (표시용 문자열)
    pub updated_at: Option<String>,
    /// 피드 순서대로 정렬된 종목
    pub picks: Vec<SignalPick>,
}

#[derive(Deserialize)]
struct RawSignalFeed {
    #[serde(default, deserialize_with = "lenient_string")]
    date_mise_a_jour: Option<String>,
    #[serde(default)]
    picks: Value,
}

impl SignalFeed {
    /// 피드 원문을 파싱합니다.
    ///
    /// 최상위가 객체가 아니면 에러를 반환하고, 개별 종목의 결함은
    /// 기본값으로 대체합니다.
    pub fn parse(text: &str) -> StrataResult<Self> {
        let raw: RawSignalFeed = serde_json::from_str(&sanitize_non_finite(text))?;

        let picks = match raw.picks {
            Value::Object(map) => map
                .into_iter()
                .map(|(symbol, value)| {
                    let mut pick = serde_json::from_value::<SignalPick>(value).unwrap_or_else(|e| {
                        warn!(symbol = %symbol, error = %e, "Malformed pick entry, using defaults");
                        SignalPick::default()
                    });
                    pick.symbol = symbol;
                    pick
                })
                .collect(),
            Value::Null => Vec::new(),
            other => {
                warn!(kind = ?value_kind(&other), "Unexpected picks payload, treating as empty");
                Vec::new()
            }
        };

        Ok(Self {
            updated_at: raw.date_mise_a_jour,
            picks,
        })
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_pick_order() {
        let text = r#"{
            "date_mise_a_jour": "18/10/2026",
            "picks": {
                "NVDA": {"score": 91.0},
                "AAPL": {"score": 85.0},
                "MSFT": {"score": 60.0}
            }
        }"#;
        let feed = SignalFeed::parse(text).unwrap();

        let symbols: Vec<&str> = feed.picks.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NVDA", "AAPL", "MSFT"]);
        assert_eq!(feed.updated_at.as_deref(), Some("18/10/2026"));
    }

    #[test]
    fn test_parse_tolerates_bad_fields() {
        let text = r#"{"picks": {
            "BTC": {"entry_price": NaN, "score": "high", "history": [1, 2, NaN, 3]},
            "ETH": 42
        }}"#;
        let feed = SignalFeed::parse(text).unwrap();

        assert_eq!(feed.len(), 2);
        let btc = &feed.picks[0];
        assert_eq!(btc.entry_price, None);
        assert_eq!(btc.score, None);
        assert_eq!(btc.history, vec![1.0, 2.0, 3.0]);

        let eth = &feed.picks[1];
        assert_eq!(eth.symbol, "ETH");
        assert_eq!(eth.score, None);
        assert!(feed.updated_at.is_none());
    }

    #[test]
    fn test_parse_missing_picks() {
        let feed = SignalFeed::parse(r#"{"date_mise_a_jour": "01/01/2026"}"#).unwrap();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(SignalFeed::parse("[1, 2]").is_err());
        assert!(SignalFeed::parse("not json").is_err());
    }

    #[test]
    fn test_display_name_falls_back_to_symbol() {
        let pick = SignalPick {
            symbol: "SOL".to_string(),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(pick.display_name(), "SOL");
    }
}
