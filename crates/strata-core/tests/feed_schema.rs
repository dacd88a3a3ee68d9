//! 실제 생성기 출력 형태의 피드 파싱 통합 테스트

use strata_core::{PerformanceSummary, SignalFeed, StrategyKey};

/// 크립토 생성기가 기록하는 형태 (들여쓰기 + NaN 포함)
const CRYPTO_BREAKOUT: &str = r#"{
    "date_mise_a_jour": "17/10/2026",
    "generated_at": "2026-10-17T06:00:00Z",
    "picks": {
        "SOL": {
            "name": "SOL",
            "entry_price": 182.4311,
            "stop_loss": 171.02,
            "score": 88.4,
            "rsi": 71.2,
            "trend_pct": 23.9,
            "dollar_vol_avg20": 1893221004.2,
            "vol_ratio": 2.41,
            "history": [170.1, 171.5, NaN, 176.0, 182.4]
        },
        "AVAX": {
            "name": "AVAX",
            "entry_price": 31.5,
            "stop_loss": 29.1,
            "score": 64.0,
            "rsi": NaN,
            "trend_pct": -3.2,
            "dollar_vol_avg20": 250000000
        }
    }
}"#;

#[test]
fn test_crypto_breakout_feed() {
    let feed = SignalFeed::parse(CRYPTO_BREAKOUT).unwrap();

    assert_eq!(feed.updated_at.as_deref(), Some("17/10/2026"));
    assert_eq!(feed.len(), 2);

    let sol = &feed.picks[0];
    assert_eq!(sol.symbol, "SOL");
    assert_eq!(sol.vol_ratio, Some(2.41));
    // NaN 원소는 이력에서 제외됨
    assert_eq!(sol.history.len(), 4);

    let avax = &feed.picks[1];
    assert_eq!(avax.rsi, None);
    assert_eq!(avax.vol_ratio, None);
    assert!(avax.history.is_empty());
    assert_eq!(avax.dollar_vol_avg20, Some(250_000_000.0));
}

#[test]
fn test_summary_without_trades() {
    // 거래 로그가 비어 있을 때 생성기가 기록하는 형태
    let text = r#"{
        "last_update": "2026-10-17",
        "sp500_phoenix": {},
        "sp500_pullback": {},
        "crypto_phoenix": {},
        "crypto_pullback": {}
    }"#;
    let summary = PerformanceSummary::parse(text).unwrap();

    for key in StrategyKey::ALL {
        assert!(!summary.stats_for(key).has_trades(), "{} should be empty", key);
    }
    assert!(summary.equity_curves.is_empty());
}
