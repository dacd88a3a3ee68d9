//! 전략 키와 피드 종류.
//!
//! 사이트는 두 개의 유니버스(S&P 500, 크립토)와 두 개의 변형
//! (Phoenix = 브레이크아웃, Pullback)을 조합한 네 개의 전략을 다룹니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 종목 유니버스.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Universe {
    /// S&P 500 구성 종목
    Sp500,
    /// 암호화폐 (USDT 페어)
    Crypto,
}

impl Universe {
    /// 직렬화 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Universe::Sp500 => "sp500",
            Universe::Crypto => "crypto",
        }
    }
}

/// 시그널 변형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 거래량 동반 브레이크아웃
    Phoenix,
    /// 상승 추세 내 눌림목
    Pullback,
}

impl Variant {
    /// 직렬화 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Phoenix => "phoenix",
            Variant::Pullback => "pullback",
        }
    }

    /// 카드 배지에 표시되는 이름
    pub fn badge_label(&self) -> &'static str {
        match self {
            Variant::Phoenix => "Breakout",
            Variant::Pullback => "Pullback",
        }
    }
}

/// 전략 키.
///
/// 성과 요약 피드의 통계 객체와 `equity_curve` 객체가 이 키로 색인됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKey {
    Sp500Phoenix,
    Sp500Pullback,
    CryptoPhoenix,
    CryptoPullback,
}

impl StrategyKey {
    /// 정규 순서. 차트 시리즈와 성과 카드는 항상 이 순서로 출력됩니다.
    pub const ALL: [StrategyKey; 4] = [
        StrategyKey::Sp500Phoenix,
        StrategyKey::Sp500Pullback,
        StrategyKey::CryptoPhoenix,
        StrategyKey::CryptoPullback,
    ];

    /// 유니버스와 변형으로 키를 만듭니다.
    pub fn new(universe: Universe, variant: Variant) -> Self {
        match (universe, variant) {
            (Universe::Sp500, Variant::Phoenix) => StrategyKey::Sp500Phoenix,
            (Universe::Sp500, Variant::Pullback) => StrategyKey::Sp500Pullback,
            (Universe::Crypto, Variant::Phoenix) => StrategyKey::CryptoPhoenix,
            (Universe::Crypto, Variant::Pullback) => StrategyKey::CryptoPullback,
        }
    }

    /// 피드에서 사용하는 키 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKey::Sp500Phoenix => "sp500_phoenix",
            StrategyKey::Sp500Pullback => "sp500_pullback",
            StrategyKey::CryptoPhoenix => "crypto_phoenix",
            StrategyKey::CryptoPullback => "crypto_pullback",
        }
    }

    /// HTML 요소 id 접두사 (예: `sp500-phoenix`)
    pub fn dom_id(&self) -> String {
        self.as_str().replace('_', "-")
    }

    pub fn universe(&self) -> Universe {
        match self {
            StrategyKey::Sp500Phoenix | StrategyKey::Sp500Pullback => Universe::Sp500,
            StrategyKey::CryptoPhoenix | StrategyKey::CryptoPullback => Universe::Crypto,
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            StrategyKey::Sp500Phoenix | StrategyKey::CryptoPhoenix => Variant::Phoenix,
            StrategyKey::Sp500Pullback | StrategyKey::CryptoPullback => Variant::Pullback,
        }
    }

    /// 기본 표시 이름
    pub fn default_label(&self) -> &'static str {
        match self {
            StrategyKey::Sp500Phoenix => "S&P 500 Phoenix",
            StrategyKey::Sp500Pullback => "S&P 500 Pullback",
            StrategyKey::CryptoPhoenix => "Crypto Phoenix",
            StrategyKey::CryptoPullback => "Crypto Pullback",
        }
    }

    /// 기본 차트 색상
    pub fn default_color(&self) -> &'static str {
        match self {
            StrategyKey::Sp500Phoenix => "#fbbf24",
            StrategyKey::Sp500Pullback => "#10b981",
            StrategyKey::CryptoPhoenix => "#a855f7",
            StrategyKey::CryptoPullback => "#38bdf8",
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown strategy key: {}", s))
    }
}

/// 사이트가 읽는 피드 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// 전략별 시그널 피드
    Signals(StrategyKey),
    /// 성과 요약 피드
    Performance,
}

impl FeedKind {
    /// 모든 피드 (시그널 4개 + 성과 요약)
    pub fn all() -> Vec<FeedKind> {
        StrategyKey::ALL
            .into_iter()
            .map(FeedKind::Signals)
            .chain(std::iter::once(FeedKind::Performance))
            .collect()
    }

    /// 로그용 이름
    pub fn name(&self) -> &'static str {
        match self {
            FeedKind::Signals(key) => key.as_str(),
            FeedKind::Performance => "performance",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_key_roundtrip_str() {
        for key in StrategyKey::ALL {
            assert_eq!(key.as_str().parse::<StrategyKey>().unwrap(), key);
        }
        assert!("sp500_breakout".parse::<StrategyKey>().is_err());
    }

    #[test]
    fn test_strategy_key_parts() {
        let key = StrategyKey::new(Universe::Crypto, Variant::Pullback);
        assert_eq!(key, StrategyKey::CryptoPullback);
        assert_eq!(key.universe(), Universe::Crypto);
        assert_eq!(key.variant(), Variant::Pullback);
        assert_eq!(key.dom_id(), "crypto-pullback");
    }

    #[test]
    fn test_serde_matches_feed_keys() {
        let json = serde_json::to_string(&StrategyKey::Sp500Phoenix).unwrap();
        assert_eq!(json, "\"sp500_phoenix\"");
    }

    #[test]
    fn test_feed_kind_all() {
        let all = FeedKind::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], FeedKind::Signals(StrategyKey::Sp500Phoenix));
        assert_eq!(all[4], FeedKind::Performance);
    }
}
