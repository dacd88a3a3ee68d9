//! 시그널 페이지 (S&P 500, 크립토).

use std::collections::BTreeMap;

use strata_analytics::{DASH, EN_DASH};
use strata_core::{SignalFeed, StrataResult, StrategyKey, Universe, Variant};

use super::{RenderContext, LOAD_ERROR_MESSAGE};
use crate::components::{
    footer, message_card, message_row, navbar, signal_card, signal_row, SignalStyle, SitePage,
    Tone,
};
use crate::template::PageTemplate;

/// 결과가 비었을 때의 문구
pub fn empty_message(key: StrategyKey) -> &'static str {
    match key {
        StrategyKey::Sp500Phoenix => "Aucun breakout détecté aujourd'hui.",
        StrategyKey::Sp500Pullback => "Aucun pullback haussier détecté aujourd'hui.",
        StrategyKey::CryptoPhoenix => "Aucune opportunité haute qualité détectée aujourd'hui.",
        StrategyKey::CryptoPullback => "Aucune consolidation haussière détectée aujourd'hui.",
    }
}

/// 전략 섹션 하나의 렌더링 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSection {
    /// 갱신일 표시
    pub date: String,
    /// 히어로 카운터
    pub hero_count: String,
    /// 표 본문 (`<tr>`들)
    pub table: String,
    /// 모바일 카드 목록
    pub cards: String,
}

/// 전략 섹션을 렌더링합니다.
///
/// 피드를 읽지 못했으면 에러 행, 비어 있으면 안내 행을 넣습니다.
pub fn render_section(
    key: StrategyKey,
    feed: Option<&StrataResult<SignalFeed>>,
    ctx: &RenderContext<'_>,
    with_cards: bool,
) -> SignalSection {
    let style = SignalStyle::for_universe(key.universe());
    let variant = key.variant();

    let feed = match feed {
        Some(Ok(feed)) => feed,
        _ => {
            return SignalSection {
                date: DASH.to_string(),
                hero_count: EN_DASH.to_string(),
                table: message_row(LOAD_ERROR_MESSAGE, Tone::Error),
                cards: if with_cards {
                    message_card(LOAD_ERROR_MESSAGE, Tone::Error)
                } else {
                    String::new()
                },
            };
        }
    };

    let date = feed
        .updated_at
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DASH)
        .to_string();

    if feed.is_empty() {
        let message = empty_message(key);
        return SignalSection {
            date,
            hero_count: "0".to_string(),
            table: message_row(message, Tone::Muted),
            cards: if with_cards {
                message_card(message, Tone::Muted)
            } else {
                String::new()
            },
        };
    }

    let table = feed
        .picks
        .iter()
        .map(|pick| signal_row(pick, variant, &style, &ctx.sparkline))
        .collect();
    let cards = if with_cards {
        feed.picks
            .iter()
            .map(|pick| signal_card(pick, variant, &style, &ctx.sparkline))
            .collect()
    } else {
        String::new()
    };

    SignalSection {
        date,
        hero_count: feed.len().to_string(),
        table,
        cards,
    }
}

/// 유니버스 하나의 시그널 페이지를 렌더링합니다.
pub fn render_signal_page(
    template: &PageTemplate,
    universe: Universe,
    signals: &BTreeMap<StrategyKey, StrataResult<SignalFeed>>,
    ctx: &RenderContext<'_>,
) -> String {
    let site_page = match universe {
        Universe::Sp500 => SitePage::Sp500,
        Universe::Crypto => SitePage::Crypto,
    };

    let mut page = template.page();
    page.fill("navbar", navbar(ctx.templates, site_page))
        .fill("footer", footer(ctx.templates, &ctx.generated_at));

    for variant in [Variant::Phoenix, Variant::Pullback] {
        let key = StrategyKey::new(universe, variant);
        let slot = |name: &str| format!("{}_{}", name, variant.as_str());
        let with_cards = template.has_slot(&slot("cards"));

        let section = render_section(key, signals.get(&key), ctx, with_cards);
        page.fill_text(&slot("date"), &section.date)
            .fill_text(&format!("hero_{}_count", variant.as_str()), &section.hero_count)
            .fill(&slot("table"), section.table)
            .fill(&slot("cards"), section.cards);
    }

    page.render()
}
