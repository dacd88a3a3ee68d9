//! 대시보드 성과 카드.

use strata_analytics::{escape_html, format_fixed, EN_DASH};
use strata_core::{StrategyKey, StrategyStats};

/// 통계가 부족할 때의 안내
pub const NOTE_NOT_ENOUGH_HISTORY: &str =
    "Pas encore assez d’historique pour afficher des statistiques robustes.";

/// 마감 거래 기반 통계임을 알리는 안내
pub const NOTE_METHODOLOGY: &str = "Données issues de trades clôturés uniquement, en mode backtest trader (stop, breakeven, time-stop, slippage).";

/// 카드에 표시할 값.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfCardValues {
    pub nb_trades: String,
    pub avg_r: String,
    pub winrate: String,
    pub breakeven_rate: String,
    pub expectancy_r: String,
    pub note: &'static str,
}

impl PerfCardValues {
    pub fn from_stats(stats: &StrategyStats) -> Self {
        if !stats.has_trades() {
            return Self {
                nb_trades: "0".to_string(),
                avg_r: EN_DASH.to_string(),
                winrate: EN_DASH.to_string(),
                breakeven_rate: EN_DASH.to_string(),
                expectancy_r: EN_DASH.to_string(),
                note: NOTE_NOT_ENOUGH_HISTORY,
            };
        }

        Self {
            nb_trades: stats.nb_trades.unwrap_or(0).to_string(),
            avg_r: format_fixed(stats.avg_r, 3),
            winrate: format_fixed(stats.winrate, 1),
            breakeven_rate: format_fixed(stats.breakeven_rate, 1),
            expectancy_r: format_fixed(stats.expectancy_r, 3),
            note: NOTE_METHODOLOGY,
        }
    }
}

/// 전략 하나의 성과 카드.
pub fn perf_card(key: StrategyKey, label: &str, stats: &StrategyStats) -> String {
    let values = PerfCardValues::from_stats(stats);
    let id = key.dom_id();

    format!(
        r#"<article id="{id}-card" class="bg-slate-900/70 border border-slate-800 rounded-2xl p-5 flex flex-col gap-4">
  <h3 class="text-sm font-semibold text-slate-100">{label}</h3>
  <dl class="grid grid-cols-2 gap-3 text-xs">
    <div><dt class="text-slate-500">Trades</dt><dd id="{id}-nb" class="font-mono text-slate-100">{nb}</dd></div>
    <div><dt class="text-slate-500">R moyen</dt><dd id="{id}-avgR" class="font-mono text-slate-100">{avg_r}</dd></div>
    <div><dt class="text-slate-500">Winrate (%)</dt><dd id="{id}-win" class="font-mono text-slate-100">{win}</dd></div>
    <div><dt class="text-slate-500">Breakeven (%)</dt><dd id="{id}-be" class="font-mono text-slate-100">{be}</dd></div>
    <div><dt class="text-slate-500">Espérance (R)</dt><dd id="{id}-exp" class="font-mono text-slate-100">{exp}</dd></div>
  </dl>
  <p id="{id}-note" class="text-[11px] text-slate-500">{note}</p>
</article>
"#,
        id = id,
        label = escape_html(label),
        nb = values.nb_trades,
        avg_r = values.avg_r,
        win = values.winrate,
        be = values.breakeven_rate,
        exp = values.expectancy_r,
        note = escape_html(values.note),
    )
}
