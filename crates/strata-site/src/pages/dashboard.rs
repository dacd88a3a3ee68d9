//! 대시보드 페이지.
//!
//! 전략별 성과 카드, 오늘의 시그널 개수, 자산 곡선 차트를 보여줍니다.

use std::collections::BTreeMap;
use tracing::{info, warn};

use strata_analytics::{aggregate_curves, escape_html, LineChartConfig, DASH, EN_DASH};
use strata_core::{PerformanceSummary, SignalFeed, StrataResult, StrategyKey};

use super::{RenderContext, LOAD_ERROR_MESSAGE};
use crate::chart::ChartSlot;
use crate::components::{footer, navbar, perf_card, SitePage};
use crate::template::PageTemplate;

/// 성과 요약을 읽지 못했을 때의 배너 문구
pub const PERF_ERROR_MESSAGE: &str =
    "Impossible de charger les statistiques de performance pour le moment.";

/// 자산 곡선 데이터가 없을 때의 문구
pub const EQUITY_EMPTY_MESSAGE: &str = "Pas encore de courbe d'equity disponible.";

/// 전략별 오늘의 시그널 개수 카드.
fn overview_cards(
    signals: &BTreeMap<StrategyKey, StrataResult<SignalFeed>>,
    ctx: &RenderContext<'_>,
) -> String {
    StrategyKey::ALL
        .iter()
        .map(|key| {
            let count = match signals.get(key) {
                Some(Ok(feed)) => feed.len().to_string(),
                _ => EN_DASH.to_string(),
            };
            let style = ctx.palette.style(*key);
            format!(
                r#"<div id="overview-{id}" class="rounded-2xl border border-slate-800 p-4"><div class="text-[11px] uppercase tracking-wide text-slate-500">{label}</div><div class="text-2xl font-semibold" style="color: {color}">{count}</div></div>"#,
                id = key.dom_id(),
                label = escape_html(&style.label),
                color = escape_html(&style.color),
                count = count,
            )
        })
        .collect()
}

fn placeholder(text: &str, class: &str) -> String {
    format!(
        r#"<p class="h-full flex items-center justify-center text-xs {}">{}</p>"#,
        class,
        escape_html(text)
    )
}

/// 자산 곡선 차트 영역. 차트 슬롯의 인스턴스를 교체합니다.
fn equity_chart(
    performance: &StrataResult<PerformanceSummary>,
    ctx: &RenderContext<'_>,
    chart: &mut ChartSlot,
) -> StrataResult<String> {
    let summary = match performance {
        Ok(summary) => summary,
        Err(_) => {
            chart.clear();
            return Ok(placeholder(LOAD_ERROR_MESSAGE, "text-rose-400"));
        }
    };

    match aggregate_curves(&summary.equity_curves, ctx.palette) {
        Some(aligned) => {
            info!(
                dates = aligned.len(),
                series = aligned.series.len(),
                "Rendering equity chart"
            );
            let config = LineChartConfig::from_aligned(&aligned);
            Ok(chart.replace(&config)?.markup().to_string())
        }
        None => {
            chart.clear();
            Ok(placeholder(EQUITY_EMPTY_MESSAGE, "text-slate-500"))
        }
    }
}

/// 대시보드 페이지를 렌더링합니다.
pub fn render_dashboard_page(
    template: &PageTemplate,
    signals: &BTreeMap<StrategyKey, StrataResult<SignalFeed>>,
    performance: &StrataResult<PerformanceSummary>,
    ctx: &RenderContext<'_>,
    chart: &mut ChartSlot,
) -> StrataResult<String> {
    let mut page = template.page();
    page.fill("navbar", navbar(ctx.templates, SitePage::Dashboard))
        .fill("footer", footer(ctx.templates, &ctx.generated_at))
        .fill("overview", overview_cards(signals, ctx));

    match performance {
        Ok(summary) => {
            let last_update = summary
                .last_update
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DASH);
            let cards: String = StrategyKey::ALL
                .iter()
                .map(|key| perf_card(*key, &ctx.palette.style(*key).label, &summary.stats_for(*key)))
                .collect();

            page.fill_text("perf_last_update", last_update)
                .fill("perf_cards", cards);
        }
        Err(e) => {
            warn!(error = %e, "Performance summary unavailable, showing error banner");
            page.fill_text("perf_last_update", DASH).fill(
                "perf_status",
                format!(
                    r#"<div id="perf-error" class="mb-4 rounded-xl border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-xs text-rose-300">{}</div>"#,
                    escape_html(PERF_ERROR_MESSAGE)
                ),
            );
        }
    }

    page.fill("equity_chart", equity_chart(performance, ctx, chart)?);
    Ok(page.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{SeriesPalette, SparklineConfig, StrataError};

    use crate::template::TemplateSet;

    const SUMMARY: &str = r#"{
        "last_update": "2026-10-17",
        "sp500_phoenix": {"nb_trades": 4, "avg_R": 0.5, "winrate": 50.0, "breakeven_rate": 25.0, "expectancy_R": 0.45},
        "equity_curve": {
            "sp500_phoenix": {"dates": ["2026-10-01", "2026-10-03"], "equity_pct": [1.0, 2.0]},
            "crypto_pullback": {"dates": ["2026-10-02"], "equity_pct": [-0.5]}
        }
    }"#;

    fn render(
        performance: StrataResult<PerformanceSummary>,
        chart: &mut ChartSlot,
    ) -> String {
        let templates = TemplateSet::builtin().unwrap();
        let palette = SeriesPalette::new();
        let ctx = RenderContext {
            templates: &templates,
            sparkline: SparklineConfig::default(),
            palette: &palette,
            generated_at: "2026-10-18".to_string(),
        };
        let mut signals = BTreeMap::new();
        signals.insert(
            StrategyKey::Sp500Phoenix,
            SignalFeed::parse(r#"{"picks":{"A":{},"B":{},"C":{}}}"#),
        );

        render_dashboard_page(&templates.dashboard, &signals, &performance, &ctx, chart).unwrap()
    }

    #[test]
    fn test_dashboard_with_summary() {
        let mut chart = ChartSlot::new("equity-chart");
        let html = render(PerformanceSummary::parse(SUMMARY), &mut chart);

        assert!(html.contains(r#"<span id="perf-last-update">2026-10-17</span>"#));
        assert!(html.contains(r#"<dd id="sp500-phoenix-avgR" class="font-mono text-slate-100">0.500</dd>"#));
        assert!(html.contains(r#"<dd id="crypto-phoenix-nb" class="font-mono text-slate-100">0</dd>"#));
        assert!(html.contains(r#"<canvas id="equity-chart-canvas""#));
        assert!(html.contains(r#""labels":["2026-10-01","2026-10-02","2026-10-03"]"#));
        assert!(html.contains(r#""data":[1.0,null,2.0]"#));
        assert!(html.contains(r#"nav-link active">Dashboard"#));
        assert_eq!(chart.live_count(), 1);
    }

    #[test]
    fn test_overview_counts() {
        let mut chart = ChartSlot::new("equity-chart");
        let html = render(PerformanceSummary::parse("{}"), &mut chart);

        assert!(html.contains(r#"style="color: #fbbf24">3</div>"#));
        assert!(html.contains(r#"style="color: #38bdf8">–</div>"#));
        assert!(html.contains(EQUITY_EMPTY_MESSAGE.replace('\'', "&#39;").as_str()));
        assert_eq!(chart.live_count(), 0);
    }

    #[test]
    fn test_dashboard_summary_error() {
        let mut chart = ChartSlot::new("equity-chart");
        render(PerformanceSummary::parse(SUMMARY), &mut chart);
        assert_eq!(chart.live_count(), 1);

        let html = render(
            Err(StrataError::Network("connection refused".into())),
            &mut chart,
        );

        assert!(html.contains(r#"id="perf-error""#));
        assert!(html.contains(r#"<span id="perf-last-update">-</span>"#));
        assert!(!html.contains("sp500-phoenix-card"));
        // 이전 차트는 해제됨
        assert_eq!(chart.live_count(), 0);
        assert_eq!(chart.mounted_count(), 1);
    }
}
