//! 성과 요약 출력.

use anyhow::{Context, Result};

use strata_analytics::{aggregate_curves, format_fixed, AlignedChartSeries, DASH};
use strata_core::{PerformanceSummary, SeriesPalette, SiteConfig, StrategyKey};
use strata_site::{feed_source_from_config, FeedLoader};

/// 전략별 통계 표를 만듭니다.
pub fn stats_table(summary: &PerformanceSummary, palette: &SeriesPalette) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<18} {:>6} {:>8} {:>8} {:>8} {:>8}",
        "전략", "거래", "R 평균", "승률%", "BE%", "기대값R"
    )];

    for key in StrategyKey::ALL {
        let stats = summary.stats_for(key);
        let trades = stats
            .nb_trades
            .map(|n| n.to_string())
            .unwrap_or_else(|| DASH.to_string());
        lines.push(format!(
            "{:<18} {:>6} {:>8} {:>8} {:>8} {:>8}",
            palette.style(key).label,
            trades,
            format_fixed(stats.avg_r, 3),
            format_fixed(stats.winrate, 1),
            format_fixed(stats.breakeven_rate, 1),
            format_fixed(stats.expectancy_r, 3),
        ));
    }
    lines
}

/// 정렬된 자산 곡선의 형태를 설명합니다.
pub fn curve_shape(aligned: Option<&AlignedChartSeries>) -> Vec<String> {
    let Some(aligned) = aligned else {
        return vec!["자산 곡선 데이터 없음".to_string()];
    };

    let mut lines = Vec::with_capacity(aligned.series.len() + 1);
    match aligned.date_range() {
        Some((first, last)) => lines.push(format!(
            "날짜 {}개 ({} ~ {})",
            aligned.len(),
            first,
            last
        )),
        None => lines.push(format!("날짜 {}개", aligned.len())),
    }
    for series in &aligned.series {
        lines.push(format!(
            "  {:<18} 값 {}/{} 마지막 {}",
            series.label,
            series.present_count(),
            aligned.len(),
            format_fixed(series.last_value(), 2),
        ));
    }
    lines
}

/// 성과 요약 피드를 읽고 출력합니다.
pub async fn run_summary(site: &SiteConfig) -> Result<()> {
    let source = feed_source_from_config(&site.feeds).context("Invalid feed source")?;
    let loader = FeedLoader::new(source, site.feeds.files.clone());

    let summary = loader
        .load_performance()
        .await
        .context("Failed to load performance summary")?;
    let palette = site.chart.palette();

    println!(
        "\n📊 성과 요약 (갱신: {})",
        summary
            .last_update
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DASH)
    );
    println!("{}", "=".repeat(64));
    for line in stats_table(&summary, &palette) {
        println!("{}", line);
    }
    println!("{}", "=".repeat(64));

    let aligned = aggregate_curves(&summary.equity_curves, &palette);
    println!("\n📈 자산 곡선");
    for line in curve_shape(aligned.as_ref()) {
        println!("{}", line);
    }
    Ok(())
}
