//! 피드 상태 점검.

use anyhow::{Context, Result};
use tracing::info;

use strata_core::{FeedKind, SiteConfig};
use strata_site::{feed_source_from_config, FeedLoader, SiteData};

/// 피드 하나의 점검 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedStatus {
    pub kind: FeedKind,
    pub file: String,
    /// 성공 시 항목 수 (시그널 수 또는 성과 전략 수), 실패 시 에러 메시지
    pub outcome: Result<usize, String>,
}

/// 로드 결과를 피드별 상태로 정리합니다. 순서는 `FeedKind::all()`.
pub fn feed_statuses(data: &SiteData, loader: &FeedLoader) -> Vec<FeedStatus> {
    FeedKind::all()
        .into_iter()
        .map(|kind| {
            let outcome = match kind {
                FeedKind::Signals(key) => match data.signals_for(key) {
                    Some(Ok(feed)) => Ok(feed.len()),
                    Some(Err(e)) => Err(e.to_string()),
                    None => Err("not loaded".to_string()),
                },
                FeedKind::Performance => match &data.performance {
                    Ok(summary) => Ok(summary.stats.len()),
                    Err(e) => Err(e.to_string()),
                },
            };
            FeedStatus {
                kind,
                file: loader.files().file_name(kind).to_string(),
                outcome,
            }
        })
        .collect()
}

/// 모든 피드를 읽고 상태를 출력합니다.
///
/// 하나라도 실패하면 에러를 반환합니다.
pub async fn run_check(site: &SiteConfig) -> Result<Vec<FeedStatus>> {
    let source = feed_source_from_config(&site.feeds).context("Invalid feed source")?;
    let loader = FeedLoader::new(source, site.feeds.files.clone());

    println!("\n🔍 피드 점검 중: {}", loader.source().location());
    let data = loader.load_all().await;
    let statuses = feed_statuses(&data, &loader);

    println!("{}", "=".repeat(60));
    for status in &statuses {
        match &status.outcome {
            Ok(count) => println!("✅ {:<16} {:<28} {}", status.kind.name(), status.file, count),
            Err(e) => println!("❌ {:<16} {:<28} {}", status.kind.name(), status.file, e),
        }
    }
    println!("{}", "=".repeat(60));

    let failed = statuses.iter().filter(|s| s.outcome.is_err()).count();
    info!(feeds = statuses.len(), failed, "Feed check finished");
    if failed > 0 {
        anyhow::bail!("{} of {} feeds failed", failed, statuses.len());
    }
    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use strata_core::{FeedFiles, PerformanceSummary, SignalFeed, StrataError, StrategyKey};
    use strata_site::FsFeedSource;

    #[test]
    fn test_feed_statuses() {
        let loader = FeedLoader::new(Arc::new(FsFeedSource::new("data")), FeedFiles::default());
        let mut signals = BTreeMap::new();
        signals.insert(
            StrategyKey::Sp500Phoenix,
            SignalFeed::parse(r#"{"picks":{"AAPL":{},"MSFT":{}}}"#),
        );
        signals.insert(
            StrategyKey::CryptoPullback,
            Err(StrataError::HttpStatus {
                url: "https://x/crypto_pullback_pro.json".into(),
                status: 404,
            }),
        );
        let data = SiteData {
            signals,
            performance: PerformanceSummary::parse(r#"{"sp500_phoenix":{"nb_trades":3}}"#),
        };

        let statuses = feed_statuses(&data, &loader);

        assert_eq!(statuses.len(), 5);
        assert_eq!(statuses[0].file, "sp500_breakout_pro.json");
        assert_eq!(statuses[0].outcome, Ok(2));
        assert_eq!(statuses[1].outcome, Err("not loaded".to_string()));
        assert!(statuses[3].outcome.as_ref().unwrap_err().contains("404"));
        assert_eq!(statuses[4].kind, FeedKind::Performance);
        assert_eq!(statuses[4].outcome, Ok(1));
    }
}
