//! 피드 로더.
//!
//! 한 번의 빌드에 필요한 피드를 모두 동시에 요청하고, 각 결과를 독립적으로
//! 처리합니다. 한 피드의 실패나 지연이 다른 섹션을 막지 않습니다.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info, Instrument};

use strata_core::{
    feed_span, FeedFiles, FeedKind, PerformanceSummary, SignalFeed, StrataError, StrataResult,
    StrategyKey,
};

use crate::provider::FeedSource;

/// 빌드 한 번에 읽은 모든 피드.
///
/// 각 항목은 독립적인 결과이며, 실패한 피드는 해당 섹션만 에러로 표시됩니다.
#[derive(Debug)]
pub struct SiteData {
    /// 전략별 시그널 피드
    pub signals: BTreeMap<StrategyKey, StrataResult<SignalFeed>>,
    /// 성과 요약 피드
    pub performance: StrataResult<PerformanceSummary>,
}

impl SiteData {
    /// 전략의 시그널 피드 결과
    pub fn signals_for(&self, key: StrategyKey) -> Option<&StrataResult<SignalFeed>> {
        self.signals.get(&key)
    }

    /// 실패한 피드 이름들
    pub fn failed_feeds(&self) -> Vec<FeedKind> {
        let mut failed: Vec<FeedKind> = self
            .signals
            .iter()
            .filter(|(_, result)| result.is_err())
            .map(|(key, _)| FeedKind::Signals(*key))
            .collect();
        if self.performance.is_err() {
            failed.push(FeedKind::Performance);
        }
        failed
    }
}

/// 피드 로더.
#[derive(Clone)]
pub struct FeedLoader {
    source: Arc<dyn FeedSource>,
    files: FeedFiles,
}

impl FeedLoader {
    pub fn new(source: Arc<dyn FeedSource>, files: FeedFiles) -> Self {
        Self { source, files }
    }

    pub fn source(&self) -> &dyn FeedSource {
        self.source.as_ref()
    }

    pub fn files(&self) -> &FeedFiles {
        &self.files
    }

    /// 전략 하나의 시그널 피드를 읽습니다.
    pub async fn load_signals(&self, key: StrategyKey) -> StrataResult<SignalFeed> {
        let kind = FeedKind::Signals(key);
        let file = self.files.file_name(kind);

        let result = async {
            let text = self.source.fetch(file).await?;
            let feed = SignalFeed::parse(&text)?;
            debug!(picks = feed.len(), "Signal feed loaded");
            Ok::<_, StrataError>(feed)
        }
        .instrument(feed_span!("load_feed", kind, file))
        .await;

        log_failure(kind, file, &result);
        result
    }

    /// 성과 요약 피드를 읽습니다.
    pub async fn load_performance(&self) -> StrataResult<PerformanceSummary> {
        let kind = FeedKind::Performance;
        let file = self.files.file_name(kind);

        let result = async {
            let text = self.source.fetch(file).await?;
            let summary = PerformanceSummary::parse(&text)?;
            debug!(
                strategies = summary.stats.len(),
                curves = summary.equity_curves.len(),
                "Performance summary loaded"
            );
            Ok::<_, StrataError>(summary)
        }
        .instrument(feed_span!("load_feed", kind, file))
        .await;

        log_failure(kind, file, &result);
        result
    }

    /// 여러 전략의 시그널 피드를 동시에 읽습니다.
    pub async fn load_signal_set(
        &self,
        keys: &[StrategyKey],
    ) -> BTreeMap<StrategyKey, StrataResult<SignalFeed>> {
        let futures = keys
            .iter()
            .map(|&key| async move { (key, self.load_signals(key).await) });

        join_all(futures).await.into_iter().collect()
    }

    /// 사이트 전체 피드를 동시에 읽습니다.
    pub async fn load_all(&self) -> SiteData {
        let (signals, performance) = tokio::join!(
            self.load_signal_set(&StrategyKey::ALL),
            self.load_performance(),
        );

        let data = SiteData {
            signals,
            performance,
        };
        info!(
            source = %self.source.location(),
            failed = data.failed_feeds().len(),
            "Feeds loaded"
        );
        data
    }
}

fn log_failure<T>(kind: FeedKind, file: &str, result: &StrataResult<T>) {
    if let Err(e) = result {
        error!(feed = %kind, file = file, error = %e, "Feed load failed");
    }
}
