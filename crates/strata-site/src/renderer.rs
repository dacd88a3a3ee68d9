//! 사이트 렌더러.
//!
//! 피드를 읽고 세 페이지를 출력 디렉토리에 기록합니다. 렌더러는 빌드 사이에
//! 유지되며, 대시보드 차트 슬롯도 함께 유지되어 재빌드 시 이전 차트가
//! 교체됩니다.

use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use strata_core::{
    FeedKind, SeriesPalette, SiteConfig, SparklineConfig, StrataError, StrataResult, Universe,
};

use crate::chart::ChartSlot;
use crate::components::SitePage;
use crate::loader::{FeedLoader, SiteData};
use crate::pages::{render_dashboard_page, render_signal_page, RenderContext};
use crate::provider::{feed_source_from_config, FeedSource};
use crate::template::TemplateSet;

/// 빌드 결과 요약.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// 기록된 페이지 경로
    pub pages: Vec<PathBuf>,
    /// 읽지 못한 피드
    pub failed_feeds: Vec<FeedKind>,
    /// 자산 곡선 차트가 그려졌는지 여부
    pub chart_rendered: bool,
    /// 소요 시간 (밀리초)
    pub elapsed_ms: u128,
}

/// 정적 사이트 렌더러.
pub struct SiteRenderer {
    loader: FeedLoader,
    templates: TemplateSet,
    output_dir: PathBuf,
    sparkline: SparklineConfig,
    palette: SeriesPalette,
    equity_chart: ChartSlot,
}

impl SiteRenderer {
    pub fn new(
        source: Arc<dyn FeedSource>,
        config: &SiteConfig,
        templates: TemplateSet,
    ) -> Self {
        Self {
            loader: FeedLoader::new(source, config.feeds.files.clone()),
            templates,
            output_dir: PathBuf::from(&config.output.dir),
            sparkline: config.sparkline,
            palette: config.chart.palette(),
            equity_chart: ChartSlot::new("equity-chart"),
        }
    }

    /// 설정으로 렌더러를 만듭니다 (Provider, 템플릿 포함).
    pub async fn from_config(config: &SiteConfig) -> StrataResult<Self> {
        let source = feed_source_from_config(&config.feeds)?;
        let templates = TemplateSet::load(config.templates.dir.as_deref().map(Path::new)).await?;
        Ok(Self::new(source, config, templates))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn loader(&self) -> &FeedLoader {
        &self.loader
    }

    pub fn equity_chart(&self) -> &ChartSlot {
        &self.equity_chart
    }

    /// 로드된 피드로 모든 페이지를 렌더링합니다 (파일 기록 없음).
    pub fn render_pages(&mut self, data: &SiteData) -> StrataResult<Vec<(SitePage, String)>> {
        let ctx = RenderContext {
            templates: &self.templates,
            sparkline: self.sparkline,
            palette: &self.palette,
            generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        let index = render_signal_page(&self.templates.index, Universe::Sp500, &data.signals, &ctx);
        let crypto =
            render_signal_page(&self.templates.crypto, Universe::Crypto, &data.signals, &ctx);
        let dashboard = render_dashboard_page(
            &self.templates.dashboard,
            &data.signals,
            &data.performance,
            &ctx,
            &mut self.equity_chart,
        )?;

        Ok(vec![
            (SitePage::Sp500, index),
            (SitePage::Crypto, crypto),
            (SitePage::Dashboard, dashboard),
        ])
    }

    /// 피드를 읽고 페이지를 기록합니다.
    ///
    /// 피드 실패는 빌드를 실패시키지 않습니다. 출력 기록 실패만 에러입니다.
    #[instrument(skip(self), fields(output = %self.output_dir.display()))]
    pub async fn build(&mut self) -> StrataResult<BuildReport> {
        let started = Instant::now();
        let data = self.loader.load_all().await;
        let pages = self.render_pages(&data)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| StrataError::Io(format!("{}: {}", self.output_dir.display(), e)))?;

        let mut written = Vec::with_capacity(pages.len());
        for (page, html) in pages {
            let path = self.output_dir.join(page.file_name());
            tokio::fs::write(&path, html)
                .await
                .map_err(|e| StrataError::Io(format!("{}: {}", path.display(), e)))?;
            written.push(path);
        }

        let report = BuildReport {
            pages: written,
            failed_feeds: data.failed_feeds(),
            chart_rendered: self.equity_chart.current().is_some(),
            elapsed_ms: started.elapsed().as_millis(),
        };
        info!(
            pages = report.pages.len(),
            failed_feeds = report.failed_feeds.len(),
            chart = report.chart_rendered,
            elapsed_ms = report.elapsed_ms as u64,
            "Site built"
        );
        Ok(report)
    }
}
