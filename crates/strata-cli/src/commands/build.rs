//! 정적 사이트 빌드.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info, warn};

use strata_core::SiteConfig;
use strata_site::{BuildReport, SiteRenderer};

/// 빌드 명령 설정.
#[derive(Debug, Default)]
pub struct BuildCommandConfig {
    /// 재빌드 주기 (초). 없으면 한 번만 빌드
    pub watch_secs: Option<u64>,
}

fn print_report(report: &BuildReport) {
    println!("\n✅ 사이트 빌드 완료 ({} ms)", report.elapsed_ms);
    for page in &report.pages {
        println!("   {}", page.display());
    }
    if report.failed_feeds.is_empty() {
        println!("   모든 피드 정상");
    } else {
        let names: Vec<String> = report.failed_feeds.iter().map(|f| f.to_string()).collect();
        println!("   ⚠️  읽지 못한 피드: {}", names.join(", "));
    }
    if !report.chart_rendered {
        println!("   자산 곡선 차트 없음");
    }
}

/// 사이트를 빌드합니다.
///
/// `watch_secs`가 있으면 같은 렌더러로 주기적으로 재빌드하며, Ctrl+C로 종료합니다.
/// 재빌드 중 에러는 기록만 하고 다음 주기를 기다립니다.
pub async fn run_build(site: &SiteConfig, config: BuildCommandConfig) -> Result<BuildReport> {
    let mut renderer = SiteRenderer::from_config(site)
        .await
        .context("Failed to initialize site renderer")?;

    println!("\n🏗️  사이트 빌드 중...");
    println!("피드 소스: {}", site.feeds.source);
    println!("출력 디렉토리: {}", renderer.output_dir().display());

    let mut report = renderer.build().await.context("Site build failed")?;
    print_report(&report);

    let Some(secs) = config.watch_secs else {
        return Ok(report);
    };
    if secs == 0 {
        warn!("Watch interval must be positive, skipping watch mode");
        return Ok(report);
    }

    info!(interval_secs = secs, "Watching feeds");
    println!("\n👀 {}초마다 재빌드합니다 (Ctrl+C로 종료)", secs);

    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    // 첫 tick은 즉시 완료됨
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Watch stopped");
                break;
            }
            _ = ticker.tick() => {
                match renderer.build().await {
                    Ok(next) => {
                        print_report(&next);
                        report = next;
                    }
                    Err(e) => error!(error = %e, "Rebuild failed"),
                }
            }
        }
    }

    println!(
        "\n차트 마운트 {}회, 활성 인스턴스 {}개",
        renderer.equity_chart().mounted_count(),
        renderer.equity_chart().live_count()
    );
    Ok(report)
}
