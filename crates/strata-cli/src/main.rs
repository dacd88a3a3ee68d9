//! MomentumStrata CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 로컬 피드로 사이트 빌드
//! strata build --source data --out public
//!
//! # 원격 피드로 5분마다 재빌드
//! strata build --source https://signals.example.com/data --watch 300
//!
//! # 피드 상태 점검
//! strata check -c config/strata.toml
//!
//! # 스파크라인 SVG 출력
//! strata sparkline --values 1,2,3,2.5 --color "#10b981"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use strata_cli::commands::{
    build::{run_build, BuildCommandConfig},
    check::run_check,
    load_config,
    sparkline::{run_sparkline, SparklineCommandConfig},
    summary::run_summary,
};
use strata_core::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "MomentumStrata - 모멘텀 시그널 정적 사이트 생성기", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (없으면 기본값 사용)
    #[arg(short, long, global = true, default_value = "config/strata.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 피드를 읽어 index.html, crypto.html, dashboard.html 생성
    Build {
        /// 피드 위치 (디렉토리 또는 http(s) URL)
        #[arg(long)]
        source: Option<String>,

        /// 출력 디렉토리
        #[arg(long)]
        out: Option<String>,

        /// 재빌드 주기 (초)
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },

    /// 모든 피드를 읽고 상태 보고
    Check {
        /// 피드 위치 (디렉토리 또는 http(s) URL)
        #[arg(long)]
        source: Option<String>,
    },

    /// 전략별 성과와 자산 곡선 형태 출력
    Summary {
        /// 피드 위치 (디렉토리 또는 http(s) URL)
        #[arg(long)]
        source: Option<String>,
    },

    /// 값 목록의 스파크라인 SVG 출력
    Sparkline {
        /// 쉼표로 구분된 값 (예: 1,2,3)
        #[arg(long)]
        values: String,

        /// 너비 (기본: 설정값)
        #[arg(long)]
        width: Option<f64>,

        /// 높이 (기본: 설정값)
        #[arg(long)]
        height: Option<f64>,

        /// 선 색상
        #[arg(long, default_value = "#10b981")]
        color: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env가 없어도 무시
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (source, out) = match &cli.command {
        Commands::Build { source, out, .. } => (source.clone(), out.clone()),
        Commands::Check { source } | Commands::Summary { source } => (source.clone(), None),
        Commands::Sparkline { .. } => (None, None),
    };
    let site = load_config(&cli.config, source, out)?;

    init_logging(LogConfig::from(&site.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    info!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Build { watch, .. } => {
            let config = BuildCommandConfig { watch_secs: watch };
            if let Err(e) = run_build(&site, config).await {
                error!("Build failed: {:#}", e);
                return Err(e);
            }
        }

        Commands::Check { .. } => {
            if let Err(e) = run_check(&site).await {
                error!("Feed check failed: {:#}", e);
                return Err(e);
            }
        }

        Commands::Summary { .. } => {
            if let Err(e) = run_summary(&site).await {
                error!("Summary failed: {:#}", e);
                return Err(e);
            }
        }

        Commands::Sparkline {
            values,
            width,
            height,
            color,
        } => {
            let config = SparklineCommandConfig {
                values,
                width,
                height,
                color,
            };
            match run_sparkline(site.sparkline, config) {
                Ok(svg) => println!("{}", svg),
                Err(e) => {
                    error!("Sparkline failed: {:#}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
