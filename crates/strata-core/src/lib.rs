//! # Strata Core
//!
//! 시그널 사이트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 사이트 생성 전반에서 사용되는 기본 타입을 제공합니다:
//! - 전략 키 (유니버스 × 변형) 정의
//! - 시그널 피드 및 성과 요약 피드 모델
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
