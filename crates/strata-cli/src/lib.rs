//! MomentumStrata CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 정적 사이트 빌드 (주기적 재빌드 포함)
//! - 피드 상태 점검
//! - 성과 요약 출력
//! - 스파크라인 SVG 출력

pub mod commands;
