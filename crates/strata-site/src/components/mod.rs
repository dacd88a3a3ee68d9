//! HTML 조각 생성기.
//!
//! - [`signals`]: 시그널 표 행, 모바일 카드, 안내 메시지
//! - [`performance`]: 대시보드 성과 카드
//! - [`layout`]: 내비게이션과 푸터

pub mod layout;
pub mod performance;
pub mod signals;

pub use layout::{footer, navbar, SitePage};
pub use performance::{perf_card, PerfCardValues};
pub use signals::{message_card, message_row, signal_card, signal_row, SignalStyle, Tone};
