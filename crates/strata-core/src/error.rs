//! 시그널 사이트의 에러 타입.
//!
//! 피드 조회, 파싱, 렌더링 출력 과정에서 발생하는 에러를 정의합니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum StrataError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (연결 실패, 타임아웃 등)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 2xx 이외의 HTTP 응답
    #[error("HTTP {status}: {url}")]
    HttpStatus {
        /// 요청 URL
        url: String,
        /// 응답 상태 코드
        status: u16,
    },

    /// 파일 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 템플릿 에러
    #[error("템플릿 에러: {0}")]
    Template(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

/// 사이트 작업을 위한 Result 타입.
pub type StrataResult<T> = Result<T, StrataError>;

impl StrataError {
    /// 피드 조회 단계의 실패인지 확인합니다.
    ///
    /// 이 경우 해당 섹션만 에러 플레이스홀더로 대체되고 빌드는 계속됩니다.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            StrataError::Network(_)
                | StrataError::HttpStatus { .. }
                | StrataError::Io(_)
                | StrataError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        StrataError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StrataError {
    fn from(err: std::io::Error) -> Self {
        StrataError::Io(err.to_string())
    }
}

impl From<::config::ConfigError> for StrataError {
    fn from(err: ::config::ConfigError) -> Self {
        StrataError::Config(err.to_string())
    }
}
