//! 페이지 렌더러.
//!
//! 각 렌더러는 로드된 피드와 템플릿으로 완성된 HTML 문서를 만듭니다.
//! 피드 실패는 해당 섹션의 플레이스홀더로만 나타납니다.

pub mod dashboard;
pub mod signals;

use strata_core::{SeriesPalette, SparklineConfig};

use crate::template::TemplateSet;

pub use dashboard::render_dashboard_page;
pub use signals::render_signal_page;

/// 섹션 로드 실패 문구
pub const LOAD_ERROR_MESSAGE: &str = "Erreur lors du chargement des données.";

/// 렌더링 공통 입력.
pub struct RenderContext<'a> {
    pub templates: &'a TemplateSet,
    pub sparkline: SparklineConfig,
    pub palette: &'a SeriesPalette,
    /// 푸터에 표시할 생성 시각
    pub generated_at: String,
}
