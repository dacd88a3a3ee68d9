//! 차트 슬롯.
//!
//! 컨테이너 하나는 최대 하나의 살아 있는 차트 인스턴스를 가집니다. 새 차트를
//! 올리기 전에 이전 인스턴스를 명시적으로 해제하며, 생성된 스크립트도
//! 브라우저에서 같은 컨테이너의 이전 `Chart` 인스턴스를 `destroy()` 합니다.

use tracing::{debug, info};

use strata_analytics::{escape_html, LineChartConfig};
use strata_core::{StrataError, StrataResult};

/// 마운트된 차트 인스턴스.
#[derive(Debug, PartialEq)]
pub struct ChartHandle {
    container_id: String,
    generation: u64,
    markup: String,
}

impl ChartHandle {
    fn mount(container_id: &str, generation: u64, config: &LineChartConfig) -> StrataResult<Self> {
        let json = config
            .to_script_json()
            .map_err(|e| StrataError::Serialization(e.to_string()))?;
        let canvas_id = escape_html(&format!("{}-canvas", container_id));
        let registry_key = serde_json::to_string(container_id)?;

        let markup = format!(
            r#"<canvas id="{canvas_id}" data-chart-generation="{generation}"></canvas>
<script>
(function () {{
  var charts = window.__strataCharts = window.__strataCharts || {{}};
  var key = {registry_key};
  if (charts[key]) {{ charts[key].destroy(); }}
  charts[key] = new Chart(document.getElementById("{canvas_id}"), {json});
}})();
</script>"#
        );

        Ok(Self {
            container_id: container_id.to_string(),
            generation,
            markup,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 페이지에 넣을 캔버스와 스크립트
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// 인스턴스를 해제합니다.
    fn dispose(self) {
        debug!(
            container = %self.container_id,
            generation = self.generation,
            "Chart disposed"
        );
    }
}

/// 컨테이너 하나의 차트 수명 관리.
#[derive(Debug)]
pub struct ChartSlot {
    container_id: String,
    current: Option<ChartHandle>,
    mounted: u64,
    disposed: u64,
}

impl ChartSlot {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            current: None,
            mounted: 0,
            disposed: 0,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// 이전 차트를 해제하고 새 차트를 마운트합니다.
    pub fn replace(&mut self, config: &LineChartConfig) -> StrataResult<&ChartHandle> {
        let handle = ChartHandle::mount(&self.container_id, self.mounted + 1, config)?;
        self.clear();

        self.mounted += 1;
        info!(
            container = %self.container_id,
            generation = handle.generation,
            datasets = config.data.datasets.len(),
            "Chart mounted"
        );
        let handle = self.current.insert(handle);
        Ok(&*handle)
    }

    /// 현재 차트를 해제합니다 (데이터 없음).
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.dispose();
            self.disposed += 1;
        }
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// 살아 있는 인스턴스 수 (0 또는 1)
    pub fn live_count(&self) -> u64 {
        self.mounted - self.disposed
    }

    pub fn mounted_count(&self) -> u64 {
        self.mounted
    }
}
