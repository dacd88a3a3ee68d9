//! 차트 설정 데이터 구조
//!
//! 정렬된 자산 곡선을 외부 차트 라이브러리(Chart.js)가 받는 설정 JSON으로
//! 변환합니다. 시각적 스타일은 최소한만 지정하고 나머지는 라이브러리
//! 기본값에 맡깁니다.

use serde::{Deserialize, Serialize};

use super::equity_curve::AlignedChartSeries;

/// 라인 차트 데이터셋 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// 범례 레이블
    pub label: String,

    /// 날짜별 값 (`None`은 JSON `null`로 직렬화되어 선이 끊김)
    pub data: Vec<Option<f64>>,

    /// 선 색상
    pub border_color: String,

    /// 결측 구간을 이을지 여부 (항상 `false`)
    pub span_gaps: bool,

    /// 선 두께
    pub border_width: f64,

    /// 점 반지름 (0이면 점 없음)
    pub point_radius: f64,

    /// 곡선 장력
    pub tension: f64,
}

/// 라인 차트의 데이터 부분
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    /// X축 레이블 (날짜)
    pub labels: Vec<String>,

    /// 데이터셋 목록
    pub datasets: Vec<ChartDataset>,
}

/// Chart.js 라인 차트 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    /// 차트 유형 (`line`)
    #[serde(rename = "type")]
    pub chart_type: String,

    /// 차트 데이터
    pub data: LineChartData,

    /// 차트 옵션
    pub options: serde_json::Value,
}

impl LineChartConfig {
    /// 정렬된 시리즈로 설정을 만듭니다.
    pub fn from_aligned(aligned: &AlignedChartSeries) -> Self {
        let datasets = aligned
            .series
            .iter()
            .map(|series| ChartDataset {
                label: series.label.clone(),
                data: series.values.clone(),
                border_color: series.color.clone(),
                span_gaps: false,
                border_width: 2.0,
                point_radius: 0.0,
                tension: 0.2,
            })
            .collect();

        Self {
            chart_type: "line".to_string(),
            data: LineChartData {
                labels: aligned.dates.clone(),
                datasets,
            },
            options: serde_json::json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "interaction": { "mode": "index", "intersect": false },
                "plugins": { "legend": { "position": "bottom" } }
            }),
        }
    }

    /// `<script>` 안에 넣을 수 있는 JSON 문자열.
    ///
    /// `</script>`로 스크립트가 닫히지 않도록 `<`를 이스케이프합니다.
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::equity_curve::AlignedSeries;
    use strata_core::StrategyKey;

    fn sample() -> AlignedChartSeries {
        AlignedChartSeries {
            dates: vec!["2024-01-01".into(), "2024-01-02".into()],
            series: vec![AlignedSeries {
                key: StrategyKey::Sp500Phoenix,
                label: "S&P 500 Phoenix".into(),
                color: "#fbbf24".into(),
                values: vec![Some(1.0), None],
            }],
        }
    }

    #[test]
    fn test_config_json_shape() {
        let config = LineChartConfig::from_aligned(&sample());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["labels"][1], "2024-01-02");

        let dataset = &json["data"]["datasets"][0];
        assert_eq!(dataset["label"], "S&P 500 Phoenix");
        assert_eq!(dataset["borderColor"], "#fbbf24");
        assert_eq!(dataset["spanGaps"], false);
        assert_eq!(dataset["data"][0], 1.0);
        assert!(dataset["data"][1].is_null());
    }

    #[test]
    fn test_script_json_escapes_markup() {
        let mut aligned = sample();
        aligned.series[0].label = "</script><b>".into();

        let json = LineChartConfig::from_aligned(&aligned)
            .to_script_json()
            .unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script>"));
    }
}
