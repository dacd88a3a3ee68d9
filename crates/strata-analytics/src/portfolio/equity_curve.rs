//! 자산 곡선 집계기
//!
//! 전략마다 독립적으로 기록된 자산 곡선(날짜, 누적 수익률 %)을 하나의
//! 날짜 축 위의 다중 시리즈로 정렬합니다.
//!
//! # 정렬 규칙
//!
//! 1. 모든 곡선의 날짜 합집합을 사전순으로 정렬합니다. 날짜가
//!    `YYYY-MM-DD` 형식이므로 사전순이 곧 시간순입니다.
//! 2. 합집합이 비어 있으면 데이터 없음(`None`).
//! 3. 곡선이 없거나 비어 있는 전략은 시리즈를 만들지 않습니다.
//! 4. 나머지 전략은 합집합 전체에 대해 값을 채우고, 자기 날짜에 없는
//!    위치는 `None`으로 둡니다. 보간하거나 직전 값을 끌어오지 않습니다.
//!
//! 시리즈 순서는 입력 맵의 순회 순서와 무관하게 [`StrategyKey::ALL`] 순서입니다.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use strata_core::{NamedEquityCurve, SeriesPalette, StrategyKey};

/// 통합 날짜 축에 맞춰 재샘플링된 시리즈 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// 전략 키
    pub key: StrategyKey,

    /// 표시 레이블
    pub label: String,

    /// 표시 색상
    pub color: String,

    /// 통합 날짜별 값 (해당 날짜 샘플이 없으면 `None`)
    pub values: Vec<Option<f64>>,
}

impl AlignedSeries {
    /// 실제 값이 있는 지점 수
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// 마지막 유효 값
    pub fn last_value(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

/// 날짜 정렬된 다중 시리즈 차트 입력
///
/// 모든 시리즈의 길이는 `dates` 길이와 같습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedChartSeries {
    /// 정렬된 날짜 합집합
    pub dates: Vec<String>,

    /// 전략 순서대로 정렬된 시리즈
    pub series: Vec<AlignedSeries>,
}

impl AlignedChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 전략 키로 시리즈를 찾습니다.
    pub fn series_for(&self, key: StrategyKey) -> Option<&AlignedSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    /// 첫 날짜와 마지막 날짜
    pub fn date_range(&self) -> Option<(&str, &str)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((first.as_str(), last.as_str())),
            _ => None,
        }
    }
}

/// 모든 곡선 날짜의 합집합을 사전순으로 반환합니다.
///
/// 빈 문자열 날짜는 축에 넣지 않습니다.
pub fn union_dates<'a, I>(curves: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a NamedEquityCurve>,
{
    curves
        .into_iter()
        .flat_map(|curve| curve.dates.iter())
        .filter(|date| !date.is_empty())
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 전략별 자산 곡선을 하나의 날짜 축으로 정렬합니다.
///
/// 표시할 데이터가 없으면 `None`을 반환하며, 호출자는 차트 대신
/// 플레이스홀더를 보여줘야 합니다. 같은 입력에 대해 항상 같은 결과를
/// 반환합니다.
///
/// # 예제
///
/// ```
/// use std::collections::HashMap;
/// use strata_analytics::aggregate_curves;
/// use strata_core::{NamedEquityCurve, SeriesPalette, StrategyKey};
///
/// let mut curves = HashMap::new();
/// curves.insert(
///     StrategyKey::Sp500Phoenix,
///     NamedEquityCurve::new(vec!["2024-01-01".into(), "2024-01-03".into()], vec![1.0, 2.0]),
/// );
/// curves.insert(
///     StrategyKey::Sp500Pullback,
///     NamedEquityCurve::new(vec!["2024-01-02".into()], vec![5.0]),
/// );
///
/// let aligned = aggregate_curves(&curves, &SeriesPalette::new()).unwrap();
/// assert_eq!(aligned.dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
/// assert_eq!(aligned.series[0].values, [Some(1.0), None, Some(2.0)]);
/// assert_eq!(aligned.series[1].values, [None, Some(5.0), None]);
/// ```
pub fn aggregate_curves(
    curves: &HashMap<StrategyKey, NamedEquityCurve>,
    palette: &SeriesPalette,
) -> Option<AlignedChartSeries> {
    let present: Vec<(StrategyKey, &NamedEquityCurve)> = StrategyKey::ALL
        .iter()
        .filter_map(|key| {
            curves
                .get(key)
                .filter(|curve| !curve.is_empty())
                .map(|curve| (*key, curve))
        })
        .collect();

    let dates = union_dates(present.iter().map(|(_, curve)| *curve));
    if dates.is_empty() {
        debug!("No equity curve data to aggregate");
        return None;
    }

    let series: Vec<AlignedSeries> = present
        .into_iter()
        .map(|(key, curve)| {
            // 같은 날짜가 반복되면 나중 샘플이 남음
            let lookup: HashMap<&str, Option<f64>> = curve.samples().collect();
            let values = dates
                .iter()
                .map(|date| lookup.get(date.as_str()).copied().flatten())
                .collect();
            let style = palette.style(key);

            AlignedSeries {
                key,
                label: style.label,
                color: style.color,
                values,
            }
        })
        .collect();

    if series.is_empty() {
        return None;
    }

    debug!(
        dates = dates.len(),
        series = series.len(),
        "Aggregated equity curves"
    );

    Some(AlignedChartSeries { dates, series })
}
