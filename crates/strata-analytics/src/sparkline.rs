//! 스파크라인 SVG 생성.
//!
//! 종목 행마다 최근 종가 이력을 작은 추세선으로 그립니다. 축, 격자,
//! 텍스트는 없고 경로 하나와 마지막 지점의 원형 마커만 그립니다.
//!
//! 좌표계의 원점은 좌상단이므로 값이 클수록 y가 작아집니다.

use strata_core::{StrataError, StrataResult};

use crate::format::escape_html;

/// 상하 여백 (단위: SVG 사용자 좌표)
pub const SPARKLINE_PADDING_Y: f64 = 5.0;

/// 스파크라인 크기를 검사합니다.
///
/// 높이는 상하 여백을 합친 것보다 커야 합니다. 그렇지 않으면 추세가 뒤집혀 그려집니다.
pub fn check_sparkline_size(width: f64, height: f64) -> StrataResult<()> {
    if width > 0.0 && height > SPARKLINE_PADDING_Y * 2.0 {
        Ok(())
    } else {
        Err(StrataError::InvalidInput(format!(
            "sparkline size {}x{} is too small (height must exceed {})",
            width,
            height,
            SPARKLINE_PADDING_Y * 2.0
        )))
    }
}

/// 샘플을 SVG 좌표로 변환합니다.
///
/// `NaN`, 무한대 샘플은 버리며, 남은 샘플이 2개 미만이면 `None`.
/// 첫 샘플은 x = 0, 마지막 샘플은 x = `width`에 놓이고 사이는 균등
/// 간격입니다. 모든 값이 같으면(범위 0) 모든 점이 세로 중앙선에 놓입니다.
pub fn sparkline_points(samples: &[f64], width: f64, height: f64) -> Option<Vec<(f64, f64)>> {
    let samples: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if samples.len() < 2 {
        return None;
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let flat = max - min == 0.0;
    let range = if flat { 1.0 } else { max - min };

    let plot_height = height - SPARKLINE_PADDING_Y * 2.0;
    let baseline = height - SPARKLINE_PADDING_Y;
    let step_x = width / (samples.len() - 1) as f64;

    let points = samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = i as f64 * step_x;
            let y = if flat {
                height / 2.0
            } else {
                baseline - (value - min) / range * plot_height
            };
            (x, y)
        })
        .collect();

    Some(points)
}

/// 샘플 시퀀스로 스파크라인 SVG 마크업을 생성합니다.
///
/// 샘플이 2개 미만이면 빈 문자열을 반환하며, 호출자는 차트 없이
/// 행을 렌더링해야 합니다. 실패하지 않습니다.
///
/// # 예제
///
/// ```
/// use strata_analytics::render_sparkline;
///
/// let svg = render_sparkline(&[1.0, 2.0, 3.0, 4.0], 120.0, 40.0, "#10b981");
/// assert!(svg.contains(r#"d="M 0.0,35.0 L 40.0,25.0 L 80.0,15.0 L 120.0,5.0""#));
/// assert!(render_sparkline(&[1.0], 120.0, 40.0, "#10b981").is_empty());
/// ```
pub fn render_sparkline(samples: &[f64], width: f64, height: f64, color: &str) -> String {
    let Some(points) = sparkline_points(samples, width, height) else {
        return String::new();
    };

    let path = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{} {:.1},{:.1}", cmd, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    // 마지막 점은 부동소수 누적 오차 없이 정확히 오른쪽 끝에 둠
    let last_y = points.last().map(|&(_, y)| y).unwrap_or(height / 2.0);
    let color = escape_html(color);

    format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="overflow-visible"><path d="{path}" fill="none" stroke="{color}" stroke-width="2" vector-effect="non-scaling-stroke"></path><circle cx="{cx:.1}" cy="{cy:.1}" r="2" fill="{color}"></circle></svg>"#,
        w = width,
        h = height,
        path = path,
        color = color,
        cx = width,
        cy = last_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ys(points: &[(f64, f64)]) -> Vec<f64> {
        points.iter().map(|&(_, y)| y).collect()
    }

    #[test]
    fn test_insufficient_samples() {
        assert_eq!(render_sparkline(&[], 120.0, 40.0, "#fff"), "");
        assert_eq!(render_sparkline(&[42.0], 120.0, 40.0, "#fff"), "");
        assert!(sparkline_points(&[42.0], 120.0, 40.0).is_none());
    }

    #[test]
    fn test_non_finite_samples_dropped() {
        // 무한대만 있으면 그릴 점이 없음
        assert_eq!(render_sparkline(&[f64::INFINITY; 2], 120.0, 40.0, "#fff"), "");
        assert!(sparkline_points(&[f64::NAN, 4.0], 120.0, 40.0).is_none());

        let svg = render_sparkline(&[1.0, f64::NAN, 3.0], 120.0, 40.0, "#fff");
        assert!(svg.contains(r#"d="M 0.0,35.0 L 120.0,5.0""#));
        assert!(!svg.contains("NaN"));

        let svg = render_sparkline(
            &[2.0, f64::NEG_INFINITY, 2.0, f64::INFINITY],
            120.0,
            40.0,
            "#fff",
        );
        assert!(svg.contains(r#"d="M 0.0,20.0 L 120.0,20.0""#));
        assert!(!svg.contains("inf") && !svg.contains("NaN"));
    }

    #[test]
    fn test_rising_series_geometry() {
        let points = sparkline_points(&[1.0, 2.0, 3.0, 4.0], 120.0, 40.0).unwrap();

        assert_eq!(points.first(), Some(&(0.0, 35.0)));
        assert_eq!(points.last(), Some(&(120.0, 5.0)));
        // x는 단조 증가
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_flat_series_on_center_line() {
        let points = sparkline_points(&[7.5; 6], 120.0, 40.0).unwrap();
        assert!(ys(&points).iter().all(|&y| y == 20.0));
    }

    #[test]
    fn test_markup_structure() {
        let svg = render_sparkline(&[3.0, 1.0, 2.0], 120.0, 40.0, "#a855f7");

        assert!(svg.starts_with(r#"<svg width="120" height="40" viewBox="0 0 120 40""#));
        assert!(svg.contains(r#"d="M 0.0,5.0 L 60.0,35.0 L 120.0,20.0""#));
        assert!(svg.contains(r##"<circle cx="120.0" cy="20.0" r="2" fill="#a855f7">"##));
        assert_eq!(svg.matches(" L ").count(), 2);
    }

    #[test]
    fn test_size_check() {
        assert!(check_sparkline_size(120.0, 40.0).is_ok());
        assert!(check_sparkline_size(120.0, 10.5).is_ok());
        assert!(matches!(
            check_sparkline_size(120.0, 10.0),
            Err(StrataError::InvalidInput(_))
        ));
        assert!(check_sparkline_size(120.0, 5.0).is_err());
        assert!(check_sparkline_size(0.0, 40.0).is_err());
        assert!(check_sparkline_size(f64::NAN, 40.0).is_err());
    }

    #[test]
    fn test_color_is_escaped() {
        let svg = render_sparkline(&[1.0, 2.0], 10.0, 20.0, "\"><script>");
        assert!(!svg.contains("<script>"));
    }
}
