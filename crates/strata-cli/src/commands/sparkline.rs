//! 스파크라인 SVG 출력.

use anyhow::Result;

use strata_analytics::{check_sparkline_size, render_sparkline};
use strata_core::{SparklineConfig, StrataError};

/// 스파크라인 명령 설정.
#[derive(Debug)]
pub struct SparklineCommandConfig {
    /// 쉼표로 구분된 값 (예: "1,2,3")
    pub values: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: String,
}

/// 쉼표로 구분된 숫자 목록을 파싱합니다. 빈 항목은 무시합니다.
///
/// `NaN`, `inf` 같은 유한하지 않은 값은 거부합니다.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(StrataError::InvalidInput(format!("Invalid sparkline value: {}", s)).into()),
        })
        .collect()
}

/// 값 목록의 스파크라인 SVG를 만듭니다. 크기는 설정값이 기본입니다.
///
/// 값이 2개 미만이면 그릴 선이 없으므로 에러입니다.
pub fn run_sparkline(defaults: SparklineConfig, config: SparklineCommandConfig) -> Result<String> {
    let samples = parse_values(&config.values)?;
    let width = config.width.unwrap_or(defaults.width);
    let height = config.height.unwrap_or(defaults.height);
    check_sparkline_size(width, height)?;

    if samples.len() < 2 {
        return Err(StrataError::InvalidInput(format!(
            "at least 2 values are required, got {}",
            samples.len()
        ))
        .into());
    }

    Ok(render_sparkline(&samples, width, height, &config.color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(values: &str, height: Option<f64>) -> SparklineCommandConfig {
        SparklineCommandConfig {
            values: values.to_string(),
            width: None,
            height,
            color: "#10b981".to_string(),
        }
    }

    fn is_invalid_input(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<StrataError>(),
            Some(StrataError::InvalidInput(_))
        )
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("1, 2.5,,3").unwrap(), vec![1.0, 2.5, 3.0]);
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values("1,abc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for text in ["1,NaN,3", "inf,inf", "1,-inf", "1,infinity"] {
            let err = parse_values(text).unwrap_err();
            assert!(is_invalid_input(&err), "{}", text);
        }
    }

    #[test]
    fn test_run_sparkline() {
        let svg = run_sparkline(SparklineConfig::default(), command("1,2,3", None)).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("#10b981"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_run_rejects_small_height() {
        // 상하 여백 5씩을 넣을 공간이 없음
        let err = run_sparkline(SparklineConfig::default(), command("1,2", Some(5.0))).unwrap_err();
        assert!(is_invalid_input(&err));

        assert!(run_sparkline(SparklineConfig::default(), command("1,2", Some(10.0))).is_err());
        assert!(run_sparkline(SparklineConfig::default(), command("1,2", Some(12.0))).is_ok());
    }

    #[test]
    fn test_run_requires_two_values() {
        for values in ["", "42"] {
            let err = run_sparkline(SparklineConfig::default(), command(values, None)).unwrap_err();
            assert!(is_invalid_input(&err));
        }
    }
}
