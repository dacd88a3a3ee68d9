//! 관대한(lenient) 피드 역직렬화 도우미.
//!
//! 피드는 외부 배치 작업이 생성하므로 필드 누락, 타입 불일치,
//! `NaN` 리터럴이 섞여 들어옵니다. 잘못된 값은 에러 대신 `None`으로
//! 대체되어 화면에서 대시 플레이스홀더로 표시됩니다.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;

const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// 문자열 밖의 `NaN`, `Infinity`, `-Infinity` 토큰을 `null`로 치환합니다.
///
/// 표준 JSON 파서는 이 토큰들을 거부하지만 피드 생성기는 `allow_nan`으로
/// 기록합니다. 치환할 토큰이 없으면 입력을 그대로 빌려서 반환합니다.
pub fn sanitize_non_finite(text: &str) -> Cow<'_, str> {
    if !text.contains("NaN") && !text.contains("Infinity") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            rest = &rest[1..];
            continue;
        }

        if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    Cow::Owned(out)
}

/// 유한한 숫자만 받아들이는 `f64` 필드.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

/// 음이 아닌 정수 필드. `12.0` 같은 실수 표기도 허용합니다.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().or_else(|| {
        value_as_f64(&value)
            .filter(|v| *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as u64)
    }))
}

/// 문자열 필드. 숫자는 문자열로 변환하고 그 외는 `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// 숫자 배열. 숫자가 아닌 원소는 건너뜁니다 (스파크라인 가격 이력용).
pub fn lenient_f64_vec<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(value_as_f64).collect(),
        _ => Vec::new(),
    })
}

/// 위치를 보존하는 숫자 배열. 숫자가 아닌 원소는 `None`이 됩니다.
pub fn lenient_opt_f64_vec<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(value_as_f64).collect(),
        _ => Vec::new(),
    })
}

/// 문자열 배열. 위치 보존을 위해 문자열이 아닌 원소는 빈 문자열이 됩니다.
pub fn lenient_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                _ => String::new(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn value_as_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}
