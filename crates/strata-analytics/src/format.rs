//! 공통 포맷터.
//!
//! 모든 페이지가 같은 숫자 표기와 구간 분류를 쓰도록 한 곳에 모았습니다.
//! 값이 없거나 유한하지 않으면 에러 대신 대시 플레이스홀더를 반환합니다.

/// 시그널 표의 결측값 표시
pub const DASH: &str = "-";

/// 대시보드 카드의 결측값 표시
pub const EN_DASH: &str = "–";

/// 천 단위 구분 기호(en-US)와 고정 소수 자릿수로 포맷합니다.
///
/// ```
/// use strata_analytics::format_grouped;
///
/// assert_eq!(format_grouped(Some(1234567.891), 2), "1,234,567.89");
/// assert_eq!(format_grouped(Some(999.6), 0), "1,000");
/// assert_eq!(format_grouped(None, 2), "-");
/// ```
pub fn format_grouped(value: Option<f64>, digits: usize) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return DASH.to_string();
    };

    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 구분 기호 없이 고정 소수 자릿수로 포맷합니다 (대시보드 카드용).
pub fn format_fixed(value: Option<f64>, digits: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.*}", digits, v),
        None => EN_DASH.to_string(),
    }
}

/// 달러 가격. 값이 없으면 통화 기호 없이 대시.
pub fn format_price(value: Option<f64>, digits: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(_) => format!("${}", format_grouped(value, digits)),
        None => DASH.to_string(),
    }
}

/// 점수 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 80 이상
    High,
    /// 60 이상
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: Option<f64>) -> Self {
        match score.unwrap_or(0.0) {
            s if s >= 80.0 => ScoreTier::High,
            s if s >= 60.0 => ScoreTier::Medium,
            _ => ScoreTier::Low,
        }
    }
}

/// RSI 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    /// 70 초과
    Overbought,
    /// 30 미만
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn from_rsi(rsi: Option<f64>) -> Self {
        match rsi {
            Some(r) if r > 70.0 => RsiZone::Overbought,
            Some(r) if r < 30.0 => RsiZone::Oversold,
            _ => RsiZone::Neutral,
        }
    }
}

/// SMA200 대비 추세 문구 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendStyle {
    /// `+12.3% / SMA200` (S&P 500 표)
    Short,
    /// `Trend : +12.3% au-dessus de la SMA200` (크립토 표/카드)
    Long,
}

impl TrendStyle {
    pub fn label(&self, trend_pct: Option<f64>) -> String {
        let trend = trend_pct.filter(|v| v.is_finite());
        match (self, trend) {
            (TrendStyle::Short, Some(t)) if t >= 0.0 => format!("+{:.1}% / SMA200", t),
            (TrendStyle::Short, Some(t)) => format!("{:.1}% / SMA200", t),
            (TrendStyle::Short, None) => "Trend n.d.".to_string(),
            (TrendStyle::Long, Some(t)) if t >= 0.0 => {
                format!("Trend : +{:.1}% au-dessus de la SMA200", t)
            }
            (TrendStyle::Long, Some(t)) => format!("Trend : {:.1}% sous la SMA200", t),
            (TrendStyle::Long, None) => "Trend : n.d.".to_string(),
        }
    }
}

/// HTML 텍스트/속성에 넣을 문자열을 이스케이프합니다.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 심볼의 TradingView 차트 URL.
///
/// 심볼은 `encodeURIComponent`와 같은 규칙으로 퍼센트 인코딩됩니다.
pub fn tradingview_url(symbol: &str) -> String {
    let mut encoded = String::with_capacity(symbol.len());
    for byte in symbol.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    format!("https://www.tradingview.com/chart/?symbol={}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(Some(0.0), 0), "0");
        assert_eq!(format_grouped(Some(12.0), 2), "12.00");
        assert_eq!(format_grouped(Some(123456.0), 0), "123,456");
        assert_eq!(format_grouped(Some(-9876543.21), 1), "-9,876,543.2");
        assert_eq!(format_grouped(Some(0.000123), 4), "0.0001");
        assert_eq!(format_grouped(Some(f64::NAN), 2), DASH);
    }

    #[test]
    fn test_format_fixed_and_price() {
        assert_eq!(format_fixed(Some(0.41234), 3), "0.412");
        assert_eq!(format_fixed(None, 1), EN_DASH);
        assert_eq!(format_price(Some(1234.5), 2), "$1,234.50");
        assert_eq!(format_price(None, 4), DASH);
    }

    #[test]
    fn test_score_tier() {
        assert_eq!(ScoreTier::from_score(Some(80.0)), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(Some(79.9)), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(Some(60.0)), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(None), ScoreTier::Low);
    }

    #[test]
    fn test_rsi_zone() {
        assert_eq!(RsiZone::from_rsi(Some(70.1)), RsiZone::Overbought);
        assert_eq!(RsiZone::from_rsi(Some(70.0)), RsiZone::Neutral);
        assert_eq!(RsiZone::from_rsi(Some(29.9)), RsiZone::Oversold);
        assert_eq!(RsiZone::from_rsi(None), RsiZone::Neutral);
    }

    #[test]
    fn test_trend_labels() {
        assert_eq!(TrendStyle::Short.label(Some(12.34)), "+12.3% / SMA200");
        assert_eq!(TrendStyle::Short.label(Some(-4.0)), "-4.0% / SMA200");
        assert_eq!(TrendStyle::Short.label(None), "Trend n.d.");
        assert_eq!(
            TrendStyle::Long.label(Some(0.0)),
            "Trend : +0.0% au-dessus de la SMA200"
        );
        assert_eq!(TrendStyle::Long.label(Some(-2.5)), "Trend : -2.5% sous la SMA200");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"AT&T's"</b>"#),
            "&lt;b&gt;&quot;AT&amp;T&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_tradingview_url() {
        assert_eq!(
            tradingview_url("BRK.B"),
            "https://www.tradingview.com/chart/?symbol=BRK.B"
        );
        assert_eq!(
            tradingview_url("BTC/USDT"),
            "https://www.tradingview.com/chart/?symbol=BTC%2FUSDT"
        );
    }
}
