//! 시그널 표 행과 모바일 카드.
//!
//! 피드에서 온 모든 문자열은 이스케이프해서 출력합니다.

use strata_analytics::{
    escape_html, format_price, render_sparkline, tradingview_url, RsiZone, ScoreTier, TrendStyle,
    DASH,
};
use strata_core::{SignalPick, SparklineConfig, Universe, Variant};

/// 유니버스별 표시 규칙.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStyle {
    pub universe: Universe,
    /// 가격 소수 자릿수
    pub price_digits: usize,
    /// 추세 문구 형식
    pub trend: TrendStyle,
    /// 과매도 RSI도 색상 표시할지 여부
    pub highlight_oversold: bool,
    /// 스파크라인 색상 (phoenix, pullback)
    pub sparkline_colors: (&'static str, &'static str),
}

impl SignalStyle {
    pub fn for_universe(universe: Universe) -> Self {
        match universe {
            Universe::Sp500 => Self {
                universe,
                price_digits: 2,
                trend: TrendStyle::Short,
                highlight_oversold: true,
                sparkline_colors: ("#fbbf24", "#10b981"),
            },
            Universe::Crypto => Self {
                universe,
                price_digits: 4,
                trend: TrendStyle::Long,
                highlight_oversold: false,
                sparkline_colors: ("#a855f7", "#10b981"),
            },
        }
    }

    pub fn sparkline_color(&self, variant: Variant) -> &'static str {
        match variant {
            Variant::Phoenix => self.sparkline_colors.0,
            Variant::Pullback => self.sparkline_colors.1,
        }
    }

    /// 거래량 문구
    pub fn volume_text(&self, pick: &SignalPick) -> String {
        let dollar_vol = format_price(pick.dollar_vol_avg20, 0);
        match self.universe {
            Universe::Sp500 => match pick.vol_ratio.filter(|r| r.is_finite()) {
                Some(ratio) => format!("x{:.1} • {}", ratio, dollar_vol),
                None => dollar_vol,
            },
            Universe::Crypto => format!("{} / jour", dollar_vol),
        }
    }

    fn score_class(&self, score: Option<f64>) -> &'static str {
        match (self.universe, ScoreTier::from_score(score)) {
            (Universe::Sp500, ScoreTier::High) => {
                "bg-emerald-500/20 text-emerald-300 border-emerald-500/40"
            }
            (Universe::Sp500, ScoreTier::Medium) => {
                "bg-amber-500/20 text-amber-300 border-amber-500/40"
            }
            (Universe::Sp500, ScoreTier::Low) => {
                "bg-slate-700/30 text-slate-300 border-slate-600/40"
            }
            (Universe::Crypto, ScoreTier::High) => "text-emerald-400",
            (Universe::Crypto, ScoreTier::Medium) => "text-amber-300",
            (Universe::Crypto, ScoreTier::Low) => "text-slate-300",
        }
    }

    fn rsi_class(&self, rsi: Option<f64>) -> &'static str {
        match RsiZone::from_rsi(rsi) {
            RsiZone::Overbought => "text-rose-400",
            RsiZone::Oversold if self.highlight_oversold => "text-blue-300",
            _ => "text-slate-300",
        }
    }

    fn accent(&self) -> &'static str {
        match self.universe {
            Universe::Sp500 => "text-amber-300",
            Universe::Crypto => "text-purple-300",
        }
    }
}

/// 행/카드에서 공통으로 쓰는 계산 결과
struct PickView {
    name: String,
    symbol: String,
    trend: String,
    volume: String,
    score: String,
    rsi: String,
    price: String,
    stop: String,
    sparkline: String,
    chart_url: String,
}

impl PickView {
    fn new(
        pick: &SignalPick,
        variant: Variant,
        style: &SignalStyle,
        sparkline: &SparklineConfig,
    ) -> Self {
        Self {
            name: escape_html(pick.display_name()),
            symbol: escape_html(&pick.symbol),
            trend: escape_html(&style.trend.label(pick.trend_pct)),
            volume: escape_html(&style.volume_text(pick)),
            score: one_decimal(pick.score),
            rsi: one_decimal(pick.rsi),
            price: format_price(pick.entry_price, style.price_digits),
            stop: format_price(pick.stop_loss, style.price_digits),
            sparkline: render_sparkline(
                &pick.history,
                sparkline.width,
                sparkline.height,
                style.sparkline_color(variant),
            ),
            chart_url: escape_html(&tradingview_url(&pick.symbol)),
        }
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| DASH.to_string())
}

/// 데스크톱 표의 한 행.
pub fn signal_row(
    pick: &SignalPick,
    variant: Variant,
    style: &SignalStyle,
    sparkline: &SparklineConfig,
) -> String {
    let view = PickView::new(pick, variant, style, sparkline);
    let score_class = style.score_class(pick.score);
    let rsi_class = style.rsi_class(pick.rsi);
    let accent = style.accent();

    let (vol_label, score_markup) = match style.universe {
        Universe::Sp500 => (
            "Vol",
            format!(
                r#"<span class="text-xs font-semibold px-2 py-0.5 rounded border {}">Score : {}</span>"#,
                score_class, view.score
            ),
        ),
        Universe::Crypto => (
            "Vol moyen 20j",
            format!(
                r#"<span class="text-xs {} font-semibold">Score : {}</span>"#,
                score_class, view.score
            ),
        ),
    };
    let spark = if view.sparkline.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="w-[120px] h-[40px] opacity-90">{}</div>"#,
            view.sparkline
        )
    };

    format!(
        r#"<tr class="hover:bg-slate-800/40 border-b border-slate-800/40 transition-all">
  <td class="px-6 py-4 align-top">
    <div class="font-semibold text-slate-100 leading-tight">{name}</div>
    <div class="text-[11px] text-slate-500 mt-0.5">{symbol}</div>
  </td>
  <td class="px-6 py-4 hidden md:table-cell align-top">
    <div class="flex flex-col gap-1">
      <span class="text-[11px] {accent} font-medium">{trend}</span>
      <span class="text-[10px] text-slate-400">{vol_label} : {volume}</span>
    </div>
  </td>
  <td class="px-6 py-4 align-top">
    <div class="flex flex-col gap-1">
      {score_markup}
      <span class="text-[10px] {rsi_class}">RSI : {rsi}</span>
    </div>
  </td>
  <td class="px-6 py-4 hidden sm:table-cell align-top font-mono text-xs text-slate-300">{price}</td>
  <td class="px-6 py-4 hidden sm:table-cell align-top font-mono text-xs text-rose-400">{stop}</td>
  <td class="px-6 py-4 align-top text-right">
    <div class="flex flex-col items-end gap-2">
      {spark}
      <a href="{url}" target="_blank" rel="noopener" class="text-[11px] font-medium {accent}">Voir &rarr;</a>
    </div>
  </td>
</tr>
"#,
        name = view.name,
        symbol = view.symbol,
        accent = accent,
        trend = view.trend,
        vol_label = vol_label,
        volume = view.volume,
        score_markup = score_markup,
        rsi_class = rsi_class,
        rsi = view.rsi,
        price = view.price,
        stop = view.stop,
        spark = spark,
        url = view.chart_url,
    )
}

/// 모바일 카드.
pub fn signal_card(
    pick: &SignalPick,
    variant: Variant,
    style: &SignalStyle,
    sparkline: &SparklineConfig,
) -> String {
    let view = PickView::new(pick, variant, style, sparkline);
    let badge_class = match variant {
        Variant::Phoenix => "bg-purple-500/10 text-purple-300 border border-purple-400/40",
        Variant::Pullback => "bg-emerald-500/10 text-emerald-300 border border-emerald-400/40",
    };
    let spark = if view.sparkline.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="w-[120px] h-[40px]">{}</div>"#, view.sparkline)
    };

    format!(
        r#"<article class="bg-slate-950/90 border border-slate-800/80 rounded-2xl p-4 flex flex-col gap-3 shadow-md">
  <div class="flex items-center justify-between gap-2">
    <div>
      <div class="font-semibold text-slate-100 text-sm">{name}</div>
      <div class="text-[11px] text-slate-500 mt-0.5">{symbol}</div>
    </div>
    <span class="text-[11px] px-2 py-0.5 rounded-full {badge_class}">{badge}</span>
  </div>
  <div class="text-[11px] text-slate-400 flex flex-col gap-1">
    <span>{trend}</span>
    <span>Vol moyen 20j : {volume}</span>
  </div>
  <div class="grid grid-cols-2 gap-3 text-[11px]">
    <div><div class="uppercase tracking-wide text-slate-500">Score</div><div class="mt-0.5 font-mono {score_class}">{score}</div></div>
    <div><div class="uppercase tracking-wide text-slate-500">RSI</div><div class="mt-0.5 font-mono {rsi_class}">{rsi}</div></div>
  </div>
  <div class="grid grid-cols-2 gap-3 text-[11px]">
    <div><div class="uppercase tracking-wide text-slate-500">Prix</div><div class="mt-0.5 font-mono text-slate-100">{price}</div></div>
    <div><div class="uppercase tracking-wide text-slate-500">Stop</div><div class="mt-0.5 font-mono text-rose-400">{stop}</div></div>
  </div>
  <div class="flex items-end justify-between gap-3">
    {spark}
    <a href="{url}" target="_blank" rel="noopener" class="inline-flex items-center text-[11px] font-medium text-purple-300">Voir sur TradingView &rarr;</a>
  </div>
</article>
"#,
        name = view.name,
        symbol = view.symbol,
        badge_class = badge_class,
        badge = variant.badge_label(),
        trend = view.trend,
        volume = view.volume,
        score_class = style.score_class(pick.score),
        score = view.score,
        rsi_class = style.rsi_class(pick.rsi),
        rsi = view.rsi,
        price = view.price,
        stop = view.stop,
        spark = spark,
        url = view.chart_url,
    )
}

/// 안내 메시지 어조.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Muted => "text-slate-500",
            Tone::Error => "text-rose-400",
        }
    }
}

/// 표 전체 너비의 메시지 행 (빈 결과, 에러).
pub fn message_row(text: &str, tone: Tone) -> String {
    format!(
        r#"<tr><td colspan="6" class="px-6 py-6 text-center text-xs {}">{}</td></tr>"#,
        tone.class(),
        escape_html(text)
    )
}

/// 카드 목록 자리의 메시지.
pub fn message_card(text: &str, tone: Tone) -> String {
    format!(
        r#"<p class="text-xs {} text-center">{}</p>"#,
        tone.class(),
        escape_html(text)
    )
}
