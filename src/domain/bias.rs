//! Contrarian bias scoring.
//!
//! The ladder runs in a fixed order and accumulates a signed score:
//!
//! 1. extreme speculative positioning (fade the crowd)
//! 2. smart-money divergence between speculators and commercials
//! 3. weekly-change tension
//!
//! The score then maps to a label and confidence, escalated when positioning
//! is extreme. Missing metrics never fire a rule.

use super::metrics::{DerivedMetrics, WeeklyChange};
use super::record::PositioningRecord;
use serde::Serialize;
use std::fmt;

const EXTREME_PCT: f64 = 60.0;
const ELEVATED_PCT: f64 = 55.0;
const MAJORITY_PCT: f64 = 50.0;
const STRONG_NET: i64 = 3_000;
const COMBINED_NET: i64 = 5_000;
const WEEKLY_SHIFT: i64 = 1_000;
const STRETCHED_LONG_RATIO: f64 = 1.5;
const STRETCHED_SHORT_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiasLabel {
    StronglyBullish,
    Bullish,
    ModeratelyBullish,
    Neutral,
    ModeratelyBearish,
    Bearish,
    StronglyBearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Bullish,
    Bearish,
    Neutral,
}

impl BiasLabel {
    pub fn polarity(self) -> Polarity {
        match self {
            Self::StronglyBullish | Self::Bullish | Self::ModeratelyBullish => Polarity::Bullish,
            Self::Neutral => Polarity::Neutral,
            Self::ModeratelyBearish | Self::Bearish | Self::StronglyBearish => Polarity::Bearish,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::StronglyBullish => "STRONGLY BULLISH",
            Self::Bullish => "BULLISH",
            Self::ModeratelyBullish => "MODERATELY BULLISH",
            Self::Neutral => "NEUTRAL",
            Self::ModeratelyBearish => "MODERATELY BEARISH",
            Self::Bearish => "BEARISH",
            Self::StronglyBearish => "STRONGLY BEARISH",
        }
    }
}

impl fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtremeLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for ExtremeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositioningExtremes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speculative_long_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speculative_short_pct: Option<f64>,
    pub extreme_level: ExtremeLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContrarianAnalysis {
    /// Combined contribution of the extreme-positioning and divergence rules.
    pub contrarian_score: i32,
    pub smart_money_divergence: bool,
    pub positioning_tension: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasResult {
    pub label: BiasLabel,
    /// Extreme positioning pushed the score toward `label`.
    pub contrarian: bool,
    pub confidence: Confidence,
    pub score: i32,
    pub signals: Vec<String>,
    pub observations: Vec<String>,
    pub explanation: String,
    pub positioning_extremes: PositioningExtremes,
    pub contrarian_analysis: ContrarianAnalysis,
}

impl BiasResult {
    /// Label as shown to people, e.g. `STRONGLY BULLISH (Contrarian)`.
    pub fn display_label(&self) -> String {
        if self.contrarian {
            format!("{} (Contrarian)", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// Score `record` and its `metrics` into a bias result.
pub fn score_bias(record: &PositioningRecord, metrics: &DerivedMetrics) -> BiasResult {
    let mut signals = Vec::new();
    let long_pct = metrics.noncommercial_long_pct;
    let short_pct = metrics.noncommercial_short_pct;

    let extreme_delta = extreme_positioning(long_pct, short_pct, &mut signals);
    let extreme_level = extreme_level(long_pct, short_pct);

    let divergence_delta =
        smart_money_divergence(metrics.noncommercial_net, metrics.commercial_net, &mut signals);

    let tension_delta = match metrics.weekly {
        Some(weekly) => weekly_tension(weekly, metrics.commercial_weekly, &mut signals),
        None => 0,
    };

    let score = extreme_delta + divergence_delta + tension_delta;
    let (label, mut confidence) = classify(score, long_pct, short_pct);
    if extreme_level == ExtremeLevel::High && confidence == Confidence::Medium {
        confidence = Confidence::High;
    }

    let contrarian = match label.polarity() {
        Polarity::Bullish => extreme_delta > 0,
        Polarity::Bearish => extreme_delta < 0,
        Polarity::Neutral => false,
    };

    informational_signals(metrics, &mut signals);

    BiasResult {
        label,
        contrarian,
        confidence,
        score,
        signals,
        observations: key_observations(record, metrics),
        explanation: explanation(label, extreme_level, metrics),
        positioning_extremes: PositioningExtremes {
            speculative_long_pct: long_pct,
            speculative_short_pct: short_pct,
            extreme_level,
        },
        contrarian_analysis: ContrarianAnalysis {
            contrarian_score: extreme_delta + divergence_delta,
            smart_money_divergence: divergence_delta != 0,
            positioning_tension: tension_delta != 0,
        },
    }
}

fn above(pct: Option<f64>, threshold: f64) -> bool {
    pct.is_some_and(|p| p > threshold)
}

fn extreme_positioning(long_pct: Option<f64>, short_pct: Option<f64>, signals: &mut Vec<String>) -> i32 {
    if above(short_pct, EXTREME_PCT) {
        signals.push(format!(
            "Extreme speculative short positioning ({}) - contrarian BULLISH",
            pct(short_pct)
        ));
        3
    } else if above(long_pct, EXTREME_PCT) {
        signals.push(format!(
            "Extreme speculative long positioning ({}) - contrarian BEARISH",
            pct(long_pct)
        ));
        -3
    } else if above(short_pct, ELEVATED_PCT) {
        signals.push(format!(
            "Elevated speculative short positioning ({}) - mildly BULLISH",
            pct(short_pct)
        ));
        1
    } else if above(long_pct, ELEVATED_PCT) {
        signals.push(format!(
            "Elevated speculative long positioning ({}) - mildly BEARISH",
            pct(long_pct)
        ));
        -1
    } else {
        0
    }
}

fn extreme_level(long_pct: Option<f64>, short_pct: Option<f64>) -> ExtremeLevel {
    let max = match (long_pct, short_pct) {
        (Some(l), Some(s)) => Some(l.max(s)),
        (l, s) => l.or(s),
    };
    match max {
        Some(m) if m > EXTREME_PCT => ExtremeLevel::High,
        Some(m) if m > ELEVATED_PCT => ExtremeLevel::Moderate,
        _ => ExtremeLevel::Low,
    }
}

fn smart_money_divergence(nc_net: i64, c_net: i64, signals: &mut Vec<String>) -> i32 {
    if nc_net < -STRONG_NET && c_net > STRONG_NET {
        signals.push(format!(
            "Smart money divergence: speculators net short {}, commercials net long {} - BULLISH",
            thousands(nc_net),
            thousands(c_net)
        ));
        2
    } else if nc_net > STRONG_NET && c_net < -STRONG_NET {
        signals.push(format!(
            "Smart money divergence: speculators net long {}, commercials net short {} - BEARISH",
            thousands(nc_net),
            thousands(c_net)
        ));
        -2
    } else if nc_net.signum() * c_net.signum() < 0
        && nc_net.saturating_abs().saturating_add(c_net.saturating_abs()) > COMBINED_NET
    {
        if nc_net < 0 {
            signals.push("Commercials lean against net-short speculators - mildly BULLISH".to_string());
            1
        } else {
            signals.push("Commercials lean against net-long speculators - mildly BEARISH".to_string());
            -1
        }
    } else {
        0
    }
}

fn weekly_tension(weekly: WeeklyChange, commercial: Option<WeeklyChange>, signals: &mut Vec<String>) -> i32 {
    let mut delta = 0;

    if weekly.short_change > weekly.long_change && weekly.short_change > WEEKLY_SHIFT {
        signals.push(format!(
            "Speculators added {} shorts this week - building short tension",
            thousands(weekly.short_change)
        ));
        delta += 1;
    } else if weekly.long_change > weekly.short_change && weekly.long_change > WEEKLY_SHIFT {
        signals.push(format!(
            "Speculators added {} longs this week - building long tension",
            thousands(weekly.long_change)
        ));
        delta -= 1;
    }

    if let Some(commercial) = commercial {
        let spec_net = weekly.net_change;
        if spec_net.saturating_abs() >= WEEKLY_SHIFT {
            if commercial.net_change > 0 && spec_net < 0 {
                signals.push(format!(
                    "Commercials added {} net long while speculators sold - BULLISH",
                    thousands(commercial.net_change)
                ));
                delta += 1;
            } else if commercial.net_change < 0 && spec_net > 0 {
                signals.push(format!(
                    "Commercials added {} net short while speculators bought - BEARISH",
                    thousands(commercial.net_change.saturating_abs())
                ));
                delta -= 1;
            }
        }
    }

    delta
}

fn classify(score: i32, long_pct: Option<f64>, short_pct: Option<f64>) -> (BiasLabel, Confidence) {
    match score {
        s if s >= 3 => (BiasLabel::StronglyBullish, Confidence::High),
        2 if above(short_pct, EXTREME_PCT) => (BiasLabel::Bullish, Confidence::High),
        2 => (BiasLabel::Bullish, Confidence::Medium),
        1 => (BiasLabel::ModeratelyBullish, Confidence::Medium),
        s if s <= -3 => (BiasLabel::StronglyBearish, Confidence::High),
        -2 if above(long_pct, EXTREME_PCT) => (BiasLabel::Bearish, Confidence::High),
        -2 => (BiasLabel::Bearish, Confidence::Medium),
        -1 => (BiasLabel::ModeratelyBearish, Confidence::Medium),
        _ => (BiasLabel::Neutral, Confidence::Low),
    }
}

/// Non-scoring context about the crowd.
fn informational_signals(metrics: &DerivedMetrics, signals: &mut Vec<String>) {
    if above(metrics.noncommercial_long_pct, MAJORITY_PCT) {
        signals.push(format!(
            "Speculators hold a majority long share ({})",
            pct(metrics.noncommercial_long_pct)
        ));
    } else if above(metrics.noncommercial_short_pct, MAJORITY_PCT) {
        signals.push(format!(
            "Speculators hold a majority short share ({})",
            pct(metrics.noncommercial_short_pct)
        ));
    }

    match metrics.noncommercial_ratio {
        Some(r) if r > STRETCHED_LONG_RATIO => {
            signals.push(format!("Speculative long/short ratio {r:.2} is stretched long"));
        }
        Some(r) if r < STRETCHED_SHORT_RATIO => {
            signals.push(format!("Speculative long/short ratio {r:.2} is stretched short"));
        }
        _ => {}
    }
}

fn key_observations(record: &PositioningRecord, metrics: &DerivedMetrics) -> Vec<String> {
    vec![
        format!(
            "Total Open Interest: {} contracts",
            thousands(record.total_open_interest as i64)
        ),
        format!(
            "Non-Commercial Net Position: {} contracts",
            thousands(metrics.noncommercial_net)
        ),
        format!(
            "Commercial Net Position: {} contracts",
            thousands(metrics.commercial_net)
        ),
        format!("Speculative Long %: {}", pct(metrics.noncommercial_long_pct)),
        format!("Speculative Short %: {}", pct(metrics.noncommercial_short_pct)),
    ]
}

fn explanation(label: BiasLabel, level: ExtremeLevel, metrics: &DerivedMetrics) -> String {
    let long = pct(metrics.noncommercial_long_pct);
    let short = pct(metrics.noncommercial_short_pct);
    let nc_net = thousands(metrics.noncommercial_net);
    let c_net = thousands(metrics.commercial_net);
    let extreme = level == ExtremeLevel::High;

    match (label.polarity(), extreme) {
        (Polarity::Bullish, true) => format!(
            "Speculators are heavily short at {short} of open interest. Crowded short \
             positioning tends to unwind through short covering, and commercials sit at \
             {c_net} net. The contrarian read favours upside."
        ),
        (Polarity::Bullish, false) => format!(
            "Speculators hold {short} short against {long} long (net {nc_net}) while \
             commercials are {c_net} net. Positioning leans toward upside without being \
             extreme."
        ),
        (Polarity::Bearish, true) => format!(
            "Speculators are heavily long at {long} of open interest. Crowded long \
             positioning tends to unwind through liquidation, and commercials sit at \
             {c_net} net. The contrarian read favours downside."
        ),
        (Polarity::Bearish, false) => format!(
            "Speculators hold {long} long against {short} short (net {nc_net}) while \
             commercials are {c_net} net. Positioning leans toward downside without being \
             extreme."
        ),
        (Polarity::Neutral, _) => format!(
            "Speculators are balanced at {long} long and {short} short (net {nc_net}). \
             No positioning extreme is present; wait for extremes before taking a \
             contrarian view."
        ),
    }
}

fn pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Format an integer with `,` thousands separators.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
