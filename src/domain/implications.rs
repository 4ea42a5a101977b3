//! Trading implications derived from a bias result.

use super::bias::{BiasResult, Confidence, Polarity};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradingImplications {
    pub recommendations: Vec<String>,
    pub risk_note: String,
    pub monitoring: Vec<String>,
}

impl TradingImplications {
    pub fn from_bias(instrument: &str, bias: &BiasResult) -> Self {
        let recommendations = match bias.label.polarity() {
            Polarity::Bullish => vec![
                format!("Consider LONG {instrument} positions"),
                "Look for pullbacks as buying opportunities".to_string(),
                "Monitor for trend continuation patterns".to_string(),
            ],
            Polarity::Bearish => vec![
                format!("Consider SHORT {instrument} positions"),
                "Look for rallies as selling opportunities".to_string(),
                "Monitor for breakdown patterns".to_string(),
            ],
            Polarity::Neutral => vec![
                format!("Neutral {instrument} positioning recommended"),
                "Wait for clearer directional signals".to_string(),
                "Consider range-bound trading strategies".to_string(),
            ],
        };

        let risk_note = match bias.confidence {
            Confidence::High => "HIGH confidence - signals align strongly",
            Confidence::Medium => "MEDIUM confidence - use moderate position sizes",
            Confidence::Low => "LOW confidence - use smaller position sizes",
        }
        .to_string();

        Self {
            recommendations,
            risk_note,
            monitoring: vec![
                "Monitor for changes in positioning".to_string(),
                "Review weekly COT updates".to_string(),
            ],
        }
    }
}
