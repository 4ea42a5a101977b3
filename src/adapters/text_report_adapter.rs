//! Plain-text console report.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::CotError;
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

const WIDTH: usize = 60;
const RULE_WIDTH: usize = 30;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, CotError> {
        render_text(report).map_err(|e| CotError::Render {
            reason: e.to_string(),
        })
    }
}

fn render_text(report: &AnalysisReport) -> Result<String, std::fmt::Error> {
    let bias = &report.bias;
    let heavy = "=".repeat(WIDTH);
    let mut out = String::new();

    writeln!(out, "{heavy}")?;
    writeln!(out, "{} COT ANALYSIS REPORT", report.instrument.id)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "Report Date: {}", report.record.report_date)?;
    writeln!(out, "Overall Bias: {}", bias.display_label())?;
    writeln!(out, "Confidence: {}", bias.confidence)?;
    writeln!(out, "Score: {:+}", bias.score)?;

    section(&mut out, "KEY METRICS")?;
    for obs in &bias.observations {
        writeln!(out, "  - {obs}")?;
    }

    section(&mut out, "POSITIONING EXTREMES")?;
    let extremes = &bias.positioning_extremes;
    writeln!(out, "  Speculative Long:  {}", pct(extremes.speculative_long_pct))?;
    writeln!(out, "  Speculative Short: {}", pct(extremes.speculative_short_pct))?;
    writeln!(out, "  Extreme Level:     {}", extremes.extreme_level)?;

    section(&mut out, "CONTRARIAN ANALYSIS")?;
    let contrarian = &bias.contrarian_analysis;
    writeln!(out, "  Contrarian Score:       {:+}", contrarian.contrarian_score)?;
    writeln!(
        out,
        "  Smart Money Divergence: {}",
        if contrarian.smart_money_divergence { "Yes" } else { "No" }
    )?;
    writeln!(
        out,
        "  Positioning Tension:    {}",
        if contrarian.positioning_tension { "Detected" } else { "None" }
    )?;

    section(&mut out, "SIGNALS DETECTED")?;
    if bias.signals.is_empty() {
        writeln!(out, "  - No significant signals detected")?;
    }
    for (i, signal) in bias.signals.iter().enumerate() {
        writeln!(out, "  {}. {signal}", i + 1)?;
    }

    section(&mut out, "EXPLANATION")?;
    writeln!(out, "  {}", bias.explanation)?;

    section(&mut out, "TRADING IMPLICATIONS")?;
    let implications = &report.implications;
    for rec in &implications.recommendations {
        writeln!(out, "  - {rec}")?;
    }
    writeln!(out, "  ! {}", implications.risk_note)?;
    for item in &implications.monitoring {
        writeln!(out, "  - {item}")?;
    }

    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "DISCLAIMER: This analysis is for educational purposes only.")?;
    writeln!(out, "Always conduct your own research before trading.")?;
    writeln!(out, "{heavy}")?;

    Ok(out)
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}%"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze;
    use crate::domain::instrument::{InstrumentSpec, SourceGroup};
    use crate::ports::observer_port::NoopObserver;

    const COCOA: InstrumentSpec =
        InstrumentSpec::new("COCOA", SourceGroup::UsdIndex, "COCOA - ICE FUTURES U.S.", "Cocoa futures");

    fn report(all_row: &str) -> AnalysisReport {
        let page = format!("COCOA - ICE FUTURES U.S.\n{all_row}\n");
        analyze(&page, &COCOA, &NoopObserver).unwrap()
    }

    #[test]
    fn renders_every_section() {
        let text = TextReportAdapter
            .render(&report("All : 100,000: 20,000 70,000 0 60,000 15,000"))
            .unwrap();
        assert!(text.contains("COCOA COT ANALYSIS REPORT"));
        assert!(text.contains("Report Date: Unknown"));
        assert!(text.contains("Overall Bias: STRONGLY BULLISH (Contrarian)"));
        assert!(text.contains("Confidence: HIGH"));
        assert!(text.contains("Total Open Interest: 100,000 contracts"));
        assert!(text.contains("Extreme Level:     HIGH"));
        assert!(text.contains("Smart Money Divergence: Yes"));
        assert!(text.contains("Consider LONG COCOA positions"));
        assert!(text.contains("DISCLAIMER"));
    }

    #[test]
    fn neutral_report_lists_no_signals() {
        let text = TextReportAdapter
            .render(&report("All : 100,000: 30,000 30,000 0 30,000 30,000"))
            .unwrap();
        assert!(text.contains("Overall Bias: NEUTRAL\n"));
        assert!(text.contains("No significant signals detected"));
        assert!(text.contains("Neutral COCOA positioning recommended"));
    }
}
