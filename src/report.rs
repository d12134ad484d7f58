//! End-of-session report and its output formats.
//!
//! The report is a flat snapshot of a [`Session`]: one row per finished round
//! plus totals. Formatters turn it into text for the terminal or JSON for
//! other tools.

use serde::Serialize;

use crate::color::HexColor;
use crate::scoring::{round_half_away, Verdict};
use crate::session::Session;

/// One finished round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRow {
    /// 1-based round number.
    pub round: usize,
    pub target: HexColor,
    pub guess: HexColor,
    pub score: f64,
    pub remark: &'static str,
}

/// Snapshot of a session's results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub mode: String,
    pub finished: bool,
    pub total_rounds: usize,
    pub rounds: Vec<RoundRow>,
    pub final_score: f64,
    pub max_score: f64,
}

impl SessionReport {
    pub fn from_session(session: &Session) -> Self {
        let rounds = session
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| RoundRow {
                round: i + 1,
                target: record.target(),
                guess: record.guess(),
                score: record.score(),
                remark: Verdict::from_score(record.score()).remark(),
            })
            .collect();

        Self {
            mode: session.mode().to_string(),
            finished: session.is_finished(),
            total_rounds: session.total_rounds(),
            rounds,
            final_score: session.final_score(),
            max_score: session.max_score(),
        }
    }

    /// Final score rounded to one decimal for display, e.g. `"23.4"`.
    pub fn display_score(&self) -> String {
        format!("{:.1}", round_half_away(self.final_score, 1))
    }

    pub fn display_max(&self) -> String {
        format!("{:.1}", self.max_score)
    }
}

/// Implement this trait to add new output formats.
pub trait ReportFormatter {
    fn format(&self, report: &SessionReport) -> String;
}

/// Plain table for terminal output.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &SessionReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Results ({} mode, {}/{} rounds)\n",
            report.mode,
            report.rounds.len(),
            report.total_rounds
        ));

        let separator = "─".repeat(44);
        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:<9} {:<9} {:>6}\n",
            "Round", "Target", "Guess", "Score"
        ));
        output.push_str(&separator);
        output.push('\n');

        for row in &report.rounds {
            output.push_str(&format!(
                "#{:<5} {:<9} {:<9} {:>6.2}\n",
                row.round,
                row.target.as_hex(),
                row.guess.as_hex(),
                row.score
            ));
        }

        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!(
            "You scored {} out of {}\n",
            report.display_score(),
            report.display_max()
        ));

        output
    }
}

/// JSON document, pretty-printed unless `compact` is set.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub compact: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SessionReport) -> String {
        let result = if self.compact {
            serde_json::to_string(report)
        } else {
            serde_json::to_string_pretty(report)
        };
        // Every field serializes as a string, number or bool.
        result.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DifficultyMode;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn finished_session() -> Session {
        let config = GameConfig {
            total_rounds: 2,
            ..GameConfig::for_mode(DifficultyMode::Standard)
        };
        let mut session = Session::with_rng(config, StdRng::seed_from_u64(1));
        let target = session.target();
        session.complete_round(target).unwrap();
        session.complete_round(HexColor::BLACK).unwrap();
        session
    }

    #[test]
    fn report_rows_follow_history() {
        let session = finished_session();
        let report = SessionReport::from_session(&session);
        assert!(report.finished);
        assert_eq!(report.rounds.len(), 2);
        assert_eq!(report.rounds[0].round, 1);
        assert_eq!(report.rounds[0].score, 10.0);
        assert_eq!(report.rounds[0].remark, Verdict::Printer.remark());
        assert_eq!(report.rounds[1].guess, HexColor::BLACK);
        assert_eq!(report.max_score, 20.0);
        assert_eq!(report.final_score, session.final_score());
    }

    #[test]
    fn display_score_rounds_to_tenths() {
        let session = finished_session();
        let mut report = SessionReport::from_session(&session);
        report.final_score = 23.25;
        assert_eq!(report.display_score(), "23.3");
        report.final_score = 50.0;
        assert_eq!(report.display_score(), "50.0");
        assert_eq!(report.display_max(), "20.0");
    }

    #[test]
    fn text_formatter_structure() {
        let session = finished_session();
        let report = SessionReport::from_session(&session);
        let output = TextFormatter.format(&report);

        assert!(output.contains("standard mode"));
        assert!(output.contains("Round"));
        assert!(output.contains(&report.rounds[0].target.as_hex()));
        assert!(output.contains("#000000"));
        assert!(output.contains("10.00"));
        assert!(output.contains("out of 20.0"));
    }

    #[test]
    fn json_formatter_round_trips_through_value() {
        let session = finished_session();
        let report = SessionReport::from_session(&session);
        let output = JsonFormatter { compact: true }.format(&report);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["mode"], "standard");
        assert_eq!(value["rounds"].as_array().unwrap().len(), 2);
        assert_eq!(value["rounds"][1]["guess"], "#000000");
        assert_eq!(value["max_score"], 20.0);
        assert!(!output.contains('\n'));
    }
}
