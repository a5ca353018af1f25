//! Turning evaluation results into lines of text for the user.

use crossterm::style::{Color, Stylize};

use crate::evaluator::{EvaluationResult, RunSummary};

/// Subjects longer than this are cut short in reports.
pub const SUBJECT_PREVIEW_CHARS: usize = 50;

/// Render a subject for display: at most [`SUBJECT_PREVIEW_CHARS`] characters,
/// with `...` when anything was cut.  Line breaks and tabs are shown escaped.
pub fn truncate_subject(subject: &str) -> String {
    let mut out = String::new();
    for ch in subject.chars().take(SUBJECT_PREVIEW_CHARS) {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    if subject.chars().count() > SUBJECT_PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

pub fn match_label(matched: bool) -> &'static str {
    if matched { "match" } else { "no match" }
}

/// `passed/total (NN%)`.
pub fn format_score(summary: &RunSummary) -> String {
    format!(
        "{}/{} ({:.0}%)",
        summary.passed,
        summary.total,
        summary.score_fraction() * 100.0
    )
}

/// Closing remark, chosen by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commentary {
    /// Every case agreed.
    Perfect,
    /// More than 70%.
    Solid,
    /// More than 30%.
    Shaky,
    Hopeless,
}

impl Commentary {
    pub fn for_score(score: f64) -> Self {
        if score == 1.0 {
            Self::Perfect
        } else if score > 0.7 {
            Self::Solid
        } else if score > 0.3 {
            Self::Shaky
        } else {
            Self::Hopeless
        }
    }

    /// Commentary for a finished run.  Perfection is judged on the counts,
    /// not on a rounded fraction.
    pub fn for_summary(summary: &RunSummary) -> Self {
        if summary.is_perfect() {
            Self::Perfect
        } else {
            Self::for_score(summary.score_fraction())
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "🎉 Perfect! (Now go and try it on real data.)",
            Self::Solid => "👍 Not bad! (It'll still fail in production, just politely.)",
            Self::Shaky => "🤔 Room for improvement! (Several rooms, actually.)",
            Self::Hopeless => "💀 Ouch. Maybe a plain string method would do?",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Perfect => Color::Green,
            Self::Solid => Color::Cyan,
            Self::Shaky => Color::Yellow,
            Self::Hopeless => Color::Red,
        }
    }
}

/// Formats reports, optionally with ANSI colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Lines announcing a round for `pattern`.
    pub fn header(&self, pattern: &str) -> Vec<String> {
        vec![
            String::new(),
            format!("🔫 Testing pattern: {}", self.paint(pattern, Color::Magenta)),
            "Spinning the regex roulette wheel...".to_string(),
            String::new(),
        ]
    }

    /// Lines reporting a pattern that didn't compile.
    pub fn compile_error(&self, message: &str) -> Vec<String> {
        vec![
            self.paint(&format!("💥 Syntax error: {message}"), Color::Red),
            "Your regex doesn't even compile. Maybe try plain string matching?".to_string(),
        ]
    }

    fn result_lines(&self, result: &EvaluationResult, verbose: bool) -> Vec<String> {
        if result.agree() {
            if verbose {
                return vec![self.paint(&format!("✅ {}", result.case.description), Color::Green)];
            }
            return Vec::new();
        }
        vec![
            self.paint(&format!("❌ {}", result.case.description), Color::Red),
            format!("   Test: '{}'", truncate_subject(result.case.subject)),
            format!("   Expected: {}", match_label(result.expected_match)),
            format!("   Got: {}", match_label(result.actual_match)),
        ]
    }

    /// Lines for a finished run: failures always, passes when `verbose`,
    /// then the score and the commentary.
    pub fn summary(&self, summary: &RunSummary, verbose: bool) -> Vec<String> {
        let mut lines: Vec<String> = summary
            .results
            .iter()
            .flat_map(|r| self.result_lines(r, verbose))
            .collect();
        let commentary = Commentary::for_summary(summary);
        lines.push(String::new());
        lines.push(format!("🎯 Score: {}", format_score(summary)));
        lines.push(self.paint(commentary.message(), commentary.color()));
        lines
    }
}
