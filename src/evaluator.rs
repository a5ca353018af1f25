//! Full-match evaluation of a user pattern against the edge-case catalog.
//!
//! Every verdict here is a *full* match: the pattern has to account for the
//! whole subject, start to end, whether or not it carries its own anchors.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::catalog::{CATALOG, CATALOG_LEN, EdgeCase};
use crate::order::{Order, permute};

/// A pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub pattern: String,
    /// The regex engine's diagnostic.
    pub message: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CompileError {}

impl CompileError {
    fn from_regex(pattern: &str, err: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}

/// A user pattern, compiled with both ends anchored.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    anchored: Regex,
}

impl CompiledPattern {
    /// The pattern as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if the pattern matches the whole of `subject`.
    pub fn is_full_match(&self, subject: &str) -> bool {
        self.anchored.is_match(subject)
    }
}

/// Build the anchored form of a pattern already known to compile bare.
fn anchored_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z")).or_else(|_| {
        // A trailing `#` comment under `(?x)` eats the closing group.  The
        // newline ends the comment and is ignored in verbose mode.
        Regex::new(&format!("\\A(?:{pattern}\n)\\z"))
    })
}

/// Compile `pattern` for full-match evaluation.
pub fn compile(pattern: &str) -> Result<CompiledPattern, CompileError> {
    debug!(pattern, "compiling pattern");

    // The bare pattern is compiled first, so errors point at what the user
    // typed and unbalanced input like `a)|(b` can't sneak through the wrapper.
    Regex::new(pattern).map_err(|err| CompileError::from_regex(pattern, err))?;
    let anchored =
        anchored_regex(pattern).map_err(|err| CompileError::from_regex(pattern, err))?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        anchored,
    })
}

/// Outcome of one pattern on one edge case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationResult {
    pub case: EdgeCase,
    /// Full-match verdict of the case's reference pattern.
    pub expected_match: bool,
    /// Full-match verdict of the user's pattern.
    pub actual_match: bool,
}

impl EvaluationResult {
    pub fn agree(&self) -> bool {
        self.expected_match == self.actual_match
    }
}

/// Results of one pattern over a sequence of cases.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub results: Vec<EvaluationResult>,
    pub passed: usize,
    pub total: usize,
}

impl RunSummary {
    /// `passed / total`, in `[0, 1]`.  An empty run scores zero.
    pub fn score_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }

    /// Results the pattern got wrong, in presentation order.
    pub fn failures(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| !r.agree())
    }
}

/// Reference verdicts for [`CATALOG`], computed on first use.
static CATALOG_VERDICTS: LazyLock<[bool; CATALOG_LEN]> =
    LazyLock::new(|| CATALOG.map(|case| reference_verdict(&case)));

fn reference_verdict(case: &EdgeCase) -> bool {
    anchored_regex(case.reference_pattern)
        .unwrap_or_else(|err| {
            panic!(
                "reference pattern {:?} is invalid: {err}",
                case.reference_pattern
            )
        })
        .is_match(case.subject)
}

/// Full-match verdict of a case's reference pattern on its own subject.
///
/// Catalog cases are looked up; anything else is matched on the spot.
///
/// # Panics
///
/// If the reference pattern does not compile, which the catalog tests rule out.
pub fn expected_match(case: &EdgeCase) -> bool {
    match CATALOG.iter().position(|c| c == case) {
        Some(index) => CATALOG_VERDICTS[index],
        None => reference_verdict(case),
    }
}

/// Evaluate `compiled` against one case.
pub fn evaluate_case(compiled: &CompiledPattern, case: &EdgeCase) -> EvaluationResult {
    let result = EvaluationResult {
        case: *case,
        expected_match: expected_match(case),
        actual_match: compiled.is_full_match(case.subject),
    };
    trace!(
        description = case.description,
        expected = result.expected_match,
        actual = result.actual_match,
        "evaluated case"
    );
    result
}

/// Evaluate `compiled` against every case, presented in `order`.
///
/// The order only affects `results`; the counts are the same for any
/// permutation of `cases`.
pub fn evaluate_all(compiled: &CompiledPattern, cases: &[EdgeCase], order: Order) -> RunSummary {
    let results: Vec<EvaluationResult> = permute(cases, order)
        .iter()
        .map(|case| evaluate_case(compiled, case))
        .collect();
    let passed = results.iter().filter(|r| r.agree()).count();
    RunSummary {
        total: results.len(),
        passed,
        results,
    }
}
