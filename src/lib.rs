//! Regex roulette: test a pattern against edge cases that break in production.
//!
//! A pattern is judged on a fixed catalog of adversarial subjects.  For each
//! one, the pattern's full-match verdict is compared with the verdict of a
//! reference pattern, and the run is scored on how many agree.
//!
//! # Example
//!
//! ```rust
//! use regex_roulette::{Order, catalog, compile, evaluate_all};
//!
//! let pattern = compile(r"\w+").unwrap();
//! let summary = evaluate_all(&pattern, &catalog(), Order::Catalog);
//!
//! assert_eq!(summary.total, 10);
//! assert!(summary.score_fraction() <= 1.0);
//!
//! // Full-match: a substring hit doesn't count.
//! assert!(!compile("foo").unwrap().is_full_match("foobar"));
//!
//! // Broken patterns are reported, not panicked on.
//! assert!(compile("(unclosed").is_err());
//! ```

pub mod catalog;
pub mod console;
pub mod evaluator;
pub mod order;
pub mod report;
pub mod session;

pub use catalog::{CATALOG, EdgeCase, catalog};
pub use console::{Console, StdConsole};
pub use evaluator::{
    CompileError, CompiledPattern, EvaluationResult, RunSummary, compile, evaluate_all,
    evaluate_case,
};
pub use order::{Order, permute};
pub use report::{Commentary, Renderer};
pub use session::{RoundOutcome, Session, SessionOptions};
