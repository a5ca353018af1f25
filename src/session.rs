//! The interactive prompt loop.
//!
//! A `Session` keeps asking for patterns, runs each one against the catalog
//! and prints the report, until the user types `quit` or input runs out.

use anyhow::Result;
use itertools::Itertools;
use phf::{Map, phf_map};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::catalog;
use crate::console::Console;
use crate::evaluator::{RunSummary, compile, evaluate_all};
use crate::order::Order;
use crate::report::Renderer;

const PATTERN_PROMPT: &str = "Enter regex pattern (or 'quit' to cry): ";
const VERBOSE_PROMPT: &str = "Verbose mode? (y/n): ";
const SEPARATOR_WIDTH: usize = 50;

/// Words typed at the pattern prompt that aren't patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCommand {
    Quit,
    ListCases,
    Help,
}

/// Keys are lower case; input is lower-cased before lookup.
const COMMANDS: Map<&'static str, SessionCommand> = phf_map! {
    "quit" => SessionCommand::Quit,
    ":cases" => SessionCommand::ListCases,
    ":help" => SessionCommand::Help,
};

fn lookup_command(input: &str) -> Option<SessionCommand> {
    COMMANDS.get(input.to_lowercase().as_str()).copied()
}

/// Settings fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Shuffle each round's results.
    pub shuffle: bool,
    /// `Some` fixes verbosity; `None` asks every round.
    pub verbose: Option<bool>,
    /// Seed for the shuffle RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            verbose: None,
            seed: None,
            color: false,
        }
    }
}

/// What came of testing one pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    Scored(RunSummary),
    /// The pattern didn't compile; the diagnostic was printed.
    CompileFailed,
}

/// The interactive session state.
pub struct Session {
    options: SessionOptions,
    renderer: Renderer,
    rng: StdRng,
    rounds: usize,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            options,
            renderer: Renderer::new(options.color),
            rng,
            rounds: 0,
        }
    }

    /// Number of patterns that compiled and were scored.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    fn next_order(&mut self) -> Order {
        if self.options.shuffle {
            let seed = self.rng.next_u64();
            debug!(seed, "shuffling round");
            Order::Shuffled { seed }
        } else {
            Order::Catalog
        }
    }

    /// Test one pattern and print its report.
    pub fn run_round(
        &mut self,
        pattern: &str,
        verbose: bool,
        console: &mut dyn Console,
    ) -> Result<RoundOutcome> {
        console.write_lines(&self.renderer.header(pattern))?;

        let compiled = match compile(pattern) {
            Ok(compiled) => compiled,
            Err(err) => {
                warn!(pattern, error = %err, "pattern failed to compile");
                console.write_lines(&self.renderer.compile_error(&err.message))?;
                return Ok(RoundOutcome::CompileFailed);
            }
        };

        let order = self.next_order();
        let summary = evaluate_all(&compiled, &catalog(), order);
        self.rounds += 1;
        info!(
            pattern = compiled.as_str(),
            passed = summary.passed,
            total = summary.total,
            "round complete"
        );
        console.write_lines(&self.renderer.summary(&summary, verbose))?;
        Ok(RoundOutcome::Scored(summary))
    }

    /// Test each of `patterns` once, without prompting.
    ///
    /// Returns `false` if any pattern failed to compile.
    pub fn run_patterns(
        &mut self,
        patterns: &[String],
        verbose: bool,
        console: &mut dyn Console,
    ) -> Result<bool> {
        let mut all_compiled = true;
        for pattern in patterns {
            let outcome = self.run_round(pattern, verbose, console)?;
            if matches!(outcome, RoundOutcome::CompileFailed) {
                all_compiled = false;
            }
        }
        Ok(all_compiled)
    }

    fn ask_verbose(&self, console: &mut dyn Console) -> Result<Option<bool>> {
        if let Some(verbose) = self.options.verbose {
            return Ok(Some(verbose));
        }
        Ok(console
            .read_line(VERBOSE_PROMPT)?
            .map(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn list_cases(&self, console: &mut dyn Console) -> Result<()> {
        let cases = catalog();
        console.write_line(&format!("{} edge cases are waiting:", cases.len()))?;
        let listing = cases
            .iter()
            .enumerate()
            .map(|(i, case)| format!("  {:>2}. {}", i + 1, case.description))
            .join("\n");
        console.write_line(&listing)
    }

    fn help(&self, console: &mut dyn Console) -> Result<()> {
        console.write_line("Type a regex to test it against every edge case.")?;
        console.write_line(&format!(
            "Commands: {}",
            COMMANDS.keys().sorted().join(", ")
        ))
    }

    /// Run the prompt loop until the user quits or input ends.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        console.write_line("=== Regex Roulette ===")?;
        console.write_line("Test your regex against edge cases that will break in production!")?;
        console.write_line("")?;

        loop {
            let Some(line) = console.read_line(PATTERN_PROMPT)? else {
                break;
            };
            let pattern = line.trim();

            match lookup_command(pattern) {
                Some(SessionCommand::Quit) => break,
                Some(SessionCommand::ListCases) => {
                    self.list_cases(console)?;
                    continue;
                }
                Some(SessionCommand::Help) => {
                    self.help(console)?;
                    continue;
                }
                None => {}
            }

            let Some(verbose) = self.ask_verbose(console)? else {
                break;
            };
            self.run_round(pattern, verbose, console)?;
            console.write_line("")?;
            console.write_line(&"=".repeat(SEPARATOR_WIDTH))?;
            console.write_line("")?;
        }

        console.write_line("")?;
        console.write_line("🏃💨 Running away: the best debugging strategy!")?;
        debug!(rounds = self.rounds, "session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MockConsole;

    fn catalog_order_options() -> SessionOptions {
        SessionOptions {
            shuffle: false,
            ..SessionOptions::default()
        }
    }

    fn run_session(options: SessionOptions, input: &[&str]) -> (Session, MockConsole) {
        let mut session = Session::new(options);
        let mut console = MockConsole::new(input);
        session.run(&mut console).unwrap();
        (session, console)
    }

    #[test]
    fn test_lookup_command_case_insensitive() {
        assert_eq!(lookup_command("quit"), Some(SessionCommand::Quit));
        assert_eq!(lookup_command("QuIt"), Some(SessionCommand::Quit));
        assert_eq!(lookup_command(":CASES"), Some(SessionCommand::ListCases));
        assert_eq!(lookup_command("quitter"), None);
        assert_eq!(lookup_command("a+"), None);
    }

    #[test]
    fn test_quit_immediately() {
        let (session, console) = run_session(catalog_order_options(), &["QUIT"]);
        assert_eq!(session.rounds(), 0);
        assert!(console.printed("=== Regex Roulette ==="));
        assert!(console.printed("Running away"));
        assert_eq!(console.prompts, vec![PATTERN_PROMPT]);
    }

    #[test]
    fn test_eof_ends_session() {
        let (session, console) = run_session(catalog_order_options(), &[]);
        assert_eq!(session.rounds(), 0);
        assert!(console.printed("Running away"));
    }

    #[test]
    fn test_eof_at_verbose_prompt_ends_session() {
        let (session, console) = run_session(catalog_order_options(), &["a+"]);
        assert_eq!(session.rounds(), 0);
        assert_eq!(console.prompts, vec![PATTERN_PROMPT, VERBOSE_PROMPT]);
    }

    #[test]
    fn test_one_round_then_quit() {
        let (session, console) = run_session(catalog_order_options(), &["  .*  ", "n", "quit"]);
        assert_eq!(session.rounds(), 1);
        assert!(console.printed("🔫 Testing pattern: .*"));
        assert!(console.printed("🎯 Score: 6/10 (60%)"));
        assert!(!console.printed("✅"));
        assert!(console.printed(&"=".repeat(SEPARATOR_WIDTH)));
    }

    #[test]
    fn test_verbose_answer_shows_passes() {
        let (_, console) = run_session(catalog_order_options(), &[".*", "Y", "quit"]);
        assert!(console.printed("✅"));
    }

    #[test]
    fn test_fixed_verbosity_skips_prompt() {
        let options = SessionOptions {
            verbose: Some(true),
            ..catalog_order_options()
        };
        let (session, console) = run_session(options, &[".*", "quit"]);
        assert_eq!(session.rounds(), 1);
        assert!(!console.prompts.iter().any(|p| p == VERBOSE_PROMPT));
        assert!(console.printed("✅"));
    }

    #[test]
    fn test_compile_error_continues_session() {
        let (session, console) =
            run_session(catalog_order_options(), &["(unclosed", "n", "xyzzy", "n", "quit"]);
        assert_eq!(session.rounds(), 1);
        assert!(console.printed("💥 Syntax error:"));
        assert!(console.printed("🎯 Score: 5/10 (50%)"));
    }

    #[test]
    fn test_list_cases_command() {
        let (session, console) = run_session(catalog_order_options(), &[":cases", "quit"]);
        assert_eq!(session.rounds(), 0);
        assert!(console.printed("10 edge cases are waiting:"));
        assert!(console.printed("Empty string"));
    }

    #[test]
    fn test_help_command() {
        let (_, console) = run_session(catalog_order_options(), &[":help", "quit"]);
        assert!(console.printed("Commands: :cases, :help, quit"));
    }

    #[test]
    fn test_run_round_outcomes() {
        let mut session = Session::new(catalog_order_options());
        let mut console = MockConsole::new(&[]);
        assert_eq!(
            session.run_round("(", false, &mut console).unwrap(),
            RoundOutcome::CompileFailed
        );
        match session.run_round("xyzzy", false, &mut console).unwrap() {
            RoundOutcome::Scored(summary) => assert_eq!(summary.passed, 5),
            other => panic!("expected a score, got {other:?}"),
        }
    }

    #[test]
    fn test_run_patterns_reports_compile_failure() {
        let mut session = Session::new(catalog_order_options());
        let mut console = MockConsole::new(&[]);
        let patterns = vec![".*".to_string(), "(unclosed".to_string(), "xyzzy".to_string()];
        let all_compiled = session.run_patterns(&patterns, false, &mut console).unwrap();
        assert!(!all_compiled);
        assert_eq!(session.rounds(), 2);
        assert!(console.prompts.is_empty());
        assert!(console.printed("🎯 Score: 6/10 (60%)"));
        assert!(console.printed("💥 Syntax error:"));
        assert!(console.printed("🎯 Score: 5/10 (50%)"));
    }

    #[test]
    fn test_run_patterns_all_valid() {
        let mut session = Session::new(catalog_order_options());
        let mut console = MockConsole::new(&[]);
        let patterns = vec![r"\w+".to_string(), "a+".to_string()];
        assert!(session.run_patterns(&patterns, true, &mut console).unwrap());
        assert_eq!(session.rounds(), 2);
        assert!(console.printed("✅"));
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let options = SessionOptions {
            shuffle: true,
            verbose: Some(true),
            seed: Some(1234),
            color: false,
        };
        let (_, a) = run_session(options, &[".*", "a+", "quit"]);
        let (_, b) = run_session(options, &[".*", "a+", "quit"]);
        assert_eq!(a.output, b.output);
    }
}
