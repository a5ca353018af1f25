//! Line-oriented console I/O.
//!
//! Provides a `Console` trait for prompting and printing, and two
//! implementations:
//! - `StdConsole` for stdin/stdout
//! - `MockConsole` for testing

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Abstraction over line-at-a-time terminal interaction.
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print one line.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Print each of `lines`.
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// Console on the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}").context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read stdin")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(io::stdout().lock(), "{line}").context("Failed to write stdout")
    }
}

/// Mock console for testing. Replays queued input and records output.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockConsole {
    pub input: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

#[cfg(test)]
impl MockConsole {
    pub fn new(input: &[&str]) -> Self {
        Self {
            input: input.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// True if any output line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Console for MockConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_input_then_eof() {
        let mut console = MockConsole::new(&["one", "two"]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("one"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("two"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts.len(), 3);
    }

    #[test]
    fn test_write_lines() {
        let mut console = MockConsole::new(&[]);
        console
            .write_lines(&["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(console.output, vec!["a", "b"]);
        assert!(console.printed("b"));
    }
}
