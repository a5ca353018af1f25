//! The fixed table of edge cases every pattern is tested against.
//!
//! Each case pairs an adversarial subject with a reference pattern.  The
//! reference pattern's full-match verdict on the subject is the "expected"
//! answer that a user's pattern has to agree with.

/// One torture-test record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeCase {
    /// The text to test.
    pub subject: &'static str,
    /// Pattern whose full-match verdict on `subject` is the expected answer.
    pub reference_pattern: &'static str,
    /// Human-readable label, only used for reporting.
    pub description: &'static str,
}

impl EdgeCase {
    pub const fn new(
        subject: &'static str,
        reference_pattern: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            subject,
            reference_pattern,
            description,
        }
    }
}

/// Number of records in [`CATALOG`].
pub const CATALOG_LEN: usize = 10;

/// Long enough that a bounded repetition can't possibly cover it.
const LONG_RUN_BYTES: [u8; 1000] = [b'a'; 1000];
const LONG_RUN: &str = match std::str::from_utf8(&LONG_RUN_BYTES) {
    Ok(s) => s,
    Err(_) => panic!("ASCII is valid UTF-8"),
};

/// The edge cases, in their canonical order.
pub static CATALOG: [EdgeCase; CATALOG_LEN] = [
    EdgeCase::new(
        "hello world",
        r"hello\s+world",
        "Basic sanity check (you'll still find a way to fail it)",
    ),
    EdgeCase::new(
        "hello\nworld",
        r"hello.world",
        "Dot doesn't match newline (surprise!)",
    ),
    EdgeCase::new(
        "foo bar baz",
        r"foo.*baz",
        "Greedy or lazy? Nobody remembers",
    ),
    EdgeCase::new(
        "123-456-7890",
        r"\d{3}-\d{3}-\d{4}",
        "Phone number (until someone dials from abroad)",
    ),
    EdgeCase::new(
        "user@example.com",
        r"\w+@\w+\.\w+",
        "Email address (rejects most real ones)",
    ),
    EdgeCase::new("", r"^.*$", "Empty string: does nothing match?"),
    EdgeCase::new(LONG_RUN, r"a{5,10}", "Long input: where greed goes to die"),
    EdgeCase::new("café", r"cafe", "Unicode: accents are not decoration"),
    EdgeCase::new(
        "  spaces  ",
        r"^spaces$",
        "Whitespace: the silent killer",
    ),
    EdgeCase::new(
        "price: $19.99",
        r"\$\d+",
        "Escaping special characters (did you remember?)",
    ),
];

/// Return the edge cases in catalog order.
pub fn catalog() -> Vec<EdgeCase> {
    CATALOG.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::compile;

    #[test]
    fn test_catalog_has_ten_cases() {
        assert_eq!(catalog().len(), 10);
        assert_eq!(catalog().len(), CATALOG_LEN);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(catalog(), catalog());
    }

    #[test]
    fn test_reference_patterns_compile() {
        for case in catalog() {
            assert!(
                compile(case.reference_pattern).is_ok(),
                "reference pattern {:?} should compile",
                case.reference_pattern
            );
        }
    }

    #[test]
    fn test_long_run_is_a_thousand_as() {
        assert_eq!(LONG_RUN.len(), 1000);
        assert!(LONG_RUN.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_descriptions_unique() {
        let mut descriptions: Vec<_> = catalog().iter().map(|c| c.description).collect();
        descriptions.sort_unstable();
        descriptions.dedup();
        assert_eq!(descriptions.len(), CATALOG_LEN);
    }

    #[test]
    fn test_covers_required_scenarios() {
        let subjects: Vec<_> = catalog().iter().map(|c| c.subject).collect();
        assert!(subjects.contains(&""));
        assert!(subjects.contains(&"hello\nworld"));
        assert!(subjects.contains(&"café"));
        assert!(subjects.contains(&"  spaces  "));
        assert!(subjects.iter().any(|s| s.contains('$')));
        assert!(subjects.iter().any(|s| s.len() == 1000));
    }
}
