//! # YAML key order linter
//!
//! Checks that the keys of every YAML mapping are lexically sorted, at every nesting level,
//! while streaming the document's events. No document tree is built.
//!
//! ```
//! let violations = yks_lint::check_str("b: 1\na: 2\n", "config.yaml".into()).unwrap();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].to_diagnostic().msg, "key 'a' must be before 'b'");
//! ```

use thiserror::Error;
use yks_diagnostic::{Diagnostic, Severity, SourceId, SourcePosition};
use yks_parser::{ParseError, ParseEvent};

pub use context::{Context, ContextKind, ContextStack};
pub use order::OrderChecker;

mod context;
mod order;

/// A key that sorts before the key preceding it in the same mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub position: SourcePosition,
    pub key: String,
    /// The key that `key` must be placed before
    pub previous_key: String,
}

impl Violation {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(
            self.position.clone(),
            format!(
                "key '{}' must be before '{}'",
                self.key, self.previous_key
            )
            .into(),
            Severity::Error,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    #[error("Failed to parse YAML")]
    Parse(#[from] ParseError),

    /// An end event without a matching start event. The event source is broken.
    #[error("Structure closed more often than opened")]
    StackUnderflow,
}

/// Checks one event stream, returning every ordering violation in document order
pub fn check_sorted<I>(events: I) -> Result<Vec<Violation>, LintError>
where
    I: IntoIterator<Item = Result<ParseEvent, ParseError>>,
{
    let mut checker = OrderChecker::new();
    let mut violations = Vec::new();
    for event in events {
        if let Some(violation) = checker.check_event(&event?)? {
            violations.push(violation);
        }
    }
    Ok(violations)
}

/// Parses and checks a YAML document
pub fn check_str(text: &str, source: SourceId) -> Result<Vec<Violation>, LintError> {
    check_sorted(yks_parser::parse(text, source))
}
