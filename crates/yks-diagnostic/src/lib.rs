//! # yaml-key-sort diagnostics
//!
//! Source positions, diagnostics and the renderers that turn them into text for humans and CI
//! systems.

use std::{borrow::Cow, fmt, sync::Arc};

pub use render::{OutputFormat, RenderError, Renderer, UnknownFormat};
use text_range::TextRange;

mod render;
pub mod text_range;

// TODO: https://doc.rust-lang.org/nightly/nightly-rustc/rustc_error_messages/enum.DiagMessage.html
pub type DiagnosticMessage = Cow<'static, str>;

/// Display name of the document a position points into, usually its path
pub type SourceId = Arc<str>;

/// A location in a YAML document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub source: SourceId,
    /// Zero-based line
    pub line: usize,
    /// Zero-based column, counted in characters
    pub column: usize,
    /// Bytes covered by the node at this position
    pub range: TextRange,
}

impl SourcePosition {
    /// The one-based line, as shown to users
    pub const fn display_line(&self) -> usize {
        self.line + 1
    }

    /// The one-based column, as shown to users
    pub const fn display_column(&self) -> usize {
        self.column + 1
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source,
            self.display_line(),
            self.display_column()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub position: SourcePosition,
    pub msg: DiagnosticMessage,
    pub severity: Severity,
}
impl Diagnostic {
    pub fn new(position: SourcePosition, msg: DiagnosticMessage, severity: Severity) -> Self {
        Self {
            position,
            msg,
            severity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warn => "warning",
            Self::Error => "error",
        })
    }
}
