use std::{fmt, str::FromStr};

use codespan_reporting::{
    diagnostic::{Diagnostic as CodespanDiagnostic, Label},
    files::SimpleFile,
    term::{self, termcolor::NoColor},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Diagnostic, Severity};

/// How a [`Diagnostic`] is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `file:line:col: severity: message`, the classic compiler format
    Simple,
    /// GitHub Actions workflow command, shown as an annotation on the pull request
    #[serde(alias = "ci")]
    Github,
    /// The message followed by the offending source line with a caret under the key
    Verbose,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Simple, Self::Github, Self::Verbose];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Github => "github",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format `{0}`, expected one of `simple`, `github`, `ci` or `verbose`")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "github" | "ci" => Ok(Self::Github),
            "verbose" => Ok(Self::Verbose),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render source snippet")]
    Snippet(#[from] codespan_reporting::files::Error),

    #[error("Rendered snippet is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders diagnostics in every configured [`OutputFormat`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    formats: Vec<OutputFormat>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(vec![OutputFormat::Simple])
    }
}

impl Renderer {
    pub fn new(formats: Vec<OutputFormat>) -> Self {
        Self { formats }
    }

    /// Renders `diag` once per format. Every rendering ends with a newline.
    ///
    /// `source` is the full text of the document the diagnostic points into. Only the verbose
    /// format reads it.
    pub fn render(&self, diag: &Diagnostic, source: &str) -> Result<String, RenderError> {
        let mut out = String::new();
        for format in &self.formats {
            let rendered = match format {
                OutputFormat::Simple => render_simple(diag),
                OutputFormat::Github => render_github(diag),
                OutputFormat::Verbose => render_verbose(diag, source)?,
            };
            out.push_str(&rendered);
            if !rendered.ends_with('\n') {
                out.push('\n');
            }
        }
        Ok(out)
    }
}

pub(crate) fn render_simple(diag: &Diagnostic) -> String {
    format!("{}: {}: {}", diag.position, diag.severity, diag.msg)
}

pub(crate) fn render_github(diag: &Diagnostic) -> String {
    format!(
        "::{} file={},line={}::{}",
        diag.severity,
        diag.position.source,
        diag.position.display_line(),
        diag.msg
    )
}

pub(crate) fn render_verbose(diag: &Diagnostic, source: &str) -> Result<String, RenderError> {
    let file = SimpleFile::new(diag.position.source.as_ref(), source);
    let snippet = match diag.severity {
        Severity::Error => CodespanDiagnostic::error(),
        Severity::Warn => CodespanDiagnostic::warning(),
    }
    .with_message(diag.msg.clone())
    .with_labels(vec![Label::primary((), diag.position.range.byte_range())]);

    let mut writer = NoColor::new(Vec::new());
    term::emit(&mut writer, &term::Config::default(), &file, &snippet)?;
    Ok(String::from_utf8(writer.into_inner())?)
}
