use std::path::{Path, PathBuf};

use thiserror::Error;
use yks_diagnostic::{RenderError, Renderer};
use yks_lint::LintError;
use yks_workspace::DiscoverError;

/// The result of checking one file
#[derive(Debug)]
pub(crate) struct FileReport {
    /// `None` when the path couldn't be discovered
    pub path: Option<PathBuf>,
    pub violations: usize,
    /// Rendered violations, ready for stdout
    pub output: String,
    pub error: Option<CheckError>,
}

#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("Failed to find files")]
    Discover(#[from] DiscoverError),

    #[error("Failed to read file")]
    Read(#[source] std::io::Error),

    #[error("Failed to check key order")]
    Lint(#[from] LintError),

    #[error("Failed to render diagnostic")]
    Render(#[from] RenderError),
}

impl FileReport {
    fn failed(path: Option<PathBuf>, error: CheckError) -> Self {
        Self {
            path,
            violations: 0,
            output: String::new(),
            error: Some(error),
        }
    }
}

pub(crate) fn check_discovered(
    discovered: Result<PathBuf, DiscoverError>,
    renderer: &Renderer,
) -> FileReport {
    let path = match discovered {
        Ok(path) => path,
        Err(err) => return FileReport::failed(None, err.into()),
    };
    match check_file(&path, renderer) {
        Ok((violations, output)) => FileReport {
            path: Some(path),
            violations,
            output,
            error: None,
        },
        Err(err) => FileReport::failed(Some(path), err),
    }
}

/// Checks one file, returning the number of violations and their rendering
fn check_file(path: &Path, renderer: &Renderer) -> Result<(usize, String), CheckError> {
    let _span = tracing::info_span!("check", path = %path.display()).entered();

    let text = fs_err::read_to_string(path).map_err(CheckError::Read)?;
    let violations = yks_lint::check_str(&text, path.display().to_string().into())?;
    tracing::info!(violations = violations.len(), "checked");

    let mut output = String::new();
    for violation in &violations {
        output.push_str(&renderer.render(&violation.to_diagnostic(), &text)?);
    }
    Ok((violations.len(), output))
}

/// Formats `err` followed by its chain of sources
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use yks_diagnostic::OutputFormat;

    use super::*;

    #[test]
    fn missing_file() {
        let report = check_discovered(Ok(PathBuf::from("not_exists.yaml")), &Renderer::default());
        assert_eq!(report.path, Some(PathBuf::from("not_exists.yaml")));
        assert_eq!(report.violations, 0);
        assert!(matches!(report.error, Some(CheckError::Read(_))));
        let message = error_chain(&report.error.unwrap());
        assert!(message.starts_with("Failed to read file: "));
        assert!(message.contains("not_exists.yaml"));
    }

    #[test]
    fn discover_error() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let report = check_discovered(Err(DiscoverError::Io(err)), &Renderer::default());
        assert_eq!(report.path, None);
        assert_eq!(
            error_chain(&report.error.unwrap()),
            "Failed to find files: Failed to read path: denied"
        );
    }

    #[test]
    fn renders_violations() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join("unsorted.yaml");
        let renderer = Renderer::new(vec![OutputFormat::Github]);
        let report = check_discovered(Ok(path.clone()), &renderer);
        assert!(report.error.is_none());
        assert_eq!(report.violations, 2);
        assert_eq!(
            report.output,
            format!(
                "::error file={path},line=3::key 'a' must be before 'b'\n\
                 ::error file={path},line=4::key 'aa' must be before 'bb'\n",
                path = path.display()
            )
        );
    }
}
