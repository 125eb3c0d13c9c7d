use std::{fmt, io::Write};

use crate::check::{error_chain, FileReport};

/// Exit status when any file could not be read, parsed or checked
pub(crate) const ERROR_EXIT_STATUS: u8 = 255;
/// Violation counts saturate here, below [`ERROR_EXIT_STATUS`]
pub(crate) const MAX_VIOLATION_EXIT_STATUS: u8 = 254;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub files: usize,
    pub violations: usize,
    pub errors: usize,
}

impl Summary {
    pub(crate) fn add(&mut self, report: &FileReport) {
        if report.path.is_some() {
            self.files += 1;
        }
        self.violations += report.violations;
        if report.error.is_some() {
            self.errors += 1;
        }
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.violations == 0 && self.errors == 0
    }

    /// The number of violations, or [`ERROR_EXIT_STATUS`] if anything failed
    pub(crate) fn exit_status(&self) -> u8 {
        if self.errors > 0 {
            return ERROR_EXIT_STATUS;
        }
        u8::try_from(self.violations)
            .unwrap_or(MAX_VIOLATION_EXIT_STATUS)
            .min(MAX_VIOLATION_EXIT_STATUS)
    }
}

/// Writes every report's rendered output to `out` and its error to stderr
///
/// A failed write or flush counts as an error, so a closed pipe never exits cleanly.
pub(crate) fn emit_reports<W: Write>(out: &mut W, reports: &[FileReport]) -> Summary {
    let mut summary = Summary::default();
    for report in reports {
        summary.add(report);
        if out.write_all(report.output.as_bytes()).is_err() {
            summary.errors += 1;
        }
        if let Some(err) = &report.error {
            match &report.path {
                Some(path) => eprintln!("error: {}: {}", path.display(), error_chain(err)),
                None => eprintln!("error: {}", error_chain(err)),
            }
        }
    }
    if out.flush().is_err() {
        summary.errors += 1;
    }
    summary
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |count: usize| if count == 1 { "" } else { "s" };
        if self.is_clean() {
            return write!(
                f,
                "{} file{} checked, all keys sorted",
                self.files,
                plural(self.files)
            );
        }
        write!(
            f,
            "{} key order violation{}",
            self.violations,
            plural(self.violations)
        )?;
        if self.errors > 0 {
            write!(f, " and {} error{}", self.errors, plural(self.errors))?;
        }
        write!(f, " in {} file{}", self.files, plural(self.files))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn report(violations: usize) -> FileReport {
        FileReport {
            path: Some("a.yaml".into()),
            violations,
            output: "a.yaml:2:1: error: key 'a' must be before 'b'\n".repeat(violations),
            error: None,
        }
    }

    /// Accepts writes but cannot flush, like a pipe closed by the reader
    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn emit_writes_output_in_order() {
        let mut out = Vec::new();
        let summary = emit_reports(&mut out, &[report(1), report(0), report(2)]);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
        assert_eq!(
            summary,
            Summary {
                files: 3,
                violations: 3,
                errors: 0,
            }
        );
        assert_eq!(summary.exit_status(), 3);
    }

    #[test]
    fn failed_flush_is_an_error() {
        let mut out = UnflushableWriter(Vec::new());
        let summary = emit_reports(&mut out, &[report(0)]);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.exit_status(), ERROR_EXIT_STATUS);
    }

    fn summary(violations: usize, errors: usize) -> Summary {
        Summary {
            files: 3,
            violations,
            errors,
        }
    }

    #[test]
    fn exit_status() {
        assert_eq!(summary(0, 0).exit_status(), 0);
        assert_eq!(summary(2, 0).exit_status(), 2);
        assert_eq!(summary(254, 0).exit_status(), 254);
        assert_eq!(summary(256, 0).exit_status(), MAX_VIOLATION_EXIT_STATUS);
        assert_eq!(summary(10_000, 0).exit_status(), MAX_VIOLATION_EXIT_STATUS);
        assert_eq!(summary(0, 1).exit_status(), ERROR_EXIT_STATUS);
        assert_eq!(summary(7, 1).exit_status(), ERROR_EXIT_STATUS);
    }

    #[test]
    fn display() {
        assert_eq!(summary(0, 0).to_string(), "3 files checked, all keys sorted");
        assert_eq!(summary(1, 0).to_string(), "1 key order violation in 3 files");
        assert_eq!(
            summary(2, 1).to_string(),
            "2 key order violations and 1 error in 3 files"
        );
    }

    #[test]
    fn add() {
        let mut summary = Summary::default();
        summary.add(&FileReport {
            path: Some("a.yaml".into()),
            violations: 2,
            output: String::new(),
            error: None,
        });
        summary.add(&FileReport {
            path: None,
            violations: 0,
            output: String::new(),
            error: Some(crate::check::CheckError::Read(std::io::Error::other("gone"))),
        });
        assert_eq!(
            summary,
            Summary {
                files: 1,
                violations: 2,
                errors: 1,
            }
        );
    }
}
