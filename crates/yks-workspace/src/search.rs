use std::path::{Path, PathBuf};

/// Looks for `filename` in `start` and its ancestors, nearest first
pub(crate) fn search_ancestors(start: &Path, filename: &str) -> Option<PathBuf> {
    let found = start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file());
    tracing::debug!(start = %start.display(), ?found, "config search");
    found
}
