use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("Failed to read path")]
    Io(#[from] std::io::Error),
}

/// Expands `paths` into the files to check, in a deterministic order
///
/// Files given directly are always kept. Directories are walked recursively, keeping files whose
/// extension is one of `extensions`. Paths that can't be read are reported in place and don't
/// stop the walk.
pub fn discover_files(
    paths: &[PathBuf],
    extensions: &[String],
) -> Vec<Result<PathBuf, DiscoverError>> {
    let mut found = Vec::new();
    for path in paths {
        match fs_err::metadata(path) {
            Ok(metadata) if metadata.is_dir() => walk(path, extensions, &mut found),
            Ok(_) => found.push(Ok(path.clone())),
            Err(err) => found.push(Err(err.into())),
        }
    }
    found
}

fn walk(dir: &Path, extensions: &[String], found: &mut Vec<Result<PathBuf, DiscoverError>>) {
    let entries = match read_sorted(dir) {
        Ok(entries) => entries,
        Err(err) => {
            found.push(Err(err.into()));
            return;
        }
    };
    tracing::debug!(dir = %dir.display(), entries = entries.len(), "walk");
    for (path, is_dir) in entries {
        if is_dir {
            walk(&path, extensions, found);
        } else if has_extension(&path, extensions) {
            found.push(Ok(path));
        }
    }
}

/// Entries of `dir` sorted by name, paired with whether they are real directories
///
/// Symbolic links to directories are not followed.
fn read_sorted(dir: &Path) -> std::io::Result<Vec<(PathBuf, bool)>> {
    let mut entries = fs_err::read_dir(dir)?
        .map(|entry| {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?.is_dir()))
        })
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extensions.iter().any(|wanted| wanted == extension))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn yaml() -> Vec<String> {
        vec!["yml".to_owned(), "yaml".to_owned()]
    }

    fn ok(found: Vec<Result<PathBuf, DiscoverError>>) -> Vec<PathBuf> {
        found.into_iter().map(Result::unwrap).collect()
    }

    #[test]
    fn walk_directory() {
        let tree = Path::new("test_data").join("tree");
        assert_eq!(
            ok(discover_files(&[tree.clone()], &yaml())),
            vec![
                tree.join("a.yaml"),
                tree.join("b.yml"),
                tree.join("sub").join("c.yaml"),
            ]
        );
    }

    #[test]
    fn custom_extensions() {
        let tree = Path::new("test_data").join("tree");
        assert_eq!(
            ok(discover_files(&[tree.clone()], &["json".to_owned()])),
            vec![tree.join("sub").join("d.json")]
        );
    }

    #[test]
    fn explicit_file_is_always_checked() {
        let notes = Path::new("test_data").join("tree").join("notes.txt");
        assert_eq!(
            ok(discover_files(&[notes.clone()], &yaml())),
            vec![notes]
        );
    }

    #[test]
    fn missing_path_is_reported_in_place() {
        let tree = Path::new("test_data").join("tree").join("sub");
        let found = discover_files(&[PathBuf::from("not_exists"), tree.clone()], &yaml());
        assert_eq!(found.len(), 2);
        match &found[0] {
            Err(DiscoverError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io::ErrorKind::NotFound, got {other:?}"),
        }
        assert_eq!(found[1].as_ref().unwrap(), &tree.join("c.yaml"));
    }
}
