//! Image path rewriting.
//!
//! Every image path written to the scene is relative to the conversion's base
//! directory and uses `/` as separator. Resolution is lexical: nothing here
//! touches the filesystem except reading the process working directory.

use std::env;
use std::path::{Component, Path, PathBuf};

use normalize_path::NormalizePath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Failed to read current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8(PathBuf),
}

pub fn unify_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Absolute, with `.` and `..` resolved lexically.
pub fn absolute(path: &Path) -> Result<PathBuf, PathError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(PathError::CurrentDir)?
            .join(path)
    };
    Ok(joined.normalize())
}

/// `path` relative to `base`, both already absolute and normalized.
///
/// Paths sharing no root (different drives) are returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<Component<'_>> = path.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return path.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

/// Resolve `raw` (as written in a map or tileset) against `source_dir` and
/// express it relative to `base_dir`.
pub fn resolve_asset_path(
    source_dir: &Path,
    raw: &str,
    base_dir: &Path,
) -> Result<String, PathError> {
    let target = absolute(&source_dir.join(unify_separators(raw)))?;
    let base = absolute(base_dir)?;
    let relative = relative_to(&target, &base);

    relative
        .to_str()
        .map(unify_separators)
        .ok_or_else(|| PathError::NonUtf8(relative.clone()))
}
