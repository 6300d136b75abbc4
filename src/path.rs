//! Path resolution against the session's current directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// What a resolved path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path (or it cannot be stat'ed).
    Missing,
    /// A regular file or any other non-directory entry.
    File,
    /// A directory.
    Directory,
}

/// Stateless joiner/normalizer/classifier. Never touches the filesystem
/// except to read metadata in [`classify`](PathResolver::classify).
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Join `candidate` onto `base` unless it is already absolute, then normalize.
    pub fn resolve(&self, base: &Path, candidate: &str) -> PathBuf {
        let candidate = Path::new(candidate);
        if candidate.is_absolute() {
            normalize(candidate)
        } else {
            normalize(&base.join(candidate))
        }
    }

    /// Stat `path` (following symlinks).
    pub fn classify(&self, path: &Path) -> PathKind {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::File,
            Err(_) => PathKind::Missing,
        }
    }
}

/// Collapse `.`, `..` and repeated separators lexically.
///
/// `..` at the root stays at the root. Symlinks are not resolved, so
/// `link/..` becomes the directory containing `link`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
