//! Start path resolution and validation

use anyhow::{bail, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Resolve the optional path argument to an absolute, normalized path
///
/// A leading `~` expands to the home directory. Relative paths are joined
/// onto `cwd`. `.` and `..` components are folded lexically.
pub fn resolve_start_path(arg: Option<&str>, cwd: &Path) -> PathBuf {
    let Some(raw) = arg else {
        return normalize(cwd);
    };

    let expanded = expand_home(raw);
    if expanded.is_absolute() {
        normalize(&expanded)
    } else {
        normalize(&cwd.join(expanded))
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Lexically fold `.` and `..` components
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Check that the start path exists, is a directory and can be listed
pub fn validate_start_dir(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Path does not exist: {}", path.display())
        }
        Err(e) => bail!("Error accessing path: {}", e),
    };

    if !metadata.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }

    if let Err(e) = fs::read_dir(path) {
        bail!("Error accessing path: {}", e);
    }

    Ok(())
}

/// Parent of `path`, or `None` at the filesystem root
pub fn parent_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty() && *parent != path)
        .map(Path::to_path_buf)
}
