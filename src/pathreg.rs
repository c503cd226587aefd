//! Path registration
//!
//! Writes `<name>.pth` into a package-install directory. The file holds a
//! single absolute directory path and a newline, which makes that
//! directory importable without packaging it.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::observability::Event;

/// Extension of path-configuration files
pub const PTH_EXTENSION: &str = "pth";

/// Default file stem
pub const DEFAULT_NAME: &str = "setup";

#[derive(Debug, Error)]
pub enum PathRegError {
    #[error("site directory does not exist: {0}")]
    MissingSiteDir(PathBuf),

    #[error("invalid registration name '{0}': must be a plain file stem")]
    InvalidName(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// What was written, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Absolute directory registered
    pub root: PathBuf,
    /// Path-configuration file written
    pub pth_file: PathBuf,
}

/// Location of the path-configuration file for `name` in `site_dir`.
pub fn pth_file_path(site_dir: &Path, name: &str) -> PathBuf {
    site_dir.join(format!("{}.{}", name, PTH_EXTENSION))
}

/// Registers `root` in `site_dir`, overwriting any earlier registration
/// under the same name.
///
/// A relative `root` is resolved against the current directory, and `.`
/// and `..` components are folded out.
pub fn register_path(root: &Path, site_dir: &Path, name: &str) -> Result<Registration, PathRegError> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PathRegError::InvalidName(name.to_string()));
    }
    if !site_dir.is_dir() {
        return Err(PathRegError::MissingSiteDir(site_dir.to_path_buf()));
    }

    let root = if root.is_absolute() {
        normalize(root)
    } else {
        normalize(&env::current_dir()?.join(root))
    };

    let pth_file = pth_file_path(site_dir, name);
    fs::write(&pth_file, format!("{}\n", root.display()))?;

    tracing::info!(
        event = %Event::PathRegistered,
        root = %root.display(),
        pth_file = %pth_file.display(),
        "path registered"
    );

    Ok(Registration { root, pth_file })
}

/// Lexical normalization of an absolute path; symlinks are left alone.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
