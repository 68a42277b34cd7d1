//! Classpath assembly from the two local artifact repositories.
//!
//! The primary repository holds locally built or sideloaded artifacts and
//! wins over the shared download repository: whenever the primary repository
//! contributes anything, the superseded legacy artifact is dropped from the
//! secondary listing so the client never loads two copies of it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// File extension of classpath archives.
const ARCHIVE_EXT: &str = "jar";

/// Artifact prefix superseded by the primary repository when it is non-empty.
///
/// Kept deliberately narrow: only this one artifact is overridden, not a
/// general versioning scheme.
pub const LEGACY_ARTIFACT_PREFIX: &str = "client-api-1.10";

/// An assembled, ordered classpath.
///
/// Entries are absolute archive paths, primary repository first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classpath(Vec<PathBuf>);

impl Classpath {
    pub fn entries(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join entries with the platform path separator for the `-cp` value.
    ///
    /// Pure formatting; the child VM splits on the same separator.
    pub fn as_arg(&self) -> String {
        let sep = if cfg!(windows) { ";" } else { ":" };
        self.0
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Default locations of the two artifact repositories.
///
/// Returns `(primary, secondary)` under the user's local data directory.
pub fn default_repository_dirs() -> (PathBuf, PathBuf) {
    let base = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("vm-launch");
    (base.join("sideload"), base.join("repository"))
}

/// List archive files in `dir`, sorted by file name.
///
/// A missing or unreadable directory contributes nothing; on fresh installs
/// one or both repositories may legitimately be absent. Sorting keeps the
/// classpath stable across filesystems whose raw enumeration order differs.
pub fn list_archives(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("[classpath] Skipping unreadable repository {:?}: {}", dir, err);
            return Vec::new();
        }
    };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == ARCHIVE_EXT))
        .map(|path| std::path::absolute(&path).unwrap_or(path))
        .collect();
    archives.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
    archives
}

/// Merge the primary and secondary repository listings.
///
/// Stateless: purely a function of the two listings and the exclusion
/// prefix. When the primary listing is non-empty, secondary entries whose
/// file name starts with `legacy_prefix` are dropped; an empty primary
/// listing passes the secondary listing through unfiltered. Each side keeps
/// its own order, primary first.
pub fn merge_with_override(
    primary: Vec<PathBuf>,
    secondary: Vec<PathBuf>,
    legacy_prefix: &str,
) -> Vec<PathBuf> {
    let filter_legacy = !primary.is_empty();
    let mut merged = primary;
    merged.extend(
        secondary
            .into_iter()
            .filter(|path| !(filter_legacy && file_name_starts_with(path, legacy_prefix))),
    );
    merged
}

fn file_name_starts_with(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix))
}

/// Assemble the classpath from the two repository directories.
///
/// Re-enumerates both directories on every call; nothing is cached between
/// launches.
pub fn assemble_classpath(primary_dir: &Path, secondary_dir: &Path) -> Classpath {
    let primary = list_archives(primary_dir);
    let secondary = list_archives(secondary_dir);
    Classpath(merge_with_override(primary, secondary, LEGACY_ARTIFACT_PREFIX))
}
