use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A file selected for the combined report: the path used to read it, the
/// display form used in headings (relative, forward slashes), and the
/// extension used as the code fence language tag.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub rel_path: String,
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from `path`, rendering the display path relative to
    /// `base` when possible (always forward slashes).
    pub fn new(base: Option<&Path>, path: PathBuf) -> Self {
        let rel_path = match base.and_then(|b| path.strip_prefix(b).ok()) {
            Some(rel) => rel.to_string_lossy().replace('\\', "/"),
            None => path.to_string_lossy().replace('\\', "/"),
        };
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("")
            .to_string();
        FileEntry {
            path,
            rel_path,
            extension,
        }
    }
}
