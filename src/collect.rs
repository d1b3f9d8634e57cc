use crate::types::FileEntry;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Recursively enumerate files under `root`, pruning any subdirectory whose
/// name is in `excluded_dirs` before descending and keeping only files whose
/// extension is in `included_exts`. Unreadable directories are skipped.
///
/// Traversal is sorted by file name so that repeated runs over an unchanged
/// tree produce identical output.
pub fn collect(
    root: &Path,
    excluded_dirs: &[&str],
    included_exts: &[String],
    user_ignores: &[String],
    debug: bool,
) -> Vec<FileEntry> {
    let excluded: Vec<String> = excluded_dirs.iter().map(|s| s.to_string()).collect();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
            if !is_dir {
                return true;
            }
            match entry.file_name().to_str() {
                Some(name) => !excluded.iter().any(|e| e == name),
                None => true,
            }
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if debug {
                    eprintln!("Skipping unreadable entry: {}", err);
                }
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().map_or(true, |t| t.is_dir()) {
            continue;
        }
        if !has_included_extension(path, included_exts) {
            if debug {
                eprintln!("Skipping unrecognized extension: {}", path.display());
            }
            continue;
        }
        if is_user_ignored(path, user_ignores) {
            if debug {
                eprintln!("Skipping file by user ignore pattern: {}", path.display());
            }
            continue;
        }
        files.push(FileEntry::new(Some(root), path.to_path_buf()));
    }
    files
}

/// Pass through a fixed, caller-supplied list of paths unchanged. No
/// filtering: existence is checked by the caller.
pub fn collect_from_list(paths: &[&str]) -> Vec<FileEntry> {
    paths
        .iter()
        .map(|p| FileEntry::new(None, PathBuf::from(p)))
        .collect()
}

fn has_included_extension(path: &Path, included_exts: &[String]) -> bool {
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => included_exts.iter().any(|e| e == ext),
        None => false,
    }
}

fn is_user_ignored(path: &Path, user_ignores: &[String]) -> bool {
    if user_ignores.is_empty() {
        return false;
    }
    let pstr = path.to_string_lossy();
    user_ignores.iter().any(|pat| pstr.contains(pat.as_str()))
}
