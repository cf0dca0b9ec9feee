//! # Artifact Paths
//!
//! Destination path and local file resolution for a publish request.

use std::path::{Component, Path, PathBuf};

/// Compute the destination path inside the store: `bucket` or `bucket/folder`
///
/// The result always uses `/` separators, with repeated and trailing separators removed.
pub fn destination_path(bucket: &str, folder: &str) -> String {
    if folder.is_empty() {
        normalize_separators(bucket)
    } else {
        normalize_separators(&format!("{bucket}/{folder}"))
    }
}

/// Convert `\` to `/`, collapse repeated separators and drop trailing ones
pub fn normalize_separators(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    for ch in path.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' && normalized.ends_with('/') {
            continue;
        }
        normalized.push(ch);
    }

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Resolve the source path against the agent working directory
///
/// Leading separators are ignored and `.`/`..` segments are folded lexically.
/// Returns `None` when a `..` segment climbs above `working_dir`.
pub fn local_file_path(working_dir: &Path, source: &str) -> Option<PathBuf> {
    let relative = Path::new(source.trim_start_matches(|c: char| c == '/' || c == '\\'));

    let mut resolved = PathBuf::new();
    let mut depth = 0usize;
    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                resolved.pop();
                depth -= 1;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    Some(working_dir.join(resolved))
}
