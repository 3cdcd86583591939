use std::path::{Path, PathBuf};

/// Path of a walked file relative to the display root.
/// Falls back to the resolved path when no relative form exists.
pub fn calculate_display_path(resolved_path: &Path, display_root: &Path) -> PathBuf {
    pathdiff::diff_paths(resolved_path, display_root).unwrap_or_else(|| resolved_path.to_path_buf())
}

/// Render a path with forward slashes, the separator mkdocs.yml expects
pub fn to_slash_string(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Base name of a directory as it appears in a heading.
/// `.` and `..` have no file name and are shown as given.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
