use std::path::Path;

/// Render a path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let lossy = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        lossy.into_owned()
    } else {
        lossy.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Last segment of a `/`-separated path.
#[must_use]
pub fn file_name(slash_path: &str) -> &str {
    slash_path.rsplit('/').next().unwrap_or(slash_path)
}

/// Extension of a file name including its leading dot.
///
/// Everything from the last `.` counts, so `.env` yields `.env` and `Makefile`
/// yields `None`.
#[must_use]
pub fn dotted_extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}
