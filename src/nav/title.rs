//! Display names for outline entries.

/// Upper-case the first character and lower-case the rest: `API` -> `Api`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title for a file entry: the name with `suffix` removed from its end.
///
/// Only that one suffix is stripped. `readme.markdown` keeps its extension
/// when the suffix is `.md`, and an empty suffix leaves every name alone.
pub fn file_title<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return file_name;
    }
    file_name.strip_suffix(suffix).unwrap_or(file_name)
}
