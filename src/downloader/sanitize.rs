// Filesystem-safe name derivation

use regex::Regex;

lazy_static::lazy_static! {
    static ref UNSAFE_RE: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
    static ref UNDERSCORE_RUN_RE: Regex = Regex::new(r"_+").unwrap();
}

/// Reduce an arbitrary title to letters, digits and single underscores,
/// with no leading or trailing underscore. Empty input yields empty output.
pub fn sanitize_filename(name: &str) -> String {
    let safe = UNSAFE_RE.replace_all(name, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&safe, "_");
    collapsed.trim_matches('_').to_string()
}
