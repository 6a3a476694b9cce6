//! Text cleanup applied to everything captured from the client

use dialogscraper_store::USERNAME_TOKEN;
use regex::Regex;
use std::sync::OnceLock;

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static SPACES_RE: OnceLock<Regex> = OnceLock::new();

/// Replace every occurrence of the local player's name with `%USERNAME%`.
///
/// Matching is exact and case-sensitive. An unknown or empty name leaves the
/// text as is.
pub fn sanitize(text: &str, username: Option<&str>) -> String {
    match username {
        Some(name) if !name.is_empty() => text.replace(name, USERNAME_TOKEN),
        _ => text.to_string(),
    }
}

/// Strip client markup such as `<col=ff0000>` and `<br>`
pub fn remove_tags(text: &str) -> String {
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    re.replace_all(text, "").into_owned()
}

/// Flatten a multi-line dialog widget text into a single line
pub fn normalize_multiline(text: &str) -> String {
    let spaces = SPACES_RE.get_or_init(|| Regex::new(r" +").unwrap());
    let joined = text.replace("-<br>", "-").replace("<br>", " ");
    remove_tags(&spaces.replace_all(&joined, " "))
}
