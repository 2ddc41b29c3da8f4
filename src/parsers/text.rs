use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("Tag pattern should be valid"));

/// Removes markup tags from serialized HTML
///
/// This is a plain pattern strip: entities such as `&amp;` are left as-is.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Trims the list brackets left over from joining serialized elements
pub fn strip_brackets(text: &str) -> &str {
    text.trim_matches(|c| c == '[' || c == ']')
}

/// Replaces every newline with a single space
pub fn collapse_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Drops every non-ASCII character without substituting anything
pub fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Normalizes a block of page text: newlines collapsed, non-ASCII dropped
pub fn clean_block(text: &str) -> String {
    ascii_only(&collapse_newlines(text))
}

/// Whether a fragment begins with a digit, in any script
pub fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_numeric)
}
