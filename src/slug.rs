//! Slug normalization.
//!
//! Joins transliterated fragments and reduces them to the slug character
//! set: lowercased, separator runs collapsed, stray characters dropped,
//! boundary separators trimmed, and the result truncated to the length
//! limit.

/// Normalize `fragments` into a slug.
///
/// The separator is matched literally at every step, never as a pattern.
/// With `max_length == 0` truncation is disabled; otherwise the output is
/// cut to at most `max_length` bytes and a separator left dangling by the
/// cut is stripped. Never fails.
pub fn normalize(fragments: &[String], separator: &str, max_length: usize) -> String {
    let joined = fragments.join(separator).to_ascii_lowercase();
    let collapsed = collapse_separator_runs(&joined, separator);
    let filtered = filter_slug_chars(&collapsed, separator);
    let mut slug = trim_separators(&filtered, separator).to_string();

    if max_length > 0 && slug.len() > max_length {
        let mut cut = max_length;
        while !slug.is_char_boundary(cut) {
            cut -= 1;
        }
        slug.truncate(cut);
        if let Some(kept) = slug.strip_suffix(separator) {
            slug.truncate(kept.len());
        }
    }
    slug
}

/// Replace runs of two or more separator occurrences with a single one.
fn collapse_separator_runs(s: &str, separator: &str) -> String {
    if separator.is_empty() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find(separator) {
        let end = pos + separator.len();
        out.push_str(&rest[..end]);
        rest = &rest[end..];
        while let Some(stripped) = rest.strip_prefix(separator) {
            rest = stripped;
        }
    }
    out.push_str(rest);
    out
}

/// Keep lowercase ASCII alphanumerics and the separator character, drop
/// everything else.
///
/// The separator is compared as one character; a multi-character separator
/// never survives this filter, which is why configuration restricts it to a
/// single one.
fn filter_slug_chars(s: &str, separator: &str) -> String {
    let sep_char = single_char(separator);
    s.chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || Some(c) == sep_char)
        .collect()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn trim_separators<'a>(s: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return s;
    }
    let mut out = s;
    while let Some(stripped) = out.strip_prefix(separator) {
        out = stripped;
    }
    while let Some(stripped) = out.strip_suffix(separator) {
        out = stripped;
    }
    out
}
