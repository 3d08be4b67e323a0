// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Compact datetime patterns.
//!
//! The `${datetime|...}` variable accepts patterns written with the token
//! alphabet editors conventionally use (`yyyy`, `MM`, `DD`, `HH`, `mm`, `ss`),
//! which chrono does not speak natively. This module translates those tokens
//! to strftime specifiers and formats the current local time.

use chrono::Local;

/// Pattern used when `${datetime}` is given no parameter.
pub const DEFAULT_PATTERN: &str = "yyyyMMDDHHmmss";

/// Token table, checked in order at each position. Longer tokens precede
/// their prefixes (`yyyy` before `yy`) so greedy matching picks the full one.
const TOKEN_MAP: &[(&str, &str)] = &[
    ("yyyy", "%Y"),
    ("YYYY", "%Y"),
    ("yy", "%y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("SSS", "%3f"),
];

/// Translate a compact pattern into a chrono strftime string.
///
/// Unrecognized characters pass through as literals; `%` is escaped so the
/// output is always a valid strftime format.
pub fn translate_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for (token, spec) in TOKEN_MAP {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}

/// Format the current local time with a compact pattern.
pub fn format_now(pattern: &str) -> String {
    Local::now().format(&translate_pattern(pattern)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_default_pattern() {
        assert_eq!(translate_pattern(DEFAULT_PATTERN), "%Y%m%d%H%M%S");
    }

    #[test]
    fn test_translate_with_separators() {
        assert_eq!(translate_pattern("yyyy-MM-DD"), "%Y-%m-%d");
        assert_eq!(translate_pattern("HH:mm:ss"), "%H:%M:%S");
    }

    #[test]
    fn test_translate_literals_pass_through() {
        assert_eq!(translate_pattern("yyyy build"), "%Y build");
    }

    #[test]
    fn test_translate_escapes_percent() {
        assert_eq!(translate_pattern("yyyy%"), "%Y%%");
    }

    #[test]
    fn test_translate_greedy_year() {
        // `yyyy` must not be read as two `yy` tokens.
        assert_eq!(translate_pattern("yyyy"), "%Y");
        assert_eq!(translate_pattern("yy"), "%y");
    }

    #[test]
    fn test_format_now_default_is_compact_numeric() {
        let formatted = format_now(DEFAULT_PATTERN);
        assert_eq!(formatted.len(), 14);
        assert!(formatted.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_now_year() {
        let year = Local::now().format("%Y").to_string();
        assert_eq!(format_now("yyyy"), year);
    }
}
