// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Placeholder scanner.
//!
//! Tokenizes a template string into `${name}` / `${name|param}` placeholder
//! occurrences. The scanner is a restartable iterator over non-overlapping
//! matches in order of first occurrence; everything between matches is left
//! for the engine to copy through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

/// A placeholder is `${`, optional whitespace, a word-character name, optional
/// whitespace, an optional `|param` (param may be empty and runs up to, but
/// not including, the closing brace), then `}`. Nested braces are not
/// supported: the first `}` after `${` terminates the token.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{\s*(?P<name>\w+)\s*(?:\|(?P<param>[^}]*))?\}").expect("placeholder pattern")
});

/// One recognized placeholder occurrence in a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The entire matched span including the `${ }` delimiters.
    pub full_token: String,
    /// The variable identifier, whitespace stripped.
    pub name: String,
    /// Raw, untrimmed text after the `|` separator, if one was present.
    pub param: Option<String>,
    /// Byte offset of the token start in the scanned string.
    pub start: usize,
    /// Byte offset one past the token end in the scanned string.
    pub end: usize,
}

/// Iterator over the placeholders of a template string.
///
/// Each yielded occurrence is independent; a name that appears twice is
/// yielded twice, so stateful accessors (`uuid`) resolve per occurrence.
pub struct PlaceholderScanner<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> PlaceholderScanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Placeholder> {
        if self.cursor > self.input.len() {
            return None;
        }

        let caps = PLACEHOLDER_RE.captures(&self.input[self.cursor..])?;
        let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
            return None;
        };

        let start = self.cursor + whole.start();
        let end = self.cursor + whole.end();

        // Invariant: the cursor advances on every yielded item, so the scan
        // always terminates even if the pattern ever admits an empty match.
        if end > start {
            self.cursor = end;
        } else {
            self.cursor = (end + 1..=self.input.len())
                .find(|&i| self.input.is_char_boundary(i))
                .unwrap_or(self.input.len() + 1);
        }

        Some(Placeholder {
            full_token: whole.as_str().to_string(),
            name: name.as_str().to_string(),
            param: caps.name("param").map(|p| p.as_str().to_string()),
            start,
            end,
        })
    }
}
