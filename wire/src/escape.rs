//! Escaping for free-form text tokens.

use std::borrow::Cow;

/// Token delimiter on the wire.
pub const SEPARATOR: char = ' ';

/// Quote character; a quoted span is read as one token.
pub const QUOTE: char = '\'';

/// Makes `text` safe to place between separators.
///
/// Apostrophes are backslash-escaped first. If the result contains a space it
/// is wrapped in apostrophes. Text needing neither is returned borrowed.
pub fn escape(text: &str) -> Cow<'_, str> {
    let quotes = text.matches(QUOTE).count();
    let spaced = text.contains(SEPARATOR);
    if quotes == 0 && !spaced {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + quotes + 2);
    if spaced {
        out.push(QUOTE);
    }
    for ch in text.chars() {
        if ch == QUOTE {
            out.push('\\');
        }
        out.push(ch);
    }
    if spaced {
        out.push(QUOTE);
    }
    Cow::Owned(out)
}
