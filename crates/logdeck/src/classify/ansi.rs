//! Terminal control-sequence sanitizer.
//!
//! Build and runtime logs arrive with ANSI color codes from tools using
//! colored terminal output. These are stripped before classification so the
//! pattern rules see clean text.

use std::borrow::Cow;

const ESC: char = '\u{1b}';

/// Strip CSI escape sequences (`ESC [ params final-byte`) from text.
///
/// Only CSI sequences are removed; every other byte is preserved, including
/// an ESC that is not followed by `[`. Returns `Cow::Borrowed` when the input
/// contains no ESC byte, so clean logs cost no allocation.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    if !raw.contains(ESC) {
        return Cow::Borrowed(raw);
    }

    let mut output = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            // Skip parameter bytes until the final byte (0x40-0x7E).
            // An unterminated sequence is dropped to the end of input.
            for next in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&next) {
                    break;
                }
            }
            continue;
        }
        output.push(c);
    }

    Cow::Owned(output)
}
