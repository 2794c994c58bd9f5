//! Sentence-bounded context extraction
//!
//! Given a match inside a page's text, produce a readable excerpt: bounded
//! by sentence punctuation when some is nearby, otherwise a fixed window
//! trimmed to word boundaries. All offsets are byte offsets and stay on
//! char boundaries.

use std::ops::Range;

/// Fallback window, in chars, on each side of the match when no sentence
/// terminator is found.
const WINDOW_CHARS: usize = 200;

const TERMINATORS: [&str; 3] = [". ", "! ", "? "];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub text: String,
    /// Byte range of the match within `text`.
    pub highlight: Range<usize>,
}

/// Extract the sentence-bounded window around `start..end` of `text`.
/// The returned excerpt always contains the full match.
pub fn sentence_context(text: &str, start: usize, end: usize) -> Excerpt {
    let excerpt_start = context_start(text, start);
    let excerpt_end = context_end(text, end);

    Excerpt {
        text: text[excerpt_start..excerpt_end].to_string(),
        highlight: (start - excerpt_start)..(end - excerpt_start),
    }
}

fn context_start(text: &str, match_start: usize) -> usize {
    let before = &text[..match_start];

    // Rightmost sentence terminator before the match wins; the excerpt
    // begins just past the terminator and its trailing space.
    if let Some(pos) = TERMINATORS.iter().filter_map(|t| before.rfind(t)).max() {
        return pos + 2;
    }

    let mut start = back_up_chars(text, match_start, WINDOW_CHARS);
    if start > 0 {
        // The window landed mid-token; begin at the next whitespace instead
        start = match text[start..match_start].find(|c: char| c.is_whitespace()) {
            Some(offset) => start + offset,
            None => match_start,
        };
    }
    start
}

fn context_end(text: &str, match_end: usize) -> usize {
    let after = &text[match_end..];

    if let Some(pos) = TERMINATORS.iter().filter_map(|t| after.find(t)).min() {
        return match_end + pos + 2;
    }

    let end = advance_chars(text, match_end, WINDOW_CHARS);
    if end < text.len() {
        // Trim back to just after the last whitespace inside the window,
        // but never back into the match itself
        return match text[match_end..end].rfind(|c: char| c.is_whitespace()) {
            Some(offset) => {
                let ws = match_end + offset;
                let ws_len = text[ws..].chars().next().map_or(1, char::len_utf8);
                ws + ws_len
            }
            None => match_end,
        };
    }
    end
}

/// Byte index `count` chars before `from`, clamped to the text start.
fn back_up_chars(text: &str, from: usize, count: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte index `count` chars past `from`, clamped to the text end.
fn advance_chars(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
