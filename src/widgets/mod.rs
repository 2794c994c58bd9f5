mod context;
mod results;

pub use context::ContextPane;
pub use results::ResultsList;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncate a line to a terminal cell width, never splitting a grapheme.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;

    for grapheme in text.graphemes(true) {
        let g_width = grapheme.width();
        if width + g_width > max_width {
            break;
        }
        out.push_str(grapheme);
        width += g_width;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_width_aware() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        // Wide CJK chars take two cells each
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }
}
