use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Longest message Telegram will accept.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Clip text to `limit` characters on a grapheme boundary, appending an
/// ellipsis when anything was cut.
pub fn clip_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut clipped = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let chars = grapheme.chars().count();
        if used + chars >= limit {
            break;
        }
        clipped.push_str(grapheme);
        used += chars;
    }
    clipped.push('…');
    trace!(limit, "clipped reply text");
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(clip_message("hello", 10), "hello");
        assert_eq!(clip_message("exact", 5), "exact");
    }

    #[test]
    fn long_text_is_clipped_with_ellipsis() {
        let clipped = clip_message("abcdefgh", 5);
        assert_eq!(clipped, "abcd…");
        assert!(clipped.chars().count() <= 5);
    }

    #[test]
    fn clips_on_grapheme_boundaries() {
        // family emoji is one grapheme of several chars; it must not be split
        let text = "ab👨‍👩‍👧cdef";
        let clipped = clip_message(text, 4);
        assert!(!clipped.contains('\u{200d}'));
        assert_eq!(clipped, "ab…");
    }
}
