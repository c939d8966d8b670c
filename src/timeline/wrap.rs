//! Greedy label wrapping.
//!
//! Breaks are emitted as `<br>` markup rather than newlines because labels
//! and tooltips are rendered from markup strings.

pub const LINE_BREAK: &str = "<br>";

pub const DEFAULT_WRAP_THRESHOLD: usize = 30;

/// Pack words onto lines of roughly `threshold` characters.
///
/// The running counter adds `len(word) + 1` after every word, including the
/// first word of a line, and a break is inserted whenever the next word would
/// push it past `threshold`. Words are never split, so an over-long word sits
/// on its own line (and is itself preceded by a break, even at the start).
pub fn split_text(text: &str, threshold: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_length = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_length + word_len + 1 > threshold {
            out.push_str(LINE_BREAK);
            line_length = 0;
        } else if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        line_length += word_len + 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_before_overflowing_word() {
        let wrapped = split_text("Artificial Intelligence Winter Begins Now", 30);
        assert_eq!(wrapped, "Artificial Intelligence<br>Winter Begins Now");
    }

    #[test]
    fn test_long_word_is_not_split() {
        let word = "a".repeat(35);
        let wrapped = split_text(&word, 10);
        assert_eq!(wrapped, format!("<br>{word}"));
        assert_eq!(wrapped.replace(LINE_BREAK, ""), word);
    }

    #[test]
    fn test_long_word_pushes_next_word_to_new_line() {
        let wrapped = split_text("Backpropagation is neat", 10);
        assert_eq!(wrapped, "<br>Backpropagation<br>is neat");
    }

    #[test]
    fn test_short_text_unchanged() {
        for text in ["GPT-3", "Deep Blue beats Kasparov", "a b c d e f g h i j k l m n"] {
            assert!(text.chars().count() < DEFAULT_WRAP_THRESHOLD);
            assert_eq!(split_text(text, DEFAULT_WRAP_THRESHOLD), text);
        }
    }

    #[test]
    fn test_length_equal_to_threshold_breaks_last_word() {
        // 10 chars: the separator counted after "abcd" pushes "efghi" over
        assert_eq!(split_text("abcd efghi", 10), "abcd<br>efghi");
        assert_eq!(split_text("abcd efgh", 10), "abcd efgh");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(split_text("", 30), "");
        assert_eq!(split_text("   \t ", 30), "");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 9 chars each, 18 bytes each in UTF-8
        let wrapped = split_text("ééééééééé ééééééééé", 20);
        assert!(!wrapped.contains(LINE_BREAK));
    }

    #[test]
    fn test_multiple_lines() {
        let wrapped = split_text(
            "ImageNet Classification with Deep Convolutional Neural Networks",
            20,
        );
        assert_eq!(
            wrapped,
            "ImageNet<br>Classification with<br>Deep Convolutional<br>Neural Networks"
        );
    }
}
