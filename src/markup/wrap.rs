//! Greedy word wrap for a single logical block of text.
//!
//! Widths are counted in chars. Existing `'\n'` characters are hard breaks:
//! they are always kept and reset the column counter.

/// Wrap `text` so that no line exceeds `width` columns, breaking only at spaces.
///
/// - `width == 0` returns the input unchanged.
/// - `width < 0` joins every line onto one (each `'\n'` becomes a space).
///
/// A single word longer than `width` is never split; it simply overflows its line.
#[must_use]
pub fn wrap(text: &str, width: isize) -> String {
    if width == 0 {
        return text.to_owned();
    }
    if width < 0 {
        return text.replace('\n', " ");
    }
    let width = width.unsigned_abs();

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut column = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\n' => {
                out.push('\n');
                column = 0;
            }
            ' ' => {
                if column + next_word_len(&chars[i + 1..]) + 1 > width {
                    out.push('\n');
                    column = 0;
                } else {
                    out.push(' ');
                    column += 1;
                }
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// Length of the word at the start of `rest`, stopping at a space or hard break.
fn next_word_len(rest: &[char]) -> usize {
    rest.iter().take_while(|&&c| c != ' ' && c != '\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_short_sentence() {
        assert_eq!(
            wrap("Here's a string that's not long.", 10),
            "Here's a\nstring\nthat's not\nlong."
        );
    }

    #[test]
    fn test_zero_width_is_noop() {
        let text = "some  text\nwith   spacing";
        assert_eq!(wrap(text, 0), text);
    }

    #[test]
    fn test_negative_width_collapses() {
        assert_eq!(wrap("one\ntwo\nthree", -1), "one two three");
    }

    #[test]
    fn test_hard_breaks_reset_column() {
        assert_eq!(wrap("aaaa\nbb cc", 5), "aaaa\nbb cc");
    }

    #[test]
    fn test_peek_stops_at_hard_break() {
        // "cc" alone fits after "bb"; the text after the newline must not count.
        assert_eq!(wrap("bb cc\ndddddddddd", 5), "bb cc\ndddddddddd");
    }

    #[test]
    fn test_long_word_overflows_without_split() {
        assert_eq!(wrap("a extraordinarily b", 5), "a\nextraordinarily\nb");
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        assert_eq!(wrap("ééé ééé", 7), "ééé ééé");
        assert_eq!(wrap("ééé ééé", 6), "ééé\nééé");
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let text = "the quick brown fox jumps over the lazy dog and keeps running";
        for line in wrap(text, 12).lines() {
            assert!(line.chars().count() <= 12, "line too long: {line:?}");
        }
    }
}
