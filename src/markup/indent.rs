//! Prefix every line with a fixed number of spaces.

/// Indent each `'\n'`-separated line of `text` by `spaces` spaces.
///
/// Line count and order are preserved. Empty input stays empty.
#[must_use]
pub fn indent(text: &str, spaces: usize) -> String {
    if text.is_empty() || spaces == 0 {
        return text.to_owned();
    }

    let pad = " ".repeat(spaces);
    let mut out = String::with_capacity(text.len() + pad.len() * (text.lines().count() + 1));
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&pad);
        out.push_str(line);
    }
    out
}
