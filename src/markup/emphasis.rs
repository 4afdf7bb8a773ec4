//! Inline emphasis: `*italic*`, `**bold**`, `***bold italic***` and `<identifier>`.
//!
//! A single pass over the chars of the input. Star runs are buffered until the
//! next non-star char decides what they are:
//!
//! - after whitespace (or at the start) a run is an *opener*; it becomes the
//!   style's begin sequence unless the next char is whitespace, in which case
//!   the stars are kept literally;
//! - after anything else a run is a *closer* and becomes the reset sequence.
//!
//! There is no stack: styles don't nest and a closer doesn't check which
//! opener (if any) it closes. `<...>` spans are upper-cased and underlined,
//! with the brackets consumed.

use super::styles::Styles;

/// A star run waiting for the char that decides its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Opener(usize),
    Closer,
}

struct Emphasizer<'a> {
    styles: &'a Styles,
    out: String,
    prev: char,
    pending: Pending,
    /// A begin sequence was emitted and no reset has followed it yet.
    open: bool,
}

impl<'a> Emphasizer<'a> {
    fn new(styles: &'a Styles, capacity: usize) -> Self {
        Self {
            styles,
            out: String::with_capacity(capacity),
            prev: ' ',
            pending: Pending::None,
            open: false,
        }
    }

    fn star(&mut self) {
        self.pending = match self.pending {
            Pending::Opener(n) => Pending::Opener(n + 1),
            Pending::Closer => Pending::Closer,
            Pending::None if self.prev.is_whitespace() => Pending::Opener(1),
            Pending::None => Pending::Closer,
        };
    }

    /// Settle a pending star run now that `next` is known to follow it.
    fn resolve(&mut self, next: char) {
        match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => {}
            Pending::Opener(n) if next.is_whitespace() => push_stars(&mut self.out, n),
            Pending::Opener(n) => {
                let begin = match n {
                    1 => Some(&self.styles.italic),
                    2 => Some(&self.styles.bold),
                    3 => Some(&self.styles.bold_italic),
                    _ => None,
                };
                if let Some(begin) = begin {
                    self.out.push_str(begin);
                    self.open = true;
                } else {
                    push_stars(&mut self.out, n);
                }
            }
            Pending::Closer => {
                self.out.push_str(&self.styles.reset);
                self.open = false;
            }
        }
    }

    /// Emit an identifier span starting just after `<`; returns the index after `>`.
    fn identifier(&mut self, chars: &[char], start: usize) -> usize {
        self.out.push_str(&self.styles.under);
        let mut i = start;
        while let Some(&c) = chars.get(i) {
            if c == '>' {
                i += 1;
                break;
            }
            self.out.extend(c.to_uppercase());
            i += 1;
        }
        self.out.push_str(&self.styles.reset);
        self.prev = '>';
        i
    }

    fn finish(mut self) -> String {
        match self.pending {
            Pending::Opener(n) => {
                push_stars(&mut self.out, n);
                if self.open {
                    self.out.push_str(&self.styles.reset);
                }
            }
            Pending::Closer => self.out.push_str(&self.styles.reset),
            Pending::None if self.open => self.out.push_str(&self.styles.reset),
            Pending::None => {}
        }
        self.out
    }
}

fn push_stars(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n('*', n));
}

/// Replace emphasis markup in `text` with the escape sequences from `styles`.
///
/// Never fails: unmatched or unterminated markup is either kept literally or
/// closed with a reset at the end of the text.
#[must_use]
pub fn emphasize(text: &str, styles: &Styles) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut em = Emphasizer::new(styles, text.len() + 16);

    let mut i = 0;
    while let Some(&c) = chars.get(i) {
        if c == '*' {
            em.star();
            i += 1;
            continue;
        }

        em.resolve(c);

        if c == '<' {
            i = em.identifier(&chars, i + 1);
            continue;
        }

        em.out.push(c);
        em.prev = c;
        i += 1;
    }

    em.finish()
}
