//! Incremental symbol matching.
//!
//! A [`Walk`] is fed one character at a time and narrows the set of symbol
//! table entries that could still match. It is a plain value moved through
//! [`Walk::feed`], so the matcher carries no hidden state and can be driven
//! and tested on its own.

use brace_common::symbol::{is_word_char, symbol_from_str, symbols_starting_with, Symbol};

/// State of the symbol matcher between two characters.
#[derive(Debug, Default)]
pub enum Walk {
    /// No symbol is being matched.
    #[default]
    Idle,
    /// Characters from `start` spell a prefix of every entry in `candidates`.
    Matching {
        start: u32,
        spelled: String,
        candidates: Vec<&'static Symbol>,
    },
}

/// Outcome of feeding one character to a [`Walk`].
///
/// `consumed` is false when the character only terminated the walk; the
/// caller must feed it again to an idle walk.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The character extended the walk; nothing resolved yet.
    Pending,
    /// The walk resolved to a symbol covering `start..end`.
    Matched {
        symbol: &'static Symbol,
        start: u32,
        end: u32,
        consumed: bool,
    },
    /// The text starting at `start` matches no symbol and belongs to the
    /// unknown-word accumulation.
    Unknown {
        text: String,
        start: u32,
        consumed: bool,
    },
}

impl Walk {
    pub fn is_idle(&self) -> bool {
        matches!(self, Walk::Idle)
    }

    /// Feed the character `c` found at `pos`. `prev` is the character just
    /// before it on the line, used for keyword boundaries.
    pub fn feed(self, c: char, prev: Option<char>, pos: u32) -> (Walk, Step) {
        match self {
            Walk::Idle => Self::begin(c, prev, pos),
            Walk::Matching {
                start,
                mut spelled,
                candidates,
            } => {
                let depth = spelled.chars().count();
                let narrowed: Vec<_> = candidates
                    .into_iter()
                    .filter(|symbol| symbol.char_at(depth) == Some(c))
                    .collect();

                if narrowed.is_empty() {
                    return (Walk::Idle, resolve(start, spelled, Some(c), pos));
                }

                spelled.push(c);
                Self::extend(start, spelled, narrowed, pos)
            }
        }
    }

    /// Resolve a pending walk at end of line. `pos` is the line length.
    pub fn finish(self, pos: u32) -> Option<Step> {
        match self {
            Walk::Idle => None,
            Walk::Matching { start, spelled, .. } => Some(resolve(start, spelled, None, pos)),
        }
    }

    fn begin(c: char, prev: Option<char>, pos: u32) -> (Walk, Step) {
        let at_boundary = prev.map_or(true, |p| !is_word_char(p));
        let candidates: Vec<_> = symbols_starting_with(c)
            .iter()
            .copied()
            .filter(|symbol| at_boundary || !symbol.is_keyword())
            .collect();

        if candidates.is_empty() {
            let step = Step::Unknown {
                text: c.to_string(),
                start: pos,
                consumed: true,
            };
            return (Walk::Idle, step);
        }

        Self::extend(pos, c.to_string(), candidates, pos)
    }

    /// `spelled` now ends with the character at `pos`. Resolve eagerly when a
    /// single non-keyword candidate is fully spelled; keywords wait for the
    /// next character to check the trailing boundary.
    fn extend(
        start: u32,
        spelled: String,
        candidates: Vec<&'static Symbol>,
        pos: u32,
    ) -> (Walk, Step) {
        if let [only] = candidates.as_slice() {
            if !only.is_keyword() && only.spelling == spelled {
                let step = Step::Matched {
                    symbol: *only,
                    start,
                    end: pos + 1,
                    consumed: true,
                };
                return (Walk::Idle, step);
            }
        }

        let walk = Walk::Matching {
            start,
            spelled,
            candidates,
        };
        (walk, Step::Pending)
    }
}

/// Terminate a walk at `end`, `next` being the character that stopped it.
fn resolve(start: u32, spelled: String, next: Option<char>, end: u32) -> Step {
    match symbol_from_str(&spelled) {
        Some(symbol) if !(symbol.is_keyword() && next.is_some_and(is_word_char)) => Step::Matched {
            symbol,
            start,
            end,
            consumed: false,
        },
        _ => Step::Unknown {
            text: spelled,
            start,
            consumed: false,
        },
    }
}
