use serde::Serialize;

/// A lexer error with location information.
///
/// Every lexical error is fatal to the line being scanned. The kind is kept
/// structurally so callers can branch on it; `Display` renders kind and
/// location as a deterministic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}{kind}", location_prefix(.line, .offset))]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line number, when the caller supplied one.
    pub line: Option<u32>,
    /// 0-based character offset within the line where the condition was
    /// detected.
    pub offset: u32,
}

impl LexError {
    /// Create a new lexer error with no line information yet.
    pub fn new(kind: LexErrorKind, offset: u32) -> Self {
        Self {
            kind,
            line: None,
            offset,
        }
    }

    /// Attach the 1-based line number the error occurred on.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Move the offset right by `offset` characters.
    pub fn shifted(mut self, offset: u32) -> Self {
        self.offset += offset;
        self
    }
}

fn location_prefix(line: &Option<u32>, offset: &u32) -> String {
    match line {
        Some(line) => format!("line {line}, character {offset}: "),
        None => format!("character {offset}: "),
    }
}

/// The specific kind of lexer error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum LexErrorKind {
    /// The line ended inside a string literal.
    #[error("no closing delimiter found for this string")]
    StringNotEnded,
    /// An interpolation delimiter appeared outside of any string.
    #[error("interpolation delimiter outside of a string")]
    NotInString,
    /// An interpolation delimiter appeared in a string whose delimiter does
    /// not allow interpolation.
    #[error("cannot interpolate in a string delimited by {delimiter:?}")]
    NotInInterpolationString { delimiter: char },
    /// The line ended inside an interpolation segment.
    #[error("no closing delimiter found for this interpolation")]
    InterpolationNotEnded,
}

impl LexErrorKind {
    /// Stable upper-case name of the kind, used in diagnostics output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StringNotEnded => "STRING_NOT_ENDED",
            Self::NotInString => "NOT_IN_STRING",
            Self::NotInInterpolationString { .. } => "NOT_IN_INTERPOLATION_STRING",
            Self::InterpolationNotEnded => "INTERPOLATION_NOT_ENDED",
        }
    }
}
