use std::fmt::Display;

/// Types emitted by the Scanner.
///
/// The text of a token is recovered from the source with its
/// [`Region`][`crate::Region`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Text outside of any expression, kept verbatim.
    Literal,
    /// Content between expression markers, with surrounding whitespace
    /// removed.
    Expression,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal => write!(f, "literal"),
            Token::Expression => write!(f, "expression"),
        }
    }
}
