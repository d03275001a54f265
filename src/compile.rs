mod parse;
mod scan;
mod syntax;
mod template;

pub use crate::compile::{
    parse::{tree, Parser},
    scan::{token, Scanner},
    syntax::{Builder, Marker},
    template::Template,
};

use std::fmt::Display;

/// Names of the block helpers recognized by the Parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    /// Beginning of an "if" block, which renders its body when the
    /// condition is truthy.
    If,
    /// Beginning of an "each" block, which renders its body once per
    /// element of a sequence or entry of a mapping.
    Each,
}

impl Keyword {
    /// Return the [`Keyword`] opened by the given head, if any.
    ///
    /// `if` and `each` open blocks.
    pub fn opening(head: &str) -> Option<Self> {
        match head {
            "if" => Some(Keyword::If),
            "each" => Some(Keyword::Each),
            _ => None,
        }
    }

    /// Return the [`Keyword`] closed by the given head, if any.
    ///
    /// `/if` and `/each` close blocks.
    pub fn closing(head: &str) -> Option<Self> {
        head.strip_prefix('/').and_then(Self::opening)
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::If => write!(f, "if"),
            Keyword::Each => write!(f, "each"),
        }
    }
}
