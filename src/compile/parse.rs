//! Turns the tokens of a [`Scanner`] into a [`Template`].
//!
//! Blocks are matched with a stack: an opening tag pushes a new block, and a
//! closing tag pops the innermost one, which must be of the same kind. This
//! keeps nested blocks of the same kind paired correctly.
pub mod tree;

mod state;

use crate::{
    compile::{
        parse::state::OpenBlock,
        scan::{token::Token, Scanner},
        tree::{Expression, Tree},
        Keyword, Template,
    },
    log::{Error, MISMATCHED_CLOSING_TAG, UNEXPECTED_CLOSING_TAG, UNTERMINATED_BLOCK},
    region::Region,
};

use morel::Finder;

pub struct Parser<'source> {
    /// Scanner used to pull from source as tokens instead of raw text.
    scanner: Scanner<'source>,
}

impl<'source> Parser<'source> {
    /// Create a new Parser from the given string.
    #[inline]
    pub fn new(source: &'source str, finder: &'source Finder) -> Self {
        Self {
            scanner: Scanner::new(source, finder),
        }
    }

    /// Compile the template.
    ///
    /// Returns a new Template, which can be rendered with a Context.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the source contains an unterminated
    /// expression, or a block that is not closed by a matching tag.
    pub fn compile(mut self) -> Result<Template<'source>, Error> {
        let source = self.scanner.source;

        // Blocks that are still waiting for a closing tag, innermost last.
        let mut open: Vec<OpenBlock> = vec![];
        let mut trees: Vec<Tree> = vec![];

        while let Some((token, region)) = self.scanner.next()? {
            let tree = match token {
                Token::Literal => Tree::Text(region),
                Token::Expression => {
                    let words = split_words(source, region);
                    let head = words.first().map(|word| &source[*word]).unwrap_or_default();

                    if let Some(keyword) = Keyword::opening(head) {
                        let rest = &words[1..];
                        let expression_region = match (rest.first(), rest.last()) {
                            (Some(first), Some(last)) => first.combine(*last),
                            _ => Region::new(region.end..region.end),
                        };

                        open.push(OpenBlock {
                            keyword,
                            expression: Expression::new(source, rest, expression_region),
                            body: vec![],
                            region,
                        });
                        continue;
                    }

                    match Keyword::closing(head) {
                        Some(keyword) => {
                            let block = close_block(source, &mut open, keyword, region)?;
                            Tree::Block(block.close(region))
                        }
                        None => Tree::Output(Expression::new(source, &words, region)),
                    }
                }
            };

            match open.last_mut() {
                Some(block) => block.body.push(tree),
                None => trees.push(tree),
            }
        }

        if let Some(block) = open.last() {
            let keyword = block.keyword;

            return Err(Error::build(UNTERMINATED_BLOCK)
                .with_pointer(source, block.region)
                .with_help(format!(
                    "did you close the `{keyword}` block with a `/{keyword}` tag?"
                )));
        }

        tracing::debug!(trees = trees.len(), "parsed template");

        Ok(Template { trees, source })
    }
}

/// Pop the innermost open block, which must have been opened by `keyword`.
///
/// # Errors
///
/// Returns an [`Error`] if no block is open, or the innermost block was
/// opened by a different keyword.
fn close_block(
    source: &str,
    open: &mut Vec<OpenBlock>,
    keyword: Keyword,
    region: Region,
) -> Result<OpenBlock, Error> {
    match open.pop() {
        Some(block) if block.keyword == keyword => Ok(block),
        Some(block) => {
            let expected = block.keyword;

            Err(Error::build(MISMATCHED_CLOSING_TAG)
                .with_pointer(source, region)
                .with_help(format!(
                    "expected `/{expected}` to close the `{expected}` block, found `/{keyword}`"
                )))
        }
        None => Err(Error::build(UNEXPECTED_CLOSING_TAG)
            .with_pointer(source, region)
            .with_help(format!("there is no open `{keyword}` block to close"))),
    }
}

/// Return the Region of each whitespace separated word within `region`.
fn split_words(source: &str, region: Region) -> Vec<Region> {
    let mut words = vec![];
    let mut begin: Option<usize> = None;

    for (index, char) in source[region].char_indices() {
        let at = region.begin + index;
        match (char.is_whitespace(), begin) {
            (true, Some(from)) => {
                words.push(Region::new(from..at));
                begin = None;
            }
            (false, None) => begin = Some(at),
            _ => {}
        }
    }
    if let Some(from) = begin {
        words.push(Region::new(from..region.end));
    }

    words
}
