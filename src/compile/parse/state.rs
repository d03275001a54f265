use crate::{
    compile::{
        tree::{Block, Expression, Tree},
        Keyword,
    },
    region::Region,
};

/// A block that has been opened but not yet closed.
#[derive(Debug)]
pub struct OpenBlock {
    /// Which helper opened the block.
    pub keyword: Keyword,
    /// The expression following the keyword.
    pub expression: Expression,
    /// Trees collected so far.
    pub body: Vec<Tree>,
    /// Region of the opening tag.
    pub region: Region,
}

impl OpenBlock {
    /// Finish the block with the closing tag found at `close`.
    pub fn close(self, close: Region) -> Block {
        Block {
            keyword: self.keyword,
            expression: self.expression,
            body: self.body,
            region: self.region.combine(close),
        }
    }
}
