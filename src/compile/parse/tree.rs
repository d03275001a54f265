use crate::{compile::Keyword, region::Region};

/// The Abstract Syntax Tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// Raw text.
    Text(Region),
    /// Render the result of an Expression.
    Output(Expression),
    /// An "if" or "each" block with its body.
    Block(Block),
}

/// A block helper and the trees it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Which helper opened the block.
    pub keyword: Keyword,
    /// The condition of an "if", or the target of an "each".
    pub expression: Expression,
    /// Trees between the opening and closing tags.
    pub body: Vec<Tree>,
    /// Region spanning the opening tag through the closing tag.
    pub region: Region,
}

/// The content of an expression, split into words.
///
/// The first word is the head, which names a value or a helper. Any
/// remaining words are arguments that are passed to the helper.
///
/// ```text
/// {{ getClassNamesByStatus disabled prefix }}
///    |                     |        |
///    head                  arguments
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The value or helper to resolve.
    pub head: Variable,
    /// Values handed to the helper when the head resolves to one.
    pub arguments: Vec<Variable>,
    /// Location of the Expression.
    pub region: Region,
}

impl Expression {
    /// Create an Expression from the words found in source.
    ///
    /// An empty slice produces an Expression with an empty head located at
    /// the end of `region`.
    pub fn new(source: &str, words: &[Region], region: Region) -> Self {
        match words.split_first() {
            Some((head, arguments)) => Self {
                head: Variable::new(source, *head),
                arguments: arguments
                    .iter()
                    .map(|word| Variable::new(source, *word))
                    .collect(),
                region,
            },
            None => Self {
                head: Variable::empty(region.end),
                arguments: vec![],
                region,
            },
        }
    }
}

/// Set of keys that locate data within the scope.
///
/// `person.name` has a path of `person` and `name`. A segment made of
/// digits may also index into an array, as in `items.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Each period separated segment.
    pub path: Vec<Region>,
    /// Region spanning the whole Variable.
    pub region: Region,
}

impl Variable {
    /// Create a Variable by splitting the word at `region` on periods.
    pub fn new(source: &str, region: Region) -> Self {
        let mut path = vec![];
        let mut begin = region.begin;

        for (index, char) in source[region].char_indices() {
            if char == '.' {
                let at = region.begin + index;
                path.push(Region::new(begin..at));
                begin = at + 1;
            }
        }
        path.push(Region::new(begin..region.end));

        Self { path, region }
    }

    /// Create a Variable that names nothing, located at `at`.
    pub fn empty(at: usize) -> Self {
        Self {
            path: vec![],
            region: Region::new(at..at),
        }
    }
}
