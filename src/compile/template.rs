use super::tree::Tree;

/// A parsed template, ready to be rendered against a `Context`.
#[derive(Debug, Clone)]
pub struct Template<'source> {
    /// The Abstract Syntax Tree generated during parsing.
    pub trees: Vec<Tree>,
    /// Reference to the source data from which this [`Template`] was generated.
    pub source: &'source str,
}
