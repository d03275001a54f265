use morel::Syntax;

/// Markers that identify expressions within text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Marker {
    /// Beginning of an Expression, which allows for outputting content,
    /// calling helpers and opening or closing blocks.
    BeginExpression = 0,
    /// End of an Expression.
    EndExpression = 1,
}

impl From<usize> for Marker {
    fn from(value: usize) -> Self {
        match value {
            0 => Self::BeginExpression,
            1 => Self::EndExpression,
            _ => unreachable!("syntax only registers two markers"),
        }
    }
}

impl From<Marker> for usize {
    fn from(k: Marker) -> Self {
        k as usize
    }
}

/// Provides methods to build a `Syntax`.
///
/// # Example
///
/// ```
/// use brace::{Builder, Context, Engine};
///
/// let engine = Engine::new(Builder::new().with_expression("<%", "%>"));
/// let result = engine.render("hello, <% name %>!", &Context::new().with_must("name", "taylor"));
///
/// assert_eq!(result.unwrap(), "hello, taylor!");
/// ```
#[derive(Debug, Clone)]
pub struct Builder<'marker> {
    expression: (&'marker str, &'marker str),
}

impl<'marker> Builder<'marker> {
    /// Create a new [`Builder`].
    ///
    /// The `Builder` has default markers:
    ///
    /// ```text
    /// Expressions: {{ name }}
    /// ```
    ///
    /// To proceed with these defaults, you may immediately call `to_syntax` to receive the
    /// [`Syntax`] instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            expression: ("{{", "}}"),
        }
    }

    /// Set the expression markers.
    ///
    /// # Panics
    ///
    /// Panics if either marker is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Builder;
    ///
    /// let mut builder = Builder::new();
    /// builder.set_expression("[[", "]]");
    /// ```
    #[inline]
    pub fn set_expression(&mut self, begin: &'marker str, end: &'marker str) {
        assert!(
            !begin.is_empty() && !end.is_empty(),
            "expression markers must not be empty"
        );
        self.expression = (begin, end);
    }

    /// Set the expression markers.
    ///
    /// Returns the [`Builder`], so additional methods may be chained.
    ///
    /// ```
    /// use brace::Builder;
    ///
    /// Builder::new()
    ///     .with_expression("[[", "]]");
    /// ```
    #[inline]
    pub fn with_expression(mut self, begin: &'marker str, end: &'marker str) -> Self {
        self.set_expression(begin, end);

        self
    }

    /// Return a Syntax instance from the markers in this [`Builder`].
    pub fn to_syntax(self) -> Syntax {
        let (begin, end) = self.expression;

        Syntax::new(vec![
            (Marker::BeginExpression.into(), begin.into()),
            (Marker::EndExpression.into(), end.into()),
        ])
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
