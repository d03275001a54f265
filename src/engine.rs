use crate::{
    compile::{Builder, Parser, Template},
    log::Error,
    render::Renderer,
    Context,
};
use morel::Finder;

/// Facilitates compiling and rendering templates with a configured set of
/// markers.
pub struct Engine {
    /// Locates the markers that were configured when the Engine was created.
    finder: Finder,
}

impl Engine {
    /// Create a new instance of [`Engine`] with the markers from the given
    /// [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::{Builder, Context, Engine};
    ///
    /// let engine = Engine::new(Builder::new().with_expression("[[", "]]"));
    /// let result = engine.render("[[if on]]yes[[/if]]", &Context::new().with_must("on", true));
    ///
    /// assert_eq!(result.unwrap(), "yes");
    /// ```
    #[inline]
    pub fn new(builder: Builder) -> Self {
        Self {
            finder: Finder::new(builder.to_syntax()),
        }
    }

    /// Compile a new [`Template`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when compilation fails, which most likely means the source
    /// contains invalid syntax.
    #[inline]
    pub(crate) fn compile<'source>(
        &'source self,
        source: &'source str,
    ) -> Result<Template<'source>, Error> {
        Parser::new(source, &self.finder).compile()
    }

    /// Compile the source text and render it with the given [`Context`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the source contains invalid syntax, or a
    /// [`Helper`][`crate::Helper`] returns an `Error` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::{Context, Engine};
    ///
    /// let engine = Engine::default();
    /// let result = engine.render("hello, {{ name }}!", &Context::new().with_must("name", "taylor"));
    ///
    /// assert_eq!(result.unwrap(), "hello, taylor!");
    /// ```
    pub fn render(&self, source: &str, context: &Context) -> Result<String, Error> {
        let template = self.compile(source)?;
        let output = Renderer::new(&template, context).render()?;
        tracing::debug!(source = source.len(), output = output.len(), "rendered template");

        Ok(output)
    }
}

impl Default for Engine {
    /// Create a new instance of [`Engine`] with the default markers.
    #[inline]
    fn default() -> Self {
        Self::new(Builder::default())
    }
}
