use super::{Pointer, RED, RESET};
use crate::{log::Visual, region::Region};
use std::fmt::{Debug, Display, Formatter, Result};

/// Describes an error, and allows adding a contextual help text and visualization.
///
/// # Examples
///
/// Creating an [`Error`] that includes a [`Visual`] of type [`Pointer`]:
///
/// ```
/// use brace::{Error, Region};
///
/// Error::build("mismatched closing tag")
///     .with_pointer("{{if a}}{{/each}}", Region::new(10..15))
///     .with_help("expected `/if` to close the `if` block");
/// ```
///
/// When printed with `println!("{:#}", error)` the [`Error`] produces this output:
///
/// ```text
/// error: mismatched closing tag
///  --> 1:11
///   |
/// 1 | {{if a}}{{/each}}
///   |           ^^^^^
///   |
///  = help: expected `/if` to close the `if` block
/// ```
pub struct Error {
    /// Describes the cause of the [`Error`].
    reason: String,
    /// A visualization to help illustrate the [`Error`].
    visual: Option<Box<dyn Visual>>,
    /// Additional information to display with the [`Error`].
    help: Option<String>,
}

impl Error {
    /// Create a new [`Error`] with the given reason text.
    ///
    /// The additional fields may be populated using the various methods
    /// defined on `Error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Error;
    ///
    /// Error::build("price is not a number")
    ///     .with_help("pass a numeric `price` to the `currency` helper");
    /// ```
    pub fn build<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Error {
            reason: reason.into(),
            visual: None,
            help: None,
        }
    }

    /// Set the reason text, which is a short summary of the [`Error`].
    pub fn with_reason<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.reason = text.into();

        self
    }

    /// Set the [`Visual`], which is a visualization that helps illustrate the
    /// cause of the error.
    pub fn with_visual(mut self, visual: impl Visual + 'static) -> Self {
        self.visual = Some(Box::new(visual));

        self
    }

    /// Set the visualization to a new [`Pointer`] with the given source text and
    /// [`Region`].
    ///
    /// This is a shortcut for creating a `Pointer` yourself and passing it to
    /// `with_visual`.
    pub fn with_pointer<T>(self, source: &str, region: T) -> Self
    where
        T: Into<Region>,
    {
        self.with_visual(Pointer::new(source, region.into()))
    }

    /// Set the help text, which is contextual information to accompany the
    /// reason text.
    pub fn with_help<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.help = Some(text.into());

        self
    }

    /// Return the reason text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Return the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Attach a [`Pointer`] unless a visualization was already set.
    pub(crate) fn or_pointer(self, source: &str, region: Region) -> Self {
        if self.visual.is_some() {
            return self;
        }

        self.with_pointer(source, region)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !f.alternate() {
            writeln!(f, "{self:#}")?;
        }
        f.debug_struct("Error")
            .field("reason", &self.reason)
            .field("visual", &self.visual)
            .field("help", &self.help)
            .finish()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{RED}error{RESET}: {}", self.reason)?;

        match &self.visual {
            Some(visual) if f.alternate() => visual.display(f, self.help.as_deref()),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.reason == other.reason && self.help == other.help
    }
}
