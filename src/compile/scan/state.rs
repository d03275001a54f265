use crate::region::Region;

/// Describes the internal state of a [`Scanner`][`super::Scanner`].
#[derive(Debug, PartialEq)]
pub enum CursorState {
    /// Indicates the [`Scanner`][`super::Scanner`] is not inside of an
    /// expression.
    Outside,
    /// Indicates the [`Scanner`][`super::Scanner`] is inside of an
    /// expression.
    Inside {
        /// Location of the marker that opened the expression.
        open: Region,
    },
}
