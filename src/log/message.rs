use super::Error;
use crate::region::Region;

pub const UNTERMINATED_EXPRESSION: &str = "unterminated expression";
pub const UNEXPECTED_DELIMITER: &str = "unexpected delimiter";
pub const UNEXPECTED_CLOSING_TAG: &str = "unexpected closing tag";
pub const MISMATCHED_CLOSING_TAG: &str = "mismatched closing tag";
pub const UNTERMINATED_BLOCK: &str = "unterminated block";
pub const INVALID_CONTEXT: &str = "invalid context";

/// Return an [`Error`] explaining that the expression opened at `open`
/// never reaches a closing delimiter.
pub fn error_unterminated_expression(source: &str, open: Region) -> Error {
    Error::build(UNTERMINATED_EXPRESSION)
        .with_pointer(source, open)
        .with_help("expected a closing delimiter, did you close all expressions?")
}

/// Return an [`Error`] explaining that the write operation failed.
///
/// This is likely caused by a failure during a `write!` macro operation.
pub fn error_write() -> Error {
    Error::build("write failure").with_help("failed to write result of render, are you low on memory?")
}
