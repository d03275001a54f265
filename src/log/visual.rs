mod pointer;

pub use pointer::Pointer;

use std::fmt::{Debug, Formatter, Result};

const BLANK: &str = "";
const PIPE: &str = "|";
const EQUAL: &str = "=";
const HIGHLIGHT: &str = "^";

/// Describes a type that can be associated with an Error and used
/// to print a visualization.
pub trait Visual: Debug + Send + Sync {
    /// Display the visualization by writing to the given Formatter.
    fn display(&self, formatter: &mut Formatter<'_>, help: Option<&str>) -> Result;
}

/// Return the zero indexed line containing the byte `offset`, along with the
/// byte offset at which that line begins.
fn get_line(source: &str, offset: usize) -> (usize, usize) {
    let mut begin = 0;

    for (i, line) in source.split('\n').enumerate() {
        let end = begin + line.len();
        if offset <= end {
            return (i, begin);
        }
        begin = end + 1;
    }

    (source.split('\n').count().saturating_sub(1), begin)
}

/// Wrapper for UnicodeWidthStr::width.
fn get_width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}
