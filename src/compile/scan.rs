pub mod token;

mod state;

use crate::{
    compile::{scan::state::CursorState, syntax::Marker},
    log::{error_unterminated_expression, Error, UNEXPECTED_DELIMITER},
    region::Region,
};

use morel::Finder;
use token::Token;

/// Result of reading from a [`Scanner`].
pub type TokenResult = Result<Option<(Token, Region)>, Error>;

/// Provides methods to read a source string as [`Token`] instances.
pub struct Scanner<'source> {
    /// Reference to the source text.
    pub source: &'source str,
    /// Position within source.
    pub cursor: usize,
    /// Compiled [`Finder`] instance used to search for markers
    /// in the source text.
    finder: &'source Finder,
    /// Tracks the [`Scanner`] state and determines the action taken
    /// when `.next` is called.
    state: CursorState,
}

impl<'source> Scanner<'source> {
    /// Create a new [`Scanner`] from the given source and [`Finder`].
    #[inline]
    pub fn new(source: &'source str, finder: &'source Finder) -> Self {
        Self {
            source,
            cursor: 0,
            finder,
            state: CursorState::Outside,
        }
    }

    /// Return the next [`Token`] and [`Region`].
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when an expression is opened but never closed,
    /// or a second opening marker appears inside of an expression.
    pub fn next(&mut self) -> TokenResult {
        loop {
            if self.cursor >= self.source.len() {
                return match self.state {
                    CursorState::Inside { open } => {
                        Err(error_unterminated_expression(self.source, open))
                    }
                    CursorState::Outside => Ok(None),
                };
            }

            let from = self.cursor;
            let scanned = match self.state {
                CursorState::Outside => self.scan_literal(from),
                CursorState::Inside { open } => self.scan_expression(from, open),
            }?;

            if scanned.is_some() {
                return Ok(scanned);
            }
        }
    }

    /// Read everything up to the next opening marker as a [`Token::Literal`].
    ///
    /// Assumes the cursor is outside of an expression. Nothing is returned
    /// when the opening marker sits directly at the cursor.
    fn scan_literal(&mut self, from: usize) -> TokenResult {
        let mut search = from;

        while let Some((id, marker_begin, marker_end)) = self.finder.next(self.source, search) {
            match Marker::from(id) {
                Marker::BeginExpression => {
                    self.cursor = marker_end;
                    self.state = CursorState::Inside {
                        open: (marker_begin..marker_end).into(),
                    };

                    if from == marker_begin {
                        return Ok(None);
                    }
                    return Ok(Some((Token::Literal, (from..marker_begin).into())));
                }
                // A closing marker with nothing open is plain text.
                Marker::EndExpression => search = marker_end,
            }
        }

        self.cursor = self.source.len();

        Ok(Some((Token::Literal, (from..self.source.len()).into())))
    }

    /// Read the content of an expression as a [`Token::Expression`].
    ///
    /// Assumes the cursor is inside of an expression.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when no closing marker follows, or another
    /// opening marker is found first.
    fn scan_expression(&mut self, from: usize, open: Region) -> TokenResult {
        match self.finder.next(self.source, from) {
            Some((id, marker_begin, marker_end)) => match Marker::from(id) {
                Marker::EndExpression => {
                    self.cursor = marker_end;
                    self.state = CursorState::Outside;
                    let content = Region::new(from..marker_begin).trim(self.source);

                    Ok(Some((Token::Expression, content)))
                }
                Marker::BeginExpression => Err(Error::build(UNEXPECTED_DELIMITER)
                    .with_pointer(self.source, marker_begin..marker_end)
                    .with_help("did you close the previous expression?")),
            },
            None => Err(error_unterminated_expression(self.source, open)),
        }
    }
}
