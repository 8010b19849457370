// This file is part of polish-parse.
// Copyright (C) 2026 the polish-parse authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The error type returned by every entry point in this crate.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// What went wrong. Carried inside [`Error`] alongside the byte range where
/// it was detected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ErrorCause {
    /// The top-level statement grammar did not match, or matched but left
    /// input unconsumed.
    #[error("the input is not a single complete statement")]
    ParsingFailed,
    /// A parenthesized statement's interior failed to parse as a statement
    /// at all (distinct from an ordinary backtrackable mismatch: once an
    /// opening parenthesis is seen, its interior must be a statement).
    #[error("the parenthesized expression does not contain a valid statement")]
    InvalidStatement,
    /// An opening parenthesis was seen and its interior parsed, but no
    /// matching closing parenthesis followed.
    #[error("missing closing parenthesis")]
    UnmatchedBraces,
    /// The input given to a variable-only entry point is not exactly one
    /// word, or that word collides with a known operator name.
    #[error("input is not a single valid variable name")]
    InvalidVariableName,
}

/// An error together with the byte range in the original input where it was
/// detected. `location` is empty (`start == end`) when the error was
/// detected at end of input rather than at a specific lexeme.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    pub cause: ErrorCause,
    pub location: Range<usize>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {}..{})", self.cause, self.location.start, self.location.end)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let error = Error { cause: ErrorCause::UnmatchedBraces, location: 3..3 };
        assert_eq!(error.to_string(), "missing closing parenthesis (at byte 3..3)");
    }
}
