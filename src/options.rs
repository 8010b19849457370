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

//! Caller-supplied knobs for a single parse. Kept deliberately small: the
//! grammar and the rotation algorithm are not configurable, only which
//! operators exist and which code point separates a number's integer and
//! fractional parts.

use std::borrow::Cow;

use crate::catalogue::Catalogue;

/// Options governing one [`crate::parse`] or [`crate::parse_variable`] call.
///
/// Build one with [`ParserOptions::new`] and the chained setters, or just use
/// [`ParserOptions::default`] for the conventional arithmetic catalogue and a
/// `.` decimal separator.
#[derive(Clone, Debug)]
pub struct ParserOptions<'a> {
    catalogue: Cow<'a, Catalogue>,
    decimal_separator: char,
}

impl<'a> ParserOptions<'a> {
    /// Starts from the default catalogue and separator; use the setters to
    /// override either.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the operator catalogue consulted by the scanner and the
    /// rotation fix-up.
    pub fn catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogue = Cow::Owned(catalogue);
        self
    }

    /// Borrows an existing catalogue instead of cloning one, for callers
    /// that reuse the same catalogue across many parses.
    pub fn catalogue_ref(mut self, catalogue: &'a Catalogue) -> Self {
        self.catalogue = Cow::Borrowed(catalogue);
        self
    }

    /// Sets the single code point that separates a number's integer and
    /// fractional parts. `.` unless overridden.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub(crate) fn catalogue_in_use(&self) -> &Catalogue {
        &self.catalogue
    }

    pub(crate) fn decimal_separator_in_use(&self) -> char {
        self.decimal_separator
    }
}

impl Default for ParserOptions<'_> {
    fn default() -> Self {
        ParserOptions { catalogue: Cow::Owned(Catalogue::default()), decimal_separator: '.' }
    }
}
