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

//! The cursor and its scanning primitives. Each `match_*` primitive either
//! consumes a token and leaves the cursor just past its trailing whitespace,
//! or leaves the cursor exactly where it found it and returns `None` —
//! except [`Scanner::match_operator`]'s word-form branch, which deliberately
//! does not; see the note on that method.

use std::ops::Range;

use crate::catalogue::{Catalogue, Category};
use crate::classify::{CharClass, ClassTable};

/// A cursor over one input string, plus the precomputed classification table
/// for that input. Cheap to snapshot: [`Scanner::save`] and
/// [`Scanner::restore`] just copy and restore a character index.
pub struct Scanner<'a> {
    input: &'a str,
    table: ClassTable,
    at: usize,
    decimal_separator: char,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, decimal_separator: char) -> Self {
        Scanner { input, table: ClassTable::build(input), at: 0, decimal_separator }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.table.byte_offset(char_index)
    }

    fn peek_class(&self) -> Option<CharClass> {
        self.table.class_at(self.at)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.byte_offset(self.at)..].chars().next()
    }

    /// The current cursor position as a byte offset into the original
    /// input. Used to tag the items produced at this position.
    pub fn position(&self) -> usize {
        self.byte_offset(self.at)
    }

    pub fn at_end(&self) -> bool {
        self.at >= self.table.len()
    }

    /// Snapshots the cursor for later [`restore`](Scanner::restore).
    pub fn save(&self) -> usize {
        self.at
    }

    pub fn restore(&mut self, mark: usize) {
        self.at = mark;
    }

    /// Advances past a maximal run of whitespace. Idempotent; every other
    /// primitive calls this both before attempting a match and after a
    /// successful one.
    pub fn skip_whitespace(&mut self) {
        while self.peek_class() == Some(CharClass::Whitespace) {
            self.at += 1;
        }
    }

    /// Consumes a maximal run of letters/digits starting with a letter, if
    /// the cursor (after skipping leading whitespace) sits on one. Returns
    /// the consumed byte range without skipping trailing whitespace, so
    /// callers that need the raw lexeme (variable names, operator names) can
    /// inspect it before deciding whether to keep the match.
    fn scan_word(&mut self) -> Option<Range<usize>> {
        self.skip_whitespace();
        if self.peek_class() != Some(CharClass::Letter) {
            return None;
        }
        let start = self.at;
        while matches!(self.peek_class(), Some(CharClass::Letter) | Some(CharClass::Digit)) {
            self.at += 1;
        }
        Some(self.byte_offset(start)..self.byte_offset(self.at))
    }

    /// Consumes a maximal word, reporting only whether one was found.
    pub fn match_word(&mut self) -> bool {
        let mark = self.at;
        if self.scan_word().is_some() {
            self.skip_whitespace();
            true
        } else {
            self.at = mark;
            false
        }
    }

    /// Consumes a variable name: a word that is not registered in
    /// `catalogue` under any category. On a collision, the match is
    /// rejected and the cursor is restored, since a bare word-form operator
    /// name is never a legal variable.
    pub fn match_variable_name(&mut self, catalogue: &Catalogue) -> Option<(String, usize)> {
        let mark = self.at;
        let range = self.scan_word()?;
        let name = &self.input[range.clone()];
        if catalogue.is_known(name) {
            self.at = mark;
            return None;
        }
        let name = name.to_string();
        self.skip_whitespace();
        Some((name, range.start))
    }

    /// Consumes a maximal run of digits that may contain at most one
    /// occurrence of the configured decimal separator. A second separator
    /// simply stops the run rather than erroring here; the caller's
    /// requirement to consume the whole input is what turns a trailing
    /// separator into a parse failure.
    pub fn match_number(&mut self) -> Option<(String, usize)> {
        self.skip_whitespace();
        if self.peek_class() != Some(CharClass::Digit) {
            return None;
        }
        let start = self.at;
        let mut seen_separator = false;
        loop {
            match self.peek_class() {
                Some(CharClass::Digit) => self.at += 1,
                _ if !seen_separator && self.peek_char() == Some(self.decimal_separator) => {
                    seen_separator = true;
                    self.at += 1;
                }
                _ => break,
            }
        }
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(self.at);
        let lexeme = self.input[start_byte..end_byte].to_string();
        self.skip_whitespace();
        Some((lexeme, start_byte))
    }

    fn match_punct(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek_char() != Some(c) {
            return false;
        }
        self.at += 1;
        self.skip_whitespace();
        true
    }

    pub fn match_opening_brace(&mut self) -> bool {
        self.match_punct('(')
    }

    pub fn match_closing_brace(&mut self) -> bool {
        self.match_punct(')')
    }

    /// Consumes an operator name of the given `category`: a word-form name
    /// (looked up whole) or, failing that, the longest run of symbol
    /// characters registered in `catalogue` under `category`.
    ///
    /// Word-form lookup misses are **not** rewound: the word is consumed
    /// from the cursor regardless of whether it resolved to a known
    /// operator. Every call site snapshots the cursor before attempting an
    /// alternative that includes this primitive, so the miss never corrupts
    /// a sibling alternative — but taken in isolation this primitive's
    /// cursor is left mid-word on a miss. See `tests/open_questions.rs`.
    pub fn match_operator(
        &mut self,
        catalogue: &Catalogue,
        category: Category,
    ) -> Option<(crate::catalogue::OperatorInfo, usize)> {
        self.skip_whitespace();
        match self.peek_class() {
            Some(CharClass::Letter) => {
                let range = self.scan_word()?;
                let word = &self.input[range.clone()];
                match catalogue.find(word, category) {
                    Some(info) => {
                        self.skip_whitespace();
                        Some((info, range.start))
                    }
                    None => None,
                }
            }
            Some(CharClass::Symbol) => {
                let remaining = self.table.len() - self.at;
                let max_len = catalogue.longest_symbolic(category).min(remaining);
                for len in (1..=max_len).rev() {
                    let start_byte = self.byte_offset(self.at);
                    let end_byte = self.byte_offset(self.at + len);
                    let candidate = &self.input[start_byte..end_byte];
                    if let Some(info) = catalogue.find(candidate, category) {
                        self.at += len;
                        self.skip_whitespace();
                        return Some((info, start_byte));
                    }
                }
                None
            }
            _ => None,
        }
    }
}
