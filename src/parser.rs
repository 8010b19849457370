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

//! The recursive-descent grammar: `statement`, `operation`, `block`, and
//! `operand`, each trying its alternatives in turn and backtracking on a
//! soft mismatch. A hard error — an opening parenthesis whose interior does
//! not parse, or whose close is missing — is never backtracked past; it
//! propagates straight out of `parse`.

use bitflags::bitflags;

use crate::arena::{Arena, NodeId};
use crate::catalogue::{Catalogue, Category};
use crate::error::{Error, ErrorCause};
use crate::linearize::linearize;
use crate::node::Item;
use crate::rotate::attach_and_fixup;
use crate::scanner::Scanner;

bitflags! {
    /// Modifiers threaded through `parse_statement`'s recursive calls.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct StatementFlags: u8 {
        /// The match must consume the entire remaining input (after
        /// trailing whitespace); used only at the outermost call.
        const FULL = 0b01;
        /// The `operation` alternative is skipped for this call, so an
        /// infix operator's left operand can never itself start with an
        /// operation — it prevents `a + b + c` from trying to parse `a + b`
        /// as the left operand of the outer `+`.
        const NOT_OPERATION = 0b10;
    }
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    arena: Arena,
    catalogue: &'a Catalogue,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, catalogue: &'a Catalogue, decimal_separator: char) -> Self {
        Parser { scanner: Scanner::new(input, decimal_separator), arena: Arena::new(), catalogue }
    }

    fn parse_statement(&mut self, flags: StatementFlags) -> Result<Option<NodeId>, Error> {
        let mark = self.scanner.save();

        let mut result = if flags.contains(StatementFlags::NOT_OPERATION) {
            None
        } else {
            self.parse_operation()?
        };

        if result.is_none() {
            self.scanner.restore(mark);
            result = self.parse_block()?;
        }
        if result.is_none() {
            self.scanner.restore(mark);
            result = self.parse_operand();
        }

        let Some(node) = result else {
            return Ok(None);
        };

        if flags.contains(StatementFlags::FULL) {
            self.scanner.skip_whitespace();
            if !self.scanner.at_end() {
                self.scanner.restore(mark);
                return Ok(None);
            }
        }
        Ok(Some(node))
    }

    fn parse_operation(&mut self) -> Result<Option<NodeId>, Error> {
        let mark = self.scanner.save();

        if let Some(op) = self.match_operator_node(Category::Prefix) {
            if let Some(rhs) = self.parse_statement(StatementFlags::empty())? {
                return Ok(Some(attach_and_fixup(&mut self.arena, op, rhs, true)));
            }
        }
        self.scanner.restore(mark);

        if let Some(lhs) = self.parse_statement(StatementFlags::NOT_OPERATION)? {
            if let Some(op) = self.match_operator_node(Category::Infix) {
                if let Some(rhs) = self.parse_statement(StatementFlags::empty())? {
                    self.arena.get_mut(op).left = Some(lhs);
                    return Ok(Some(attach_and_fixup(&mut self.arena, op, rhs, false)));
                }
            }
        }
        self.scanner.restore(mark);
        Ok(None)
    }

    fn parse_block(&mut self) -> Result<Option<NodeId>, Error> {
        if !self.scanner.match_opening_brace() {
            return Ok(None);
        }
        let Some(node) = self.parse_statement(StatementFlags::empty())? else {
            let at = self.scanner.position();
            return Err(Error { cause: ErrorCause::InvalidStatement, location: at..at });
        };
        if !self.scanner.match_closing_brace() {
            let at = self.scanner.position();
            return Err(Error { cause: ErrorCause::UnmatchedBraces, location: at..at });
        }
        self.arena.get_mut(node).grouped = true;
        Ok(Some(node))
    }

    fn parse_operand(&mut self) -> Option<NodeId> {
        if let Some((lexeme, offset)) = self.scanner.match_number() {
            return Some(self.arena.alloc(Item::Number { lexeme, offset }, false));
        }
        if let Some((name, offset)) = self.scanner.match_variable_name(self.catalogue) {
            return Some(self.arena.alloc(Item::Variable { name, offset }, false));
        }
        None
    }

    fn match_operator_node(&mut self, category: Category) -> Option<NodeId> {
        let (info, offset) = self.scanner.match_operator(self.catalogue, category)?;
        Some(self.arena.alloc(Item::Operator { info, offset }, false))
    }
}

/// Parses `input` as a single statement under `catalogue` and
/// `decimal_separator`, returning the flattened prefix token stream.
pub fn parse_items(input: &str, catalogue: &Catalogue, decimal_separator: char) -> Result<Vec<Item>, Error> {
    let mut parser = Parser::new(input, catalogue, decimal_separator);
    match parser.parse_statement(StatementFlags::FULL)? {
        Some(root) => Ok(linearize(&parser.arena, root)),
        None => Err(Error { cause: ErrorCause::ParsingFailed, location: 0..input.len() }),
    }
}

/// Parses `input` as a single bare variable name under `catalogue`.
pub fn parse_variable_name(input: &str, catalogue: &Catalogue) -> Result<String, Error> {
    let mut scanner = Scanner::new(input, '.');
    match scanner.match_variable_name(catalogue) {
        Some((name, _offset)) => {
            scanner.skip_whitespace();
            if scanner.at_end() {
                Ok(name)
            } else {
                Err(Error { cause: ErrorCause::InvalidVariableName, location: 0..input.len() })
            }
        }
        None => Err(Error { cause: ErrorCause::InvalidVariableName, location: 0..input.len() }),
    }
}
