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

//! Compiles a human-written infix arithmetic expression into a flat prefix
//! (Polish notation) token stream suitable for a stack-based evaluator.
//!
//! The pipeline, leaves first: an [`catalogue::Catalogue`] classifies each
//! known operator by category and priority; [`classify`] precomputes a
//! per-character class table; [`scanner::Scanner`] walks the input with
//! backtracking primitives built on that table; [`parser`] is the
//! recursive-descent grammar that builds a working tree in a per-call
//! [`arena::Arena`]; [`rotate`] fixes up that tree's associativity as each
//! operator attaches; and [`linearize`] walks the finished tree in preorder
//! to produce the [`Item`] stream this crate actually hands back.
//!
//! This crate parses and compiles only. It does not evaluate the resulting
//! stream against a variable environment, does not know the arithmetic
//! meaning of any operator, and does not read or write anything outside the
//! `&str` it is given — all of that is left to the caller.

pub mod arena;
pub mod catalogue;
pub mod classify;
mod error;
mod linearize;
mod node;
mod options;
mod parser;
mod rotate;
pub mod scanner;

pub use catalogue::{Catalogue, Category, Form, OperatorInfo};
pub use error::{Error, ErrorCause};
pub use node::Item;
pub use options::ParserOptions;

/// Parses `input` as a single complete statement using the default
/// [`ParserOptions`] (the conventional arithmetic catalogue, `.` as the
/// decimal separator), returning its prefix token stream.
pub fn parse(input: &str) -> Result<Vec<Item>, Error> {
    parse_with_options(input, &ParserOptions::default())
}

/// Parses `input` as a single complete statement under the given `options`.
pub fn parse_with_options(input: &str, options: &ParserOptions<'_>) -> Result<Vec<Item>, Error> {
    parser::parse_items(input, options.catalogue_in_use(), options.decimal_separator_in_use())
}

/// Parses `input` as a single bare variable name using the default
/// [`ParserOptions`]'s catalogue, rejecting anything that is not exactly one
/// identifier or that collides with a known operator name.
pub fn parse_variable(input: &str) -> Result<String, Error> {
    parse_variable_with_options(input, &ParserOptions::default())
}

/// Parses `input` as a single bare variable name under the given `options`'s
/// catalogue. The decimal separator plays no role in this entry point.
pub fn parse_variable_with_options(input: &str, options: &ParserOptions<'_>) -> Result<String, Error> {
    parser::parse_variable_name(input, options.catalogue_in_use())
}
