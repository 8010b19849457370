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

//! The operator catalogue: the fixed table of operator names, categories,
//! forms, and binding priorities consulted by the scanner and the rotation
//! fix-up. The catalogue never attaches runtime semantics to an operator; it
//! only records enough about its name to scan and order it correctly.

/// Whether an operator attaches to one operand on its right (`Prefix`) or two
/// operands, one on each side (`Infix`). Postfix and ternary forms are not
/// modelled; see the crate-level documentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Prefix,
    Infix,
}

/// Whether an operator's name reads as an identifier (`mod`) or as a run of
/// symbol characters (`+`). Derived from the name, not stored independently,
/// so a catalogue can never declare an operator whose form disagrees with
/// its own spelling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Form {
    Word,
    Symbolic,
}

/// Returns whether `name` reads as a word-form operator (an identifier) as
/// opposed to a run of symbol characters.
fn is_word(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// A single entry in the catalogue: an operator's name, category, and
/// binding priority. Higher `priority` binds tighter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OperatorInfo {
    pub name: &'static str,
    pub category: Category,
    pub priority: u8,
}

impl OperatorInfo {
    /// The operator's form, derived from its name.
    pub fn form(&self) -> Form {
        if is_word(self.name) {
            Form::Word
        } else {
            Form::Symbolic
        }
    }
}

/// The fixed registry of known operators, consulted by name and category.
///
/// A catalogue is ordinary data: constructing one (or substituting the
/// [`default`](Catalogue::default) one via [`crate::ParserOptions`]) does not
/// run any code belonging to the operators it describes. Concrete arithmetic
/// semantics are out of scope for this crate.
#[derive(Clone, Debug)]
pub struct Catalogue {
    entries: Vec<OperatorInfo>,
}

impl Catalogue {
    /// Builds a catalogue from an explicit list of entries. Later entries do
    /// not shadow earlier ones with the same name and category; both would
    /// simply be found by [`find`](Catalogue::find), so avoid duplicates.
    pub fn new(entries: Vec<OperatorInfo>) -> Self {
        Catalogue { entries }
    }

    /// Looks up an operator by its exact name and category.
    pub fn find(&self, name: &str, category: Category) -> Option<OperatorInfo> {
        self.entries
            .iter()
            .copied()
            .find(|entry| entry.category == category && entry.name == name)
    }

    /// Whether `name` is registered under any category. Used to reject
    /// variable names that collide with an operator's spelling.
    pub fn is_known(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// The length, in characters, of the longest symbolic operator name
    /// registered under `category`. The scanner uses this to bound its
    /// longest-match search; `0` if `category` has no symbolic operators.
    pub fn longest_symbolic(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category && entry.form() == Form::Symbolic)
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Catalogue {
    /// A conventional arithmetic-style catalogue: the four unary operators
    /// bind tightest, multiplicative binds tighter than additive, and so on
    /// down to assignment, mirroring the precedence table in
    /// `yash-arith`'s `ast::precedence`. Shipped for usability only; callers
    /// with different semantics should build their own via
    /// [`Catalogue::new`].
    fn default() -> Self {
        use Category::{Infix, Prefix};
        Catalogue::new(vec![
            OperatorInfo { name: "-", category: Prefix, priority: 13 },
            OperatorInfo { name: "+", category: Prefix, priority: 13 },
            OperatorInfo { name: "!", category: Prefix, priority: 13 },
            OperatorInfo { name: "~", category: Prefix, priority: 13 },
            OperatorInfo { name: "==", category: Infix, priority: 8 },
            OperatorInfo { name: "!=", category: Infix, priority: 8 },
            OperatorInfo { name: "<=", category: Infix, priority: 9 },
            OperatorInfo { name: "<<", category: Infix, priority: 10 },
            OperatorInfo { name: "<", category: Infix, priority: 9 },
            OperatorInfo { name: ">=", category: Infix, priority: 9 },
            OperatorInfo { name: ">>", category: Infix, priority: 10 },
            OperatorInfo { name: ">", category: Infix, priority: 9 },
            OperatorInfo { name: "&&", category: Infix, priority: 4 },
            OperatorInfo { name: "&", category: Infix, priority: 7 },
            OperatorInfo { name: "||", category: Infix, priority: 3 },
            OperatorInfo { name: "|", category: Infix, priority: 5 },
            OperatorInfo { name: "^", category: Infix, priority: 6 },
            OperatorInfo { name: "+", category: Infix, priority: 11 },
            OperatorInfo { name: "-", category: Infix, priority: 11 },
            OperatorInfo { name: "*", category: Infix, priority: 12 },
            OperatorInfo { name: "/", category: Infix, priority: 12 },
            OperatorInfo { name: "%", category: Infix, priority: 12 },
            OperatorInfo { name: "mod", category: Infix, priority: 12 },
            OperatorInfo { name: "=", category: Infix, priority: 1 },
        ])
    }
}
