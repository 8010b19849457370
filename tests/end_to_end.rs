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

//! End-to-end scenarios straight from the public surface: feed `parse` a
//! whole expression and check the resulting prefix stream, stringified in
//! the `op#arg#arg` canonical form used to describe the scenarios. This
//! canonicalisation is test-only scaffolding — the crate's real product is
//! the `Vec<Item>`, not a string.

use assert_matches::assert_matches;
use polish_parse::{parse, parse_variable, ErrorCause, Item};

fn canonical(items: &[Item]) -> String {
    // Each operator is followed by its (already preorder-flattened) operands,
    // so a left-to-right fold reproduces `op#arg#arg` by just joining tokens.
    items
        .iter()
        .map(|item| match item {
            Item::Number { lexeme, .. } => lexeme.clone(),
            Item::Variable { name, .. } => name.clone(),
            Item::Operator { info, .. } => info.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join("#")
}

#[test]
fn negative_number_literal() {
    // unary minus directly in front of a number
    let items = parse("-1").unwrap();
    assert_eq!(canonical(&items), "-#1");
}

#[test]
fn decimal_number_literal() {
    let items = parse("0.1").unwrap();
    assert_eq!(canonical(&items), "0.1");
}

#[test]
fn bare_variable() {
    let items = parse("vvariable").unwrap();
    assert_eq!(canonical(&items), "vvariable");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(canonical(&parse("a+b*c").unwrap()), "+#a#*#b#c");
    assert_eq!(canonical(&parse("a*b+c").unwrap()), "+#*#a#b#c");
}

#[test]
fn equal_priority_infix_is_left_associative() {
    assert_eq!(canonical(&parse("a-b-c").unwrap()), "-#-#a#b#c");
}

#[test]
fn parentheses_defeat_rotation_on_either_side() {
    assert_eq!(canonical(&parse("a*(b+c)").unwrap()), "*#a#+#b#c");
    assert_eq!(canonical(&parse("(a+b)*c").unwrap()), "*#+#a#b#c");
}

#[test]
fn prefix_operator_binds_per_its_own_priority() {
    // default catalogue: unary `-` (13) binds tighter than infix `+` (11)
    assert_eq!(canonical(&parse("-a+b").unwrap()), "+#-#a#b");
}

#[test]
fn stray_comma_is_rejected() {
    let err = parse("0,0").unwrap_err();
    assert_matches!(err.cause, ErrorCause::ParsingFailed);
}

#[test]
fn prefix_operator_used_with_no_operand_is_rejected() {
    let err = parse("+#5#5").unwrap_err();
    assert_matches!(err.cause, ErrorCause::ParsingFailed);
}

#[test]
fn double_separator_number_is_rejected() {
    let err = parse("5##5").unwrap_err();
    assert_matches!(err.cause, ErrorCause::ParsingFailed);
}

#[test]
fn offsets_point_at_each_lexeme_start() {
    let items = parse("a + bb * 12").unwrap();
    let offsets: Vec<usize> = items.iter().map(Item::offset).collect();
    // "+" "a" "*" "bb" "12"
    assert_eq!(offsets, vec![2, 0, 7, 4, 9]);
}

#[test]
fn whitespace_is_insignificant_around_tokens() {
    let spaced = parse("  a  +  b  ").unwrap();
    let tight = parse("a+b").unwrap();
    assert_eq!(canonical(&spaced), canonical(&tight));
}

#[test]
fn entry_point_restricted_to_a_single_variable_rejects_expressions() {
    assert!(parse_variable("a+b").is_err());
    assert_eq!(parse_variable("count").unwrap(), "count");
}

#[test]
fn deeply_nested_grouping_still_parses() {
    let items = parse("((((a))))").unwrap();
    assert_eq!(canonical(&items), "a");
}

#[test]
fn mixed_prefix_and_infix_chain() {
    // -a * -b : both unary minuses bind tighter than `*`
    let items = parse("-a*-b").unwrap();
    assert_eq!(canonical(&items), "*#-#a#-#b");
}
