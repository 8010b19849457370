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

//! The precedence fix-up. The recursive-descent grammar always attaches an
//! operator's right operand as whatever the recursive call returns, which
//! builds a right-skewed tree; this module re-shapes that tree in place so
//! it reflects each operator's relative binding priority instead.
//!
//! Unlike the rest of this crate, this algorithm has no direct precedent in
//! the corpus: the parser it was adapted from resolves precedence by
//! climbing a minimum-priority threshold through the recursion itself rather
//! than by post-hoc rotation. The shape here — attach right, then rotate
//! along the new right child's left spine — is new.

use crate::arena::{Arena, NodeId};
use crate::node::Item;

/// Attaches `rhs` as `op`'s right child, then rotates the two around each
/// other as needed so `op` binds to the correct operand given its priority
/// relative to `rhs`'s own top operator (if any). Returns the node that
/// should now stand in for this subtree: either `op` itself (no rotation
/// needed) or `rhs` (its left spine now has `op` grafted into it).
///
/// For an infix attachment the caller must set `op`'s left child before
/// calling this; for a prefix attachment `op` has no left child at all.
pub fn attach_and_fixup(arena: &mut Arena, op: NodeId, rhs: NodeId, is_prefix: bool) -> NodeId {
    arena.get_mut(op).right = Some(rhs);

    if !triggers(arena, op, rhs, is_prefix) {
        return op;
    }

    let mut target = rhs;
    loop {
        let left = match arena.get(target).left {
            Some(left) => left,
            None => break,
        };
        let keep_descending =
            lower_priority_than(arena, left, op) && (!is_prefix || arena.get(left).left.is_some());
        if !keep_descending {
            break;
        }
        target = left;
    }

    let pivot = arena
        .get(target)
        .left
        .expect("the descent loop only stops at a node that still has a left child");
    arena.get_mut(op).right = Some(pivot);
    arena.get_mut(target).left = Some(op);
    rhs
}

fn triggers(arena: &Arena, op: NodeId, rhs: NodeId, is_prefix: bool) -> bool {
    let rhs_has_left = arena.get(rhs).left.is_some();
    if is_prefix {
        left_grouped(arena, rhs) || (rhs_has_left && lower_priority_than(arena, rhs, op))
    } else {
        rhs_has_left && lower_priority_than(arena, rhs, op)
    }
}

fn priority_of(arena: &Arena, id: NodeId) -> Option<u8> {
    match &arena.get(id).item {
        Item::Operator { info, .. } => Some(info.priority),
        _ => None,
    }
}

/// Whether `compare` is an ungrouped operator node whose priority does not
/// exceed `against`'s. A grouped node is never rotated past, regardless of
/// priority, since parentheses pin its shape.
fn lower_priority_than(arena: &Arena, compare: NodeId, against: NodeId) -> bool {
    let node = arena.get(compare);
    if node.grouped {
        return false;
    }
    match priority_of(arena, compare) {
        Some(p) => p <= priority_of(arena, against).expect("against is always the operator being attached"),
        None => false,
    }
}

/// Whether `compare` is an ungrouped operator node with a grouped left
/// child. Only consulted for prefix attachment, where a parenthesized
/// left operand below `rhs` must still trigger a rotation even if `rhs`'s
/// own priority would not.
fn left_grouped(arena: &Arena, compare: NodeId) -> bool {
    let node = arena.get(compare);
    if node.grouped || priority_of(arena, compare).is_none() {
        return false;
    }
    match node.left {
        Some(left) => arena.get(left).grouped,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Category, OperatorInfo};

    fn op(arena: &mut Arena, name: &'static str, category: Category, priority: u8) -> NodeId {
        arena.alloc(Item::Operator { info: OperatorInfo { name, category, priority }, offset: 0 }, false)
    }

    fn leaf(arena: &mut Arena, name: &str) -> NodeId {
        arena.alloc(Item::Variable { name: name.to_string(), offset: 0 }, false)
    }

    #[test]
    fn left_associative_chain_rotates_into_left_lean() {
        // a - b - c, parsed as `-`(a, `-`(b, c)) before fix-up.
        let arena = &mut Arena::new();
        let a = leaf(arena, "a");
        let b = leaf(arena, "b");
        let c = leaf(arena, "c");
        let inner = op(arena, "-", Category::Infix, 11);
        arena.get_mut(inner).left = Some(b);
        arena.get_mut(inner).right = Some(c);
        let outer = op(arena, "-", Category::Infix, 11);
        arena.get_mut(outer).left = Some(a);

        let root = attach_and_fixup(arena, outer, inner, false);

        assert_eq!(root, inner);
        assert_eq!(arena.get(inner).left, Some(outer));
        assert_eq!(arena.get(outer).left, Some(a));
        assert_eq!(arena.get(outer).right, Some(b));
        assert_eq!(arena.get(inner).right, Some(c));
    }

    #[test]
    fn higher_priority_rhs_operator_is_not_rotated() {
        // a + b * c: `*` binds tighter than `+`, so no rotation happens.
        let arena = &mut Arena::new();
        let a = leaf(arena, "a");
        let b = leaf(arena, "b");
        let c = leaf(arena, "c");
        let mul = op(arena, "*", Category::Infix, 12);
        arena.get_mut(mul).left = Some(b);
        arena.get_mut(mul).right = Some(c);
        let add = op(arena, "+", Category::Infix, 11);
        arena.get_mut(add).left = Some(a);

        let root = attach_and_fixup(arena, add, mul, false);

        assert_eq!(root, add);
        assert_eq!(arena.get(add).right, Some(mul));
    }

    #[test]
    fn grouped_rhs_blocks_rotation() {
        // a * (b + c): the parenthesized `+` is immune to rotation even
        // though its priority is lower than `*`.
        let arena = &mut Arena::new();
        let a = leaf(arena, "a");
        let b = leaf(arena, "b");
        let c = leaf(arena, "c");
        let add = arena.alloc(
            Item::Operator { info: OperatorInfo { name: "+", category: Category::Infix, priority: 11 }, offset: 0 },
            true,
        );
        arena.get_mut(add).left = Some(b);
        arena.get_mut(add).right = Some(c);
        let mul = op(arena, "*", Category::Infix, 12);
        arena.get_mut(mul).left = Some(a);

        let root = attach_and_fixup(arena, mul, add, false);

        assert_eq!(root, mul);
        assert_eq!(arena.get(mul).right, Some(add));
    }

    #[test]
    fn prefix_operator_binds_to_nearest_operand_when_tighter() {
        // -a + b, unary `-` tighter than `+`: result is `+`(-(a), b).
        let arena = &mut Arena::new();
        let a = leaf(arena, "a");
        let b = leaf(arena, "b");
        let add = op(arena, "+", Category::Infix, 1);
        arena.get_mut(add).left = Some(a);
        arena.get_mut(add).right = Some(b);
        let neg = op(arena, "-", Category::Prefix, 13);

        let root = attach_and_fixup(arena, neg, add, true);

        assert_eq!(root, add);
        assert_eq!(arena.get(add).left, Some(neg));
        assert_eq!(arena.get(neg).right, Some(a));
        assert_eq!(arena.get(add).right, Some(b));
    }

    #[test]
    fn prefix_operator_absorbs_whole_rhs_when_looser() {
        // -a * b, unary `-` looser than `*`: result is -( *(a, b) ).
        let arena = &mut Arena::new();
        let a = leaf(arena, "a");
        let b = leaf(arena, "b");
        let mul = op(arena, "*", Category::Infix, 2);
        arena.get_mut(mul).left = Some(a);
        arena.get_mut(mul).right = Some(b);
        let neg = op(arena, "-", Category::Prefix, 1);

        let root = attach_and_fixup(arena, neg, mul, true);

        assert_eq!(root, neg);
        assert_eq!(arena.get(neg).right, Some(mul));
    }
}
