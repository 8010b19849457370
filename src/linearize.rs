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

//! Flattening the finished tree into the flat prefix (Polish notation) token
//! stream that is this crate's actual product.

use crate::arena::{Arena, NodeId};
use crate::node::Item;

/// Walks the subtree rooted at `root` in preorder (node, then left subtree,
/// then right subtree) and returns the visited items in that order. An
/// explicit stack stands in for the parent-pointer walk the arena has no
/// pointers to support: since nodes are addressed by handle rather than by
/// pointer, there is nothing to walk back up through, so the stack just
/// carries the handles still owed a visit.
pub fn linearize(arena: &Arena, root: NodeId) -> Vec<Item> {
    let mut out = Vec::new();
    let mut pending = vec![root];
    while let Some(id) = pending.pop() {
        let node = arena.get(id);
        out.push(node.item.clone());
        if let Some(right) = node.right {
            pending.push(right);
        }
        if let Some(left) = node.left {
            pending.push(left);
        }
    }
    out
}
