// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node identifier allocation.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing node ids.
///
/// Ids are never reused, even after the owning node is deleted. The counter
/// only ever moves forward; restoring a saved node advances it past the
/// restored id so later allocations cannot collide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    /// Create an allocator starting at id 0
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Ensure future allocations land strictly after `id`
    pub fn advance_past(&mut self, id: NodeId) {
        if self.next <= id.0 {
            self.next = id.0 + 1;
        }
    }

    /// The id the next call to [`Self::next_id`] will return
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut alloc = NodeIdAllocator::new();
        let a = alloc.next_id();
        let b = alloc.next_id();
        let c = alloc.next_id();
        assert!(a < b && b < c);
        assert_eq!(a, NodeId(0));
        assert_eq!(c, NodeId(2));
    }

    #[test]
    fn test_advance_past_skips_collisions() {
        let mut alloc = NodeIdAllocator::new();
        alloc.advance_past(NodeId(7));
        assert_eq!(alloc.next_id(), NodeId(8));
    }

    #[test]
    fn test_advance_past_never_rewinds() {
        let mut alloc = NodeIdAllocator::new();
        alloc.advance_past(NodeId(9));
        alloc.advance_past(NodeId(3));
        assert_eq!(alloc.next_id(), NodeId(10));
    }
}
