// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the graph.

use crate::id::NodeId;
use crate::port::{PortDirection, PortIndex};
use serde::{Deserialize, Serialize};

/// Identifies one directed edge from an output port to an input port.
///
/// The four endpoint fields are the identity; two connections between the
/// same ports are the same connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId {
    /// Source node
    pub out_node: NodeId,
    /// Source port ordinal among the node's outputs
    pub out_port: PortIndex,
    /// Target node
    pub in_node: NodeId,
    /// Target port ordinal among the node's inputs
    pub in_port: PortIndex,
}

impl ConnectionId {
    /// Create a connection id
    pub fn new(
        out_node: NodeId,
        out_port: PortIndex,
        in_node: NodeId,
        in_port: PortIndex,
    ) -> Self {
        Self {
            out_node,
            out_port,
            in_node,
            in_port,
        }
    }

    /// The structural reverse: endpoints swapped.
    ///
    /// The connectivity set never holds an edge and its reverse at the same
    /// time; admission checks test both orientations.
    pub fn reversed(&self) -> Self {
        Self {
            out_node: self.in_node,
            out_port: self.in_port,
            in_node: self.out_node,
            in_port: self.out_port,
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.out_node == node_id || self.in_node == node_id
    }

    /// Check if this connection touches one specific port of a node
    pub fn touches_port(
        &self,
        node_id: NodeId,
        direction: PortDirection,
        port_index: PortIndex,
    ) -> bool {
        match direction {
            PortDirection::Out => self.out_node == node_id && self.out_port == port_index,
            PortDirection::In => self.in_node == node_id && self.in_port == port_index,
        }
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.out_node, self.out_port, self.in_node, self.in_port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_swaps_endpoints() {
        let id = ConnectionId::new(NodeId(0), 1, NodeId(2), 3);
        let rev = id.reversed();
        assert_eq!(rev, ConnectionId::new(NodeId(2), 3, NodeId(0), 1));
        assert_eq!(rev.reversed(), id);
    }

    #[test]
    fn test_involves_node() {
        let id = ConnectionId::new(NodeId(0), 0, NodeId(1), 0);
        assert!(id.involves_node(NodeId(0)));
        assert!(id.involves_node(NodeId(1)));
        assert!(!id.involves_node(NodeId(2)));
    }

    #[test]
    fn test_touches_port_respects_direction() {
        let id = ConnectionId::new(NodeId(0), 2, NodeId(1), 0);
        assert!(id.touches_port(NodeId(0), PortDirection::Out, 2));
        assert!(!id.touches_port(NodeId(0), PortDirection::In, 2));
        assert!(id.touches_port(NodeId(1), PortDirection::In, 0));
        assert!(!id.touches_port(NodeId(1), PortDirection::Out, 0));
    }
}
