// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph model backing the visual shader editor scene.
//!
//! The model owns three stores: the live node-id set, the connectivity set,
//! and the per-node geometry map. All mutation happens on the editor thread
//! through the operations below; the hosting editor registers change
//! listeners and re-renders in response.

use crate::connection::ConnectionId;
use crate::id::{NodeId, NodeIdAllocator};
use crate::port::{PortDirection, PortIndex, PortRole};
use crate::value::{Point, Size, Value};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Per-node mutable geometry record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NodeGeometry {
    /// Node widget size
    pub size: Size,
    /// Node position in scene coordinates
    pub position: Point,
}

/// Role selecting which facet of a node's data is accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    /// The node's type tag (read-only)
    Type,
    /// Position in scene coordinates
    Position,
    /// Widget size
    Size,
    /// Display caption
    Caption,
    /// Framework flags (read-only)
    Flags,
    /// Opaque payload owned by the node's own type
    InternalData,
}

/// Change notification delivered to registered listeners.
///
/// Listeners run synchronously, in registration order, immediately after
/// each successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    /// A node was created through [`GraphModel::add_node`]
    NodeCreated(NodeId),
    /// A node was restored from a saved record
    NodeLoaded(NodeId),
    /// A node and everything touching it was removed
    NodeDeleted(NodeId),
    /// A connection was admitted
    ConnectionCreated(ConnectionId),
    /// A connection was removed
    ConnectionDeleted(ConnectionId),
    /// A node role was written
    NodeDataChanged(NodeId, NodeRole),
    /// A port role was written
    PortDataChanged(NodeId, PortDirection, PortIndex, PortRole),
}

/// Listener invoked after each successful mutation
pub type ChangeListener = Box<dyn FnMut(&GraphEvent)>;

type PortKey = (NodeId, PortDirection, PortIndex, PortRole);

/// Saved form of a single node.
///
/// Field names match the on-disk record format: a node id, a 2D position,
/// and an opaque payload owned by the node's own type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The node's id, preserved across sessions
    pub id: NodeId,
    /// Type tag the node was created with
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Scene position
    pub position: Point,
    /// Opaque nested payload
    #[serde(rename = "internal-data", default)]
    pub internal: serde_json::Value,
}

/// Saved form of a whole graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Every live node, in insertion order
    pub nodes: Vec<NodeRecord>,
    /// Every connection, in insertion order
    pub connections: Vec<ConnectionId>,
}

impl GraphSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Error while decoding or restoring saved graph records
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Record text was not valid JSON
    #[error("malformed graph record: {0}")]
    Parse(#[from] serde_json::Error),

    /// A saved connection references a node the snapshot does not contain
    #[error("connection {0} references a node missing from the snapshot")]
    DanglingConnection(ConnectionId),

    /// A saved connection duplicates another (possibly reversed) edge
    #[error("connection {0} conflicts with an already-restored edge")]
    ConflictingConnection(ConnectionId),
}

/// The graph model: live nodes, connectivity, and role-keyed node/port data.
///
/// Exclusively owned by one editor instance and mutated only on the editor
/// thread; no locking.
#[derive(Default)]
pub struct GraphModel {
    allocator: NodeIdAllocator,
    nodes: IndexSet<NodeId>,
    node_types: IndexMap<NodeId, String>,
    connectivity: IndexSet<ConnectionId>,
    geometry: IndexMap<NodeId, NodeGeometry>,
    captions: IndexMap<NodeId, String>,
    payloads: IndexMap<NodeId, serde_json::Value>,
    port_store: IndexMap<PortKey, Value>,
    listeners: Vec<ChangeListener>,
}

impl std::fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphModel")
            .field("nodes", &self.nodes.len())
            .field("connections", &self.connectivity.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GraphModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener.
    ///
    /// Listeners are invoked synchronously after every successful mutation,
    /// in the order they were registered.
    pub fn on_change(&mut self, listener: impl FnMut(&GraphEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: GraphEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    // ------------------------------------------------------------------
    // Structural queries
    // ------------------------------------------------------------------

    /// All currently live node ids
    pub fn all_node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().copied().collect()
    }

    /// Every connection touching `node_id`, in either direction.
    ///
    /// Empty for an unknown node; that is not an error.
    pub fn all_connection_ids(&self, node_id: NodeId) -> Vec<ConnectionId> {
        self.connectivity
            .iter()
            .filter(|c| c.involves_node(node_id))
            .copied()
            .collect()
    }

    /// Connections touching one specific port of a node
    pub fn connections(
        &self,
        node_id: NodeId,
        direction: PortDirection,
        port_index: PortIndex,
    ) -> Vec<ConnectionId> {
        self.connectivity
            .iter()
            .filter(|c| c.touches_port(node_id, direction, port_index))
            .copied()
            .collect()
    }

    /// Exact membership test
    pub fn connection_exists(&self, id: ConnectionId) -> bool {
        self.connectivity.contains(&id)
    }

    /// Whether `id` could be admitted.
    ///
    /// A connection is possible only when the graph holds no connectivity
    /// data for the port pair in either orientation.
    pub fn connection_possible(&self, id: ConnectionId) -> bool {
        !self.connectivity.contains(&id) && !self.connectivity.contains(&id.reversed())
    }

    /// Whether `node_id` is live
    pub fn node_exists(&self, node_id: NodeId) -> bool {
        self.nodes.contains(&node_id)
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connections
    pub fn connection_count(&self) -> usize {
        self.connectivity.len()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Allocate an id, register it as live, and notify listeners.
    pub fn add_node(&mut self, type_tag: impl Into<String>) -> NodeId {
        let type_tag = type_tag.into();
        let id = self.allocator.next_id();
        self.nodes.insert(id);
        self.node_types.insert(id, type_tag.clone());
        tracing::debug!(node = %id, %type_tag, "node created");
        self.emit(GraphEvent::NodeCreated(id));
        id
    }

    /// Remove a node, cascading over every connection touching it.
    ///
    /// Returns whether the node existed. The removal is complete before the
    /// call returns; listeners see one deletion event per removed connection
    /// followed by the node deletion itself.
    pub fn delete_node(&mut self, node_id: NodeId) -> bool {
        if !self.nodes.shift_remove(&node_id) {
            return false;
        }
        let severed: Vec<ConnectionId> = self
            .connectivity
            .iter()
            .filter(|c| c.involves_node(node_id))
            .copied()
            .collect();
        for connection in severed {
            self.connectivity.shift_remove(&connection);
            self.emit(GraphEvent::ConnectionDeleted(connection));
        }
        self.node_types.shift_remove(&node_id);
        self.geometry.shift_remove(&node_id);
        self.captions.shift_remove(&node_id);
        self.payloads.shift_remove(&node_id);
        self.port_store.retain(|(id, _, _, _), _| *id != node_id);
        tracing::debug!(node = %node_id, "node deleted");
        self.emit(GraphEvent::NodeDeleted(node_id));
        true
    }

    /// Insert a connection and notify listeners.
    ///
    /// Callers must check [`Self::connection_possible`] first; admission is
    /// a documented precondition, not re-validated here.
    pub fn add_connection(&mut self, id: ConnectionId) {
        debug_assert!(self.connection_possible(id));
        self.connectivity.insert(id);
        tracing::debug!(connection = %id, "connection created");
        self.emit(GraphEvent::ConnectionCreated(id));
    }

    /// Remove a connection if present; returns whether removal occurred.
    pub fn delete_connection(&mut self, id: ConnectionId) -> bool {
        if self.connectivity.shift_remove(&id) {
            tracing::debug!(connection = %id, "connection deleted");
            self.emit(GraphEvent::ConnectionDeleted(id));
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Role-keyed data access
    // ------------------------------------------------------------------

    /// Read one facet of a node's data.
    ///
    /// Unknown nodes and unsupported roles degrade to [`Value::Null`].
    pub fn node_data(&self, node_id: NodeId, role: NodeRole) -> Value {
        if !self.nodes.contains(&node_id) {
            return Value::Null;
        }
        match role {
            NodeRole::Type => self
                .node_types
                .get(&node_id)
                .map(|t| Value::Text(t.clone()))
                .unwrap_or(Value::Null),
            NodeRole::Position => {
                Value::Point(self.geometry.get(&node_id).copied().unwrap_or_default().position)
            }
            NodeRole::Size => {
                Value::Size(self.geometry.get(&node_id).copied().unwrap_or_default().size)
            }
            NodeRole::Caption => self
                .captions
                .get(&node_id)
                .cloned()
                .or_else(|| self.node_types.get(&node_id).cloned())
                .map(Value::Text)
                .unwrap_or(Value::Null),
            NodeRole::Flags => Value::Int(0),
            NodeRole::InternalData => self
                .payloads
                .get(&node_id)
                .map(|p| Value::Json(p.clone()))
                .unwrap_or(Value::Null),
        }
    }

    /// Write one facet of a node's data; returns whether the write was
    /// accepted. Read-only roles and unknown nodes reject the write.
    pub fn set_node_data(&mut self, node_id: NodeId, role: NodeRole, value: Value) -> bool {
        if !self.nodes.contains(&node_id) {
            return false;
        }
        let accepted = match (role, value) {
            // Type and Flags are fixed at creation
            (NodeRole::Type | NodeRole::Flags, _) => false,
            (NodeRole::Position, Value::Point(p)) => {
                self.geometry.entry(node_id).or_default().position = p;
                true
            }
            (NodeRole::Size, Value::Size(s)) => {
                self.geometry.entry(node_id).or_default().size = s;
                true
            }
            (NodeRole::Caption, Value::Text(text)) => {
                self.captions.insert(node_id, text);
                true
            }
            (NodeRole::InternalData, Value::Json(payload)) => {
                self.payloads.insert(node_id, payload);
                true
            }
            _ => false,
        };
        if accepted {
            self.emit(GraphEvent::NodeDataChanged(node_id, role));
        }
        accepted
    }

    /// Read one facet of one port's data
    pub fn port_data(
        &self,
        node_id: NodeId,
        direction: PortDirection,
        port_index: PortIndex,
        role: PortRole,
    ) -> Value {
        self.port_store
            .get(&(node_id, direction, port_index, role))
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Write one facet of one port's data; returns whether the write was
    /// accepted.
    pub fn set_port_data(
        &mut self,
        node_id: NodeId,
        direction: PortDirection,
        port_index: PortIndex,
        role: PortRole,
        value: Value,
    ) -> bool {
        if !self.nodes.contains(&node_id) {
            return false;
        }
        let accepted = match role {
            PortRole::Data => true,
            // Captions and type names are textual by contract
            PortRole::Caption | PortRole::DataType => matches!(value, Value::Text(_)),
        };
        if accepted {
            self.port_store
                .insert((node_id, direction, port_index, role), value);
            self.emit(GraphEvent::PortDataChanged(
                node_id, direction, port_index, role,
            ));
        }
        accepted
    }

    // ------------------------------------------------------------------
    // Save / load
    // ------------------------------------------------------------------

    /// Serialize one node to its saved record, or `None` for an unknown id.
    pub fn save_node(&self, node_id: NodeId) -> Option<NodeRecord> {
        if !self.nodes.contains(&node_id) {
            return None;
        }
        Some(NodeRecord {
            id: node_id,
            type_tag: self.node_types.get(&node_id).cloned().unwrap_or_default(),
            position: self.geometry.get(&node_id).copied().unwrap_or_default().position,
            internal: self.payloads.get(&node_id).cloned().unwrap_or(serde_json::Value::Null),
        })
    }

    /// Restore a node from its saved record and register it as live.
    ///
    /// The record's id is kept as-is; the allocator is advanced past it so
    /// later [`Self::add_node`] calls can never collide with a loaded id.
    pub fn load_node(&mut self, record: &NodeRecord) {
        self.allocator.advance_past(record.id);
        self.nodes.insert(record.id);
        self.node_types.insert(record.id, record.type_tag.clone());
        self.geometry.entry(record.id).or_default().position = record.position;
        if !record.internal.is_null() {
            self.payloads.insert(record.id, record.internal.clone());
        }
        tracing::debug!(node = %record.id, type_tag = %record.type_tag, "node loaded");
        self.emit(GraphEvent::NodeLoaded(record.id));
    }

    /// Capture the whole graph as a snapshot
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes
                .iter()
                .filter_map(|id| self.save_node(*id))
                .collect(),
            connections: self.connectivity.iter().copied().collect(),
        }
    }

    /// Replace this model's contents with a snapshot.
    ///
    /// The snapshot's connections are held to the same invariants as live
    /// editing: every endpoint must name a snapshot node, and no edge may
    /// duplicate another (or its reverse). Validation runs before anything
    /// is touched, so a failed restore leaves the model exactly as it was.
    pub fn restore(&mut self, snapshot: &GraphSnapshot) -> Result<(), RecordError> {
        let mut admitted: IndexSet<ConnectionId> = IndexSet::new();
        for connection in &snapshot.connections {
            let present = |id: NodeId| snapshot.nodes.iter().any(|n| n.id == id);
            if !present(connection.out_node) || !present(connection.in_node) {
                return Err(RecordError::DanglingConnection(*connection));
            }
            if admitted.contains(connection) || admitted.contains(&connection.reversed()) {
                return Err(RecordError::ConflictingConnection(*connection));
            }
            admitted.insert(*connection);
        }

        self.nodes.clear();
        self.node_types.clear();
        self.connectivity.clear();
        self.geometry.clear();
        self.captions.clear();
        self.payloads.clear();
        self.port_store.clear();

        for record in &snapshot.nodes {
            self.load_node(record);
        }
        for connection in &snapshot.connections {
            self.add_connection(*connection);
        }
        Ok(())
    }
}
