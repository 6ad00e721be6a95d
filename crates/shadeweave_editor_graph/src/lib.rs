// SPDX-License-Identifier: MIT OR Apache-2.0
//! Visual shader graph model for Shadeweave Editor.
//!
//! This crate provides the data layer behind the node-based shader editor:
//! - Monotonic node-id allocation
//! - Directed port-to-port connectivity with duplicate/reverse exclusion
//! - Role-keyed node and port data access
//! - Per-node save/load records and whole-graph snapshots
//! - The static shader node catalog and its creation-dialog category tree
//!
//! ## Architecture
//!
//! Rendering, layout, hit-testing, and widget construction belong to the
//! hosting editor. The model notifies registered change listeners after each
//! successful mutation and otherwise knows nothing about presentation.

pub mod catalog;
pub mod connection;
pub mod id;
pub mod model;
pub mod port;
pub mod tree;
pub mod value;

pub use catalog::{CatalogEntry, NodeCatalog, SHADER_CATALOG};
pub use connection::ConnectionId;
pub use id::{NodeId, NodeIdAllocator};
pub use model::{
    GraphEvent, GraphModel, GraphSnapshot, NodeGeometry, NodeRecord, NodeRole, RecordError,
};
pub use port::{PortDirection, PortIndex, PortRole, ShaderType};
pub use tree::{CategoryNode, CategoryTree};
pub use value::{Point, Size, Value};
