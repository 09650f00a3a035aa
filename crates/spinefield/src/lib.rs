#![forbid(unsafe_code)]

//! Headless spine/leaf/server fabric layout.
//!
//! `spinefield` turns a couple of scale parameters (cluster count, server visibility) into a
//! positioned three-tier fat-tree topology and derives the line-segment buffers a renderer
//! needs:
//!
//! - the full-mesh background ([`build_full_mesh`]),
//! - the links around a hovered node ([`build_highlight`]),
//! - curved inter-cluster escape routes ([`build_escape_routes`]).
//!
//! Every builder is a pure function over a [`Topology`] snapshot. [`Scene`] wraps them with
//! per-dependency memoization for interactive hosts.

pub mod display;
pub mod error;
pub mod escape;
pub mod geom;
pub mod highlight;
pub mod layout;
pub mod mesh;
pub mod model;
pub mod options;
pub mod scene;

pub use display::{DisplayState, NodeInfo, display_state, display_states, inspect};
pub use error::{Error, Result};
pub use escape::{build_escape_routes, escape_curve};
pub use geom::{LineBuffer, Point, Segment};
pub use highlight::build_highlight;
pub use layout::{ClusterCount, generate, generate_with};
pub use mesh::build_full_mesh;
pub use model::{Node, NodeId, NodeKey, NodeKind, Topology, TopologySummary, are_linked};
pub use options::{LayoutOptions, ReducedGroup};
pub use scene::{Changes, Scene};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
