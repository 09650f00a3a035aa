//! Memoizing controller for interactive hosts.
//!
//! Each derived buffer is recomputed only when one of its inputs changes:
//!
//! | buffer      | inputs                          |
//! |-------------|---------------------------------|
//! | topology    | cluster count, server mode      |
//! | full mesh   | topology                        |
//! | highlight   | focus, topology                 |
//! | escape      | escape mode, topology           |
//!
//! Focus is held as a [`NodeKey`], so it survives regenerations that keep the focused node and
//! is cleared when the node disappears (e.g. a server after server mode is switched off).

use crate::display::{self, DisplayState};
use crate::error::Result;
use crate::escape::build_escape_routes;
use crate::geom::Segment;
use crate::highlight::build_highlight;
use crate::layout::{ClusterCount, generate_with};
use crate::mesh::build_full_mesh;
use crate::model::{Node, NodeId, NodeKey, Topology, TopologySummary};
use crate::options::LayoutOptions;

/// Which outputs a control call replaced. Renderers re-upload only the flagged buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Changes {
    pub topology: bool,
    pub full_mesh: bool,
    pub highlight: bool,
    pub escape: bool,
}

impl Changes {
    pub fn any(&self) -> bool {
        self.topology || self.full_mesh || self.highlight || self.escape
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    options: LayoutOptions,
    cluster_count: usize,
    servers: bool,
    escape_mode: bool,
    focus: Option<NodeKey>,
    layout_revision: u64,

    topology: Topology,
    full_mesh: Vec<Segment>,
    highlight: Vec<Segment>,
    escape: Vec<Segment>,
}

impl Scene {
    pub fn new(options: LayoutOptions, cluster_count: usize, servers: bool) -> Result<Self> {
        let topology = generate_with(&options, cluster_count, servers)?;
        let full_mesh = build_full_mesh(&topology);
        Ok(Self {
            options,
            cluster_count,
            servers,
            escape_mode: false,
            focus: None,
            layout_revision: 0,
            topology,
            full_mesh,
            highlight: Vec::new(),
            escape: Vec::new(),
        })
    }

    /// Regenerates the fabric when either parameter differs from the current one. On error the
    /// scene is left untouched.
    pub fn request_layout(&mut self, cluster_count: usize, servers: bool) -> Result<Changes> {
        if cluster_count == self.cluster_count && servers == self.servers {
            return Ok(Changes::default());
        }

        let topology = generate_with(&self.options, cluster_count, servers)?;
        self.cluster_count = cluster_count;
        self.servers = servers;
        self.layout_revision += 1;
        self.full_mesh = build_full_mesh(&topology);
        self.escape = build_escape_routes(&topology, self.escape_mode, cluster_count);
        self.topology = topology;

        if let Some(key) = self.focus {
            if self.topology.resolve(&key).is_none() {
                tracing::debug!(?key, "focused node is gone after regeneration; clearing focus");
                self.focus = None;
            }
        }
        self.rebuild_highlight();

        tracing::debug!(
            clusters = cluster_count,
            servers,
            revision = self.layout_revision,
            "scene layout replaced"
        );
        Ok(Changes {
            topology: true,
            full_mesh: true,
            highlight: true,
            escape: true,
        })
    }

    /// [`Scene::request_layout`] for hosts holding a signed count; negative counts are rejected
    /// before anything is regenerated.
    pub fn request_layout_checked(
        &mut self,
        cluster_count: i64,
        servers: bool,
    ) -> Result<Changes> {
        let count = ClusterCount::try_from(cluster_count)?;
        self.request_layout(count.get(), servers)
    }

    pub fn add_cluster(&mut self) -> Result<Changes> {
        self.request_layout(self.cluster_count + 1, self.servers)
    }

    pub fn set_server_mode(&mut self, servers: bool) -> Result<Changes> {
        self.request_layout(self.cluster_count, servers)
    }

    pub fn set_escape_mode(&mut self, enabled: bool) -> Changes {
        if enabled == self.escape_mode {
            return Changes::default();
        }
        self.escape_mode = enabled;
        self.escape = build_escape_routes(&self.topology, enabled, self.cluster_count);
        Changes {
            escape: true,
            ..Changes::default()
        }
    }

    /// Focus by id as reported by picking. Unknown ids clear the focus.
    pub fn set_focus(&mut self, id: Option<NodeId>) -> Changes {
        let key = id.and_then(|id| self.topology.node(id)).map(Node::key);
        self.apply_focus(key)
    }

    /// Focus by node value; the node must belong to the current topology.
    pub fn set_focus_node(&mut self, node: Option<&Node>) -> Changes {
        let key = node.and_then(|n| self.topology.find(n)).map(Node::key);
        self.apply_focus(key)
    }

    pub fn set_focus_key(&mut self, key: Option<NodeKey>) -> Changes {
        let key = key.filter(|k| self.topology.resolve(k).is_some());
        self.apply_focus(key)
    }

    fn apply_focus(&mut self, key: Option<NodeKey>) -> Changes {
        if key == self.focus {
            return Changes::default();
        }
        self.focus = key;
        self.rebuild_highlight();
        Changes {
            highlight: true,
            ..Changes::default()
        }
    }

    fn rebuild_highlight(&mut self) {
        let focused = self.focus.and_then(|k| self.topology.resolve(&k));
        self.highlight = build_highlight(&self.topology, focused);
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn server_mode(&self) -> bool {
        self.servers
    }

    pub fn escape_mode(&self) -> bool {
        self.escape_mode
    }

    /// Incremented on every regeneration. Node ids from an older revision must be re-resolved.
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn full_mesh(&self) -> &[Segment] {
        &self.full_mesh
    }

    pub fn highlight(&self) -> &[Segment] {
        &self.highlight
    }

    pub fn escape_routes(&self) -> &[Segment] {
        &self.escape
    }

    pub fn focus_key(&self) -> Option<NodeKey> {
        self.focus
    }

    pub fn focused(&self) -> Option<&Node> {
        self.focus.and_then(|k| self.topology.resolve(&k))
    }

    pub fn display_states(&self) -> Vec<DisplayState> {
        display::display_states(&self.topology, self.focused())
    }

    pub fn summary(&self) -> TopologySummary {
        self.topology.summary()
    }
}
