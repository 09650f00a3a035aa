use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One server group that is deliberately smaller than the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedGroup {
    /// 0-based server group index.
    pub group: usize,
    pub servers: usize,
}

/// Layout constants. The defaults describe the reference fabric: 64 spines and 16×8 leafs per
/// cluster, 16 server groups of 64 (one of 56).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub spines_per_cluster: usize,
    pub leaf_groups: usize,
    pub leafs_per_group: usize,
    pub servers_per_group: usize,
    /// Group whose server count differs from `servers_per_group`. `None` makes all groups equal.
    pub reduced_server_group: Option<ReducedGroup>,

    pub spine_y: f64,
    pub leaf_y: f64,
    pub server_y: f64,

    /// Width-axis distance between neighbouring spines.
    pub spine_spacing: f64,
    /// Width-axis distance between neighbouring leaf (and server) groups.
    pub group_spacing: f64,
    /// Depth-axis distance between leafs of one group.
    pub leaf_spacing: f64,
    /// Depth-axis distance between servers of one group.
    pub server_spacing: f64,
    /// Depth-axis distance between consecutive clusters.
    pub cluster_spacing: f64,

    /// How far below the chord midpoint the escape curve control point sits.
    pub escape_dip: f64,
    /// Straight sub-segments per escape curve.
    pub escape_segments: usize,

    /// Optional host policy capping the cluster count. `None` accepts any count.
    pub max_clusters: Option<usize>,
}

pub const MIN_ESCAPE_SEGMENTS: usize = 16;

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spines_per_cluster: 64,
            leaf_groups: 16,
            leafs_per_group: 8,
            servers_per_group: 64,
            reduced_server_group: Some(ReducedGroup {
                group: 15,
                servers: 56,
            }),
            spine_y: 15.0,
            leaf_y: -5.0,
            server_y: -20.0,
            spine_spacing: 1.5,
            group_spacing: 6.0,
            leaf_spacing: 0.8,
            server_spacing: 0.5,
            cluster_spacing: 40.0,
            escape_dip: 8.0,
            escape_segments: 24,
            max_clusters: None,
        }
    }
}

impl LayoutOptions {
    /// Parses a (possibly partial) camelCase JSON object on top of the defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(text)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn leafs_per_cluster(&self) -> usize {
        self.leaf_groups * self.leafs_per_group
    }

    /// Number of servers generated for `group`.
    pub fn servers_in_group(&self, group: usize) -> usize {
        match self.reduced_server_group {
            Some(r) if r.group == group => r.servers,
            _ => self.servers_per_group,
        }
    }

    pub fn total_servers(&self) -> usize {
        (0..self.leaf_groups).map(|g| self.servers_in_group(g)).sum()
    }

    /// Depth of cluster `c`; clusters recede along negative `z`.
    pub fn cluster_offset(&self, cluster: usize) -> f64 {
        -(cluster as f64) * self.cluster_spacing
    }

    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("spinesPerCluster", self.spines_per_cluster),
            ("leafGroups", self.leaf_groups),
            ("leafsPerGroup", self.leafs_per_group),
            ("serversPerGroup", self.servers_per_group),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(invalid(format!("{name} must be at least 1")));
            }
        }

        if let Some(r) = self.reduced_server_group {
            if r.group >= self.leaf_groups {
                return Err(invalid(format!(
                    "reducedServerGroup.group {} is out of range for {} groups",
                    r.group, self.leaf_groups
                )));
            }
            if r.servers > self.servers_per_group {
                return Err(invalid(format!(
                    "reducedServerGroup.servers {} exceeds serversPerGroup {}",
                    r.servers, self.servers_per_group
                )));
            }
        }

        let lengths = [
            ("spineSpacing", self.spine_spacing),
            ("groupSpacing", self.group_spacing),
            ("leafSpacing", self.leaf_spacing),
            ("serverSpacing", self.server_spacing),
            ("clusterSpacing", self.cluster_spacing),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be a positive finite number")));
            }
        }
        for (name, value) in [
            ("spineY", self.spine_y),
            ("leafY", self.leaf_y),
            ("serverY", self.server_y),
            ("escapeDip", self.escape_dip),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite")));
            }
        }

        if self.escape_segments < MIN_ESCAPE_SEGMENTS {
            return Err(invalid(format!(
                "escapeSegments must be at least {MIN_ESCAPE_SEGMENTS}"
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidOptions { message }
}
