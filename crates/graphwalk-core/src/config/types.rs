//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// Default pause between visualized steps, in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u64 = 0;

/// Graph description file
///
/// ```toml
/// directed = false
/// vertices = [9]
/// edges = [[0, 1], [0, 2]]
///
/// [playback]
/// step_delay_ms = 500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    /// Directed graphs store only the forward arc of each edge
    #[serde(default)]
    pub directed: bool,

    /// Vertices to create even if no edge touches them
    #[serde(default)]
    pub vertices: Vec<VertexId>,

    /// Edges in insertion order
    #[serde(default)]
    pub edges: Vec<[VertexId; 2]>,

    /// Step pacing for traversal playback
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Pause between steps in milliseconds
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

fn default_step_delay_ms() -> u64 {
    DEFAULT_STEP_DELAY_MS
}

/// Built-in demo graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Six vertices, one component
    #[default]
    Console,
    /// Ten vertices with an irregular, fixed edge set
    Visual,
}

const CONSOLE_EDGES: &[[VertexId; 2]] = &[[0, 1], [0, 2], [1, 3], [2, 4], [3, 4], [4, 5]];

const VISUAL_EDGES: &[[VertexId; 2]] = &[
    [0, 3],
    [0, 7],
    [1, 2],
    [1, 5],
    [1, 9],
    [2, 4],
    [2, 6],
    [3, 4],
    [3, 8],
    [4, 7],
    [5, 6],
    [5, 8],
    [6, 9],
    [7, 9],
    [8, 0],
];

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Console => "console",
            Preset::Visual => "visual",
        }
    }

    pub fn edges(&self) -> &'static [[VertexId; 2]] {
        match self {
            Preset::Console => CONSOLE_EDGES,
            Preset::Visual => VISUAL_EDGES,
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Preset::Console),
            "visual" => Ok(Preset::Visual),
            other => Err(format!(
                "unknown preset '{}' (expected: console, visual)",
                other
            )),
        }
    }
}
