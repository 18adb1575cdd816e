//! Graph description files and built-in presets
//!
//! Graphs are described in TOML (see [`GraphFile`]). Loading applies the
//! input policy that the graph model itself does not enforce: self-loop
//! edges are rejected, duplicate edges are accepted with a warning.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{GraphwalkError, Result};
use crate::graph::{Graph, VertexId};

pub use types::{GraphFile, PlaybackConfig, Preset, DEFAULT_STEP_DELAY_MS};

impl GraphFile {
    /// Load and validate a graph file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GraphwalkError::GraphFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let file: GraphFile =
            toml::from_str(&content).map_err(|e| GraphwalkError::InvalidGraphFile {
                path: path.to_path_buf(),
                reason: e.message().to_string(),
            })?;
        file.validate()?;
        tracing::debug!(
            path = %path.display(),
            directed = file.directed,
            edges = file.edges.len(),
            vertices = file.vertices.len(),
            "graph_file_loaded"
        );
        Ok(file)
    }

    /// Parse a graph description from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let file: GraphFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Graph description for a built-in preset
    pub fn from_preset(preset: Preset) -> Self {
        GraphFile {
            directed: false,
            vertices: Vec::new(),
            edges: preset.edges().to_vec(),
            playback: PlaybackConfig::default(),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GraphwalkError::Other(e.to_string()))
    }

    /// Reject self-loops; report duplicate edges.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::with_capacity(self.edges.len());
        for &[u, v] in &self.edges {
            if u == v {
                return Err(GraphwalkError::SelfLoop { vertex: u });
            }
            let key = if self.directed || u < v { (u, v) } else { (v, u) };
            if !seen.insert(key) {
                tracing::warn!(from = u, to = v, "duplicate edge");
            }
        }
        Ok(())
    }

    /// Build the graph: edges in file order, then standalone vertices.
    pub fn build(&self) -> Graph {
        let mut graph = Graph::new(self.directed);
        for &[u, v] in &self.edges {
            graph.add_edge(u, v);
        }
        for &vertex in &self.vertices {
            graph.ensure_vertex(vertex);
        }
        graph
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.playback.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_file() {
        let file = GraphFile::parse(
            r#"
directed = true
vertices = [9]
edges = [[0, 1], [1, 2]]

[playback]
step_delay_ms = 250
"#,
        )
        .unwrap();

        assert!(file.directed);
        assert_eq!(file.vertices, vec![9]);
        assert_eq!(file.edges, vec![[0, 1], [1, 2]]);
        assert_eq!(file.step_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_defaults() {
        let file = GraphFile::parse("edges = [[3, 4]]").unwrap();
        assert!(!file.directed);
        assert!(file.vertices.is_empty());
        assert_eq!(file.playback.step_delay_ms, DEFAULT_STEP_DELAY_MS);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let err = GraphFile::parse("weights = [1]").unwrap_err();
        assert!(matches!(err, GraphwalkError::Toml(_)));
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = GraphFile::parse("edges = [[0, 1], [2, 2]]").unwrap_err();
        assert!(matches!(err, GraphwalkError::SelfLoop { vertex: 2 }));
    }

    #[test]
    fn test_duplicate_edges_accepted() {
        let file = GraphFile::parse("edges = [[0, 1], [1, 0], [0, 1]]").unwrap();
        let graph = file.build();
        assert_eq!(graph.adjacent(0), &[1, 1, 1]);
    }

    #[test]
    fn test_build_adds_isolated_vertices() {
        let file = GraphFile::parse("vertices = [9, 0]\nedges = [[0, 1]]").unwrap();
        let graph = file.build();
        assert_eq!(graph.vertices(), vec![0, 1, 9]);
        assert!(graph.adjacent(9).is_empty());
    }

    #[test]
    fn test_console_preset() {
        let graph = GraphFile::from_preset(Preset::Console).build();
        assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.adjacent(4), &[2, 3, 5]);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_visual_preset() {
        let graph = GraphFile::from_preset(Preset::Visual).build();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 15);
        assert_eq!(graph.adjacent(0), &[3, 7, 8]);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Visual".parse::<Preset>().unwrap(), Preset::Visual);
        assert!("grid".parse::<Preset>().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = GraphFile::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GraphwalkError::GraphFileNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        fs::write(&path, "edges = [[0, 1]").unwrap();
        let err = GraphFile::load(&path).unwrap_err();
        assert!(matches!(err, GraphwalkError::InvalidGraphFile { .. }));
    }

    #[test]
    fn test_load_roundtrip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        let original = GraphFile::from_preset(Preset::Visual);
        fs::write(&path, original.to_toml().unwrap()).unwrap();
        assert_eq!(GraphFile::load(&path).unwrap(), original);
    }
}
