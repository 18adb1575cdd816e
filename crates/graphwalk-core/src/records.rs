//! Utilities for records output format

use crate::graph::VertexId;

/// Placeholder used for absent values in records and human output.
pub const NONE_MARKER: &str = "-";

/// Join vertex ids with single spaces, or `-` when there are none.
pub fn join_vertices(vertices: &[VertexId]) -> String {
    if vertices.is_empty() {
        return NONE_MARKER.to_string();
    }
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join vertex ids with commas for a single records field, or `-` when empty.
pub fn join_vertices_csv(vertices: &[VertexId]) -> String {
    if vertices.is_empty() {
        return NONE_MARKER.to_string();
    }
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Render an optional predecessor.
pub fn format_predecessor(predecessor: Option<VertexId>) -> String {
    predecessor
        .map(|p| p.to_string())
        .unwrap_or_else(|| NONE_MARKER.to_string())
}
