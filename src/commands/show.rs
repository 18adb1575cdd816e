//! `graphwalk show` command
//!
//! Prints the adjacency list followed by the edge list.

use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::Graph;
use graphwalk_core::records::{join_vertices, join_vertices_csv};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => output_json(graph)?,
        OutputFormat::Human => output_human(cli, graph),
        OutputFormat::Records => output_records(graph),
    }
    Ok(())
}

/// Connector drawn between edge endpoints
fn edge_connector(graph: &Graph) -> &'static str {
    if graph.is_directed() {
        "-->"
    } else {
        "---"
    }
}

fn output_human(cli: &Cli, graph: &Graph) {
    if graph.vertex_count() == 0 {
        if !cli.quiet {
            println!("Graph is empty");
        }
        return;
    }

    println!("Adjacency list:");
    for (vertex, neighbors) in graph.iter() {
        println!("  Vertex {}: {}", vertex, join_vertices(neighbors));
    }
    println!();

    println!("Edges:");
    let connector = edge_connector(graph);
    for edge in graph.edges() {
        println!("  {} {} {}", edge.from, connector, edge.to);
    }

    if !cli.quiet {
        println!();
        println!(
            "{} vertices, {} edges ({})",
            graph.vertex_count(),
            graph.edge_count(),
            if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            }
        );
    }
}

fn output_json(graph: &Graph) -> Result<()> {
    let adjacency: Vec<serde_json::Value> = graph
        .iter()
        .map(|(vertex, neighbors)| {
            serde_json::json!({
                "vertex": vertex,
                "neighbors": neighbors,
            })
        })
        .collect();

    let output = serde_json::json!({
        "directed": graph.is_directed(),
        "vertices": graph.vertices(),
        "adjacency": adjacency,
        "edges": graph.edges(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph) {
    println!(
        "H graphwalk=1 records=1 mode=show directed={} vertices={} edges={}",
        graph.is_directed(),
        graph.vertex_count(),
        graph.edge_count()
    );
    for (vertex, neighbors) in graph.iter() {
        println!("A {} {}", vertex, join_vertices_csv(neighbors));
    }
    for edge in graph.edges() {
        println!("E {} {}", edge.from, edge.to);
    }
}
