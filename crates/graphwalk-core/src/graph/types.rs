use serde::Serialize;

/// Vertex identifier. Any integer is a valid id.
pub type VertexId = i64;

/// Traversal algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first search (stack, marks visited on pop)
    Dfs,
    /// Breadth-first search (queue, marks visited on enqueue)
    Bfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
        }
    }

    /// Name of the frontier structure, used in step logs.
    pub fn frontier_name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "stack",
            Algorithm::Bfs => "queue",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            other => Err(format!(
                "unknown algorithm '{}' (expected: dfs, bfs)",
                other
            )),
        }
    }
}

/// A single visitation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    /// 1-based step index, increasing across all components of a run
    pub step: usize,
    pub vertex: VertexId,
    /// Vertex whose expansion discovered this one; `None` for component roots
    pub predecessor: Option<VertexId>,
    /// Depth in the traversal tree below the component root
    pub depth: u32,
    /// Component index; the start vertex's component is 0
    pub component: usize,
    /// Pending frontier right after this vertex was taken off it
    /// (stack top first, queue front first). Empty unless the traversal was
    /// started with [`TraversalOptions::record_frontier`].
    pub frontier: Vec<VertexId>,
}

/// Event emitted by a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// The sweep restarted on a vertex outside every component seen so far
    ComponentStarted { component: usize, root: VertexId },
    /// A vertex was visited
    Visited(Visit),
}

impl TraversalEvent {
    pub fn as_visit(&self) -> Option<&Visit> {
        match self {
            TraversalEvent::Visited(visit) => Some(visit),
            TraversalEvent::ComponentStarted { .. } => None,
        }
    }
}

/// Counters collected while a traversal runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Vertices visited
    pub steps: usize,
    /// Components touched, the start component included
    pub components: usize,
    /// Frontier entries dropped because their vertex was already visited
    pub discarded: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

/// Options for a traversal run
#[derive(Debug, Clone, Copy)]
pub struct TraversalOptions {
    /// Restart on unvisited vertices once the start component is exhausted
    pub sweep_components: bool,
    /// Copy the pending frontier into every [`Visit`]. Each copy is as large
    /// as the frontier, so this is off unless a caller displays it.
    pub record_frontier: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        TraversalOptions {
            sweep_components: true,
            record_frontier: false,
        }
    }
}

impl TraversalOptions {
    /// Default options with frontier snapshots turned on.
    pub fn with_frontier() -> Self {
        TraversalOptions {
            record_frontier: true,
            ..Default::default()
        }
    }
}

/// Complete, collected traversal run
#[derive(Debug, Clone, Serialize)]
pub struct TraversalSummary {
    pub algorithm: Algorithm,
    pub start: VertexId,
    /// Visited vertices in step order
    pub order: Vec<VertexId>,
    /// Visited vertices grouped by component, in discovery order
    pub components: Vec<Vec<VertexId>>,
    pub events: Vec<TraversalEvent>,
    pub stats: TraversalStats,
    pub cancelled: bool,
}

impl TraversalSummary {
    pub fn new(algorithm: Algorithm, start: VertexId) -> Self {
        TraversalSummary {
            algorithm,
            start,
            order: Vec::new(),
            components: Vec::new(),
            events: Vec::new(),
            stats: TraversalStats::default(),
            cancelled: false,
        }
    }

    /// Fold one event into the visit order and component lists.
    pub fn observe(&mut self, event: &TraversalEvent) {
        if let TraversalEvent::Visited(visit) = event {
            self.order.push(visit.vertex);
            while self.components.len() <= visit.component {
                self.components.push(Vec::new());
            }
            self.components[visit.component].push(visit.vertex);
        }
    }

    /// Fold one event into the summary and keep the event itself.
    pub fn record(&mut self, event: TraversalEvent) {
        self.observe(&event);
        self.events.push(event);
    }
}
