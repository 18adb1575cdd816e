use graphwalk_core::config::Preset;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Algorithm, VertexId};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>()
}

/// Parse preset name from string
pub fn parse_preset(s: &str) -> std::result::Result<Preset, String> {
    s.parse::<Preset>()
}

/// Parse an edge written as `U,V` or `U:V`
pub fn parse_edge(s: &str) -> std::result::Result<[VertexId; 2], String> {
    let (u, v) = s
        .split_once(',')
        .or_else(|| s.split_once(':'))
        .ok_or_else(|| format!("invalid edge '{}' (expected: U,V)", s))?;
    let u = u
        .trim()
        .parse::<VertexId>()
        .map_err(|_| format!("invalid vertex '{}' in edge '{}'", u.trim(), s))?;
    let v = v
        .trim()
        .parse::<VertexId>()
        .map_err(|_| format!("invalid vertex '{}' in edge '{}'", v.trim(), s))?;
    Ok([u, v])
}
