//! Line-oriented edge-list loader.
//!
//! Each non-empty line holds `source target weight` separated by whitespace.
//! Lines starting with `#` are comments. Any other deviation aborts the load
//! with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};

/// One parsed edge-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEntry {
    pub source: String,
    pub target: String,
    pub weight: i64,
}

/// Parse a single edge line. `line_number` is only used for error reporting.
pub fn parse_edge_line(line: &str, line_number: usize) -> Result<EdgeEntry> {
    let invalid = |reason: String| Error::InvalidEdgeLine {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(invalid(format!(
            "expected 3 fields (source target weight), found {}",
            fields.len()
        )));
    };

    let weight = weight
        .parse::<i64>()
        .map_err(|e| invalid(format!("weight '{}' is not an integer: {}", weight, e)))?;

    Ok(EdgeEntry {
        source: (*source).to_string(),
        target: (*target).to_string(),
        weight,
    })
}

/// Build a graph from any buffered reader.
pub fn load_graph_from_reader<R: BufRead>(reader: R) -> Result<Graph> {
    let mut builder = GraphBuilder::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let entry = parse_edge_line(trimmed, idx + 1)?;
        debug!(source = %entry.source, target = %entry.target, weight = entry.weight, "edge");
        builder.add_edge(entry.source, entry.target, entry.weight)?;
    }

    Ok(builder.build())
}

/// Load the graph stored at `path`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let graph = load_graph_from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let entry = parse_edge_line("A B 7", 1).unwrap();
        assert_eq!(
            entry,
            EdgeEntry {
                source: "A".into(),
                target: "B".into(),
                weight: 7,
            }
        );
    }

    #[test]
    fn tolerates_repeated_whitespace() {
        let entry = parse_edge_line("A\t B   3", 1).unwrap();
        assert_eq!(entry.weight, 3);
    }

    #[test]
    fn rejects_short_line() {
        let err = parse_edge_line("A B", 4).unwrap_err();
        assert!(matches!(err, Error::InvalidEdgeLine { line: 4, .. }));
    }

    #[test]
    fn rejects_extra_fields() {
        assert!(parse_edge_line("A B 1 2", 1).is_err());
    }

    #[test]
    fn rejects_non_integer_weight() {
        let err = parse_edge_line("A B 1.5", 2).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn negative_weight_parses_but_is_refused_by_builder() {
        let entry = parse_edge_line("A B -1", 1).unwrap();
        assert_eq!(entry.weight, -1);

        let err = load_graph_from_reader("A B -1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight: -1, .. }));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# header\n\nA B 1\n   \nB C 2\n";
        let graph = load_graph_from_reader(input.as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn reports_line_number_of_bad_entry() {
        let input = "A B 1\nB C x\n";
        match load_graph_from_reader(input.as_bytes()).unwrap_err() {
            Error::InvalidEdgeLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
