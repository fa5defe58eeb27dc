//! Reader for the plain-text graph format
//!
//! ```text
//! D            directionality: D (directed) or U (undirected)
//! 4            vertex count
//! from to w    free-form comment line
//! 0 1 5
//! 1 2 3
//! -1 -1 -1     terminator
//! ```
//!
//! Edge lines hold `from to weight` triples. The list ends at a line whose
//! first token is `-1`, or at end of input. Blank edge lines are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::weight::EdgeWeight;
use crate::{Error, Result};

/// A graph read from text, with its declared directionality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraph<W>
where
    W: EdgeWeight,
{
    /// False when the file declared `U` and edges were mirrored
    pub directed: bool,
    pub graph: AdjacencyMatrix<W>,
}

/// Parses a graph with `i32` weights
pub fn parse_graph(text: &str) -> Result<ParsedGraph<i32>> {
    parse_graph_as(text)
}

/// Reads and parses a graph file with `i32` weights
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<ParsedGraph<i32>> {
    let text = fs::read_to_string(path.as_ref())?;
    debug!("Read {} bytes from {}", text.len(), path.as_ref().display());
    parse_graph(&text)
}

/// Parses a graph with any weight type that can be read from a token
pub fn parse_graph_as<W>(text: &str) -> Result<ParsedGraph<W>>
where
    W: EdgeWeight + FromStr,
{
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    let (line_no, marker) = lines.next().ok_or_else(|| parse_error(1, "missing graph type"))?;
    let directed = match marker.trim().chars().next() {
        Some('D') | Some('d') => true,
        Some('U') | Some('u') => false,
        _ => {
            return Err(parse_error(
                line_no,
                format!("expected graph type D or U, found {:?}", marker.trim()),
            ))
        }
    };

    let (line_no, count_line) = lines
        .next()
        .ok_or_else(|| parse_error(line_no + 1, "missing vertex count"))?;
    let count_token = count_line
        .split_whitespace()
        .next()
        .ok_or_else(|| parse_error(line_no, "missing vertex count"))?;
    let vertex_count: usize = parse_token(line_no, count_token, "vertex count")?;

    let mut graph = AdjacencyMatrix::new(vertex_count)?;

    // comment line
    lines.next();

    let mut edges = 0;
    for (line_no, line) in lines {
        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(token) => token,
            None => continue,
        };
        if first == "-1" {
            break;
        }

        let from: usize = parse_token(line_no, first, "source vertex")?;
        let to: usize = parse_token(
            line_no,
            tokens
                .next()
                .ok_or_else(|| parse_error(line_no, "missing target vertex"))?,
            "target vertex",
        )?;
        let weight: W = parse_token(
            line_no,
            tokens
                .next()
                .ok_or_else(|| parse_error(line_no, "missing edge weight"))?,
            "edge weight",
        )?;

        if directed {
            graph.set_edge(from, to, weight)?;
        } else {
            graph.set_undirected_edge(from, to, weight)?;
        }
        edges += 1;
    }

    debug!(
        "Parsed {} graph with {} vertices and {} edge lines",
        if directed { "directed" } else { "undirected" },
        vertex_count,
        edges
    );

    Ok(ParsedGraph { directed, graph })
}

fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {}: {:?}", what, token)))
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use ordered_float::OrderedFloat;

    const DIRECTED: &str = "D\n4\nfrom to weight\n0 1 5\n1 2 3\n0 2 100\n2 3 1\n-1 -1 -1\n";

    #[test]
    fn parses_directed_graph() {
        let parsed = parse_graph(DIRECTED).unwrap();
        assert!(parsed.directed);
        assert_eq!(parsed.graph.vertex_count(), 4);
        assert_eq!(parsed.graph.edge_count(), 4);
        assert_eq!(parsed.graph.get_edge_weight(0, 2), Some(100));
        assert!(!parsed.graph.has_edge(2, 0));
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let parsed = parse_graph("U\n3 vertices\n#\n0 2 7\n-1 -1 -1\n").unwrap();
        assert!(!parsed.directed);
        assert_eq!(parsed.graph.get_edge_weight(2, 0), Some(7));
        assert_eq!(parsed.graph.get_edge_weight(0, 2), Some(7));
    }

    #[test]
    fn lines_after_terminator_are_ignored() {
        let parsed = parse_graph("D\n2\n\n0 1 4\n-1 -1 -1\n1 0 9\n").unwrap();
        assert!(!parsed.graph.has_edge(1, 0));
    }

    #[test]
    fn missing_terminator_ends_at_eof() {
        let parsed = parse_graph("D\n2\ncomment\n0 1 4").unwrap();
        assert!(parsed.graph.has_edge(0, 1));
    }

    #[test]
    fn bad_marker_reports_line() {
        let err = parse_graph("X\n2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn bad_weight_reports_line() {
        let err = parse_graph("D\n2\n#\n0 1 heavy\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
    }

    #[test]
    fn short_edge_line_is_rejected() {
        let err = parse_graph("D\n2\n#\n0 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
    }

    #[test]
    fn range_errors_propagate() {
        assert!(matches!(
            parse_graph("D\n0\n#\n"),
            Err(Error::InvalidGraphSize(0))
        ));
        assert!(matches!(
            parse_graph("D\n2\n#\n0 5 1\n"),
            Err(Error::VertexIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn float_weights() {
        let parsed = parse_graph_as::<OrderedFloat<f64>>("D\n2\n#\n0 1 2.5\n-1 -1 -1\n").unwrap();
        assert_eq!(parsed.graph.get_edge_weight(0, 1), Some(OrderedFloat(2.5)));
    }
}
