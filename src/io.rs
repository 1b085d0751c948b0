//! Plain-text graph input and the one-line result output.
//!
//! Input format:
//!
//! ```text
//! V E [trials]
//! src dst [weight]     (E lines)
//! ```
//!
//! `weight` defaults to 1, so the unweighted `src dst` edge lists used for
//! Karger runs parse unchanged. Blank lines and lines starting with `#` are
//! skipped. The output is the cut weight, optionally followed by the elapsed
//! wall-clock time in seconds.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{GraphError, Result};
use crate::graph::{DuplicateEdges, Graph, Weight};

/// Options controlling how edge lines become a [`Graph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicates: DuplicateEdges,
}

/// A parsed input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    pub graph: Graph,
    /// Trial count from the header, if present.
    pub trials: Option<usize>,
}

/// Parses `input` with the default options (repeated pairs overwrite).
pub fn parse_graph(input: &str) -> Result<GraphInput> {
    parse_graph_with(input, ParseOptions::default())
}

/// Parses `input` into a graph and optional trial count.
///
/// # Errors
/// `InvalidInput`, naming the offending line, for a missing or malformed
/// header, non-numeric or negative values, `trials == 0`, vertex references
/// outside `0..V`, self-loops, too few or too many edge lines, total weight
/// overflow, and a `V` above [`MAX_VERTICES`](crate::graph::MAX_VERTICES).
pub fn parse_graph_with(input: &str, options: ParseOptions) -> Result<GraphInput> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| GraphError::invalid_input("empty input: expected a `V E [trials]` header"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(GraphError::invalid_input(format!(
            "line {header_line}: expected `V E [trials]`, got `{header}`"
        )));
    }
    let vertices: usize = parse_field(fields[0], "vertex count", header_line)?;
    let edge_count: usize = parse_field(fields[1], "edge count", header_line)?;
    let trials = fields
        .get(2)
        .map(|field| parse_field::<usize>(field, "trial count", header_line))
        .transpose()?;
    if trials == Some(0) {
        return Err(GraphError::invalid_input(format!(
            "line {header_line}: trial count must be at least 1"
        )));
    }

    let mut graph = Graph::try_new(vertices).map_err(|err| at_line(header_line, err))?;
    let mut seen = 0;
    for (line_no, line) in lines {
        if seen == edge_count {
            return Err(GraphError::invalid_input(format!(
                "line {line_no}: expected {edge_count} edges, found more"
            )));
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(GraphError::invalid_input(format!(
                "line {line_no}: expected `src dst [weight]`, got `{line}`"
            )));
        }
        let src: usize = parse_field(fields[0], "source vertex", line_no)?;
        let dst: usize = parse_field(fields[1], "destination vertex", line_no)?;
        let weight: Weight = match fields.get(2) {
            Some(field) => parse_field(field, "weight", line_no)?,
            None => 1,
        };
        for v in [src, dst] {
            if v >= vertices {
                return Err(GraphError::invalid_input(format!(
                    "line {line_no}: vertex {v} is outside 0..{vertices}"
                )));
            }
        }
        if src == dst {
            return Err(GraphError::invalid_input(format!(
                "line {line_no}: self-loop on vertex {src}"
            )));
        }

        let written = match options.duplicates {
            DuplicateEdges::Overwrite => graph.set_edge(src, dst, weight),
            DuplicateEdges::Sum => graph.add_weight(src, dst, weight),
        };
        written.map_err(|err| at_line(line_no, err))?;
        seen += 1;
    }

    if seen < edge_count {
        return Err(GraphError::invalid_input(format!(
            "expected {edge_count} edges, found {seen}"
        )));
    }
    Ok(GraphInput { graph, trials })
}

/// Formats the result line: the cut weight, then the elapsed seconds if given.
pub fn format_result(weight: Weight, elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(elapsed) => format!("{} {}", weight, elapsed.as_secs_f64()),
        None => weight.to_string(),
    }
}

fn parse_field<T: FromStr>(field: &str, what: &str, line: usize) -> Result<T> {
    field.parse().map_err(|_| {
        GraphError::invalid_input(format!("line {line}: invalid {what} `{field}`"))
    })
}

fn at_line(line: usize, err: GraphError) -> GraphError {
    match err {
        GraphError::InvalidInput(message) => {
            GraphError::invalid_input(format!("line {line}: {message}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: GraphError) -> String {
        match err {
            GraphError::InvalidInput(message) => message,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_weighted_input() {
        let input = "4 4\n0 1 3\n1 2 1\n2 3 4\n3 0 2\n";
        let parsed = parse_graph(input).unwrap();
        assert_eq!(parsed.trials, None);
        assert_eq!(parsed.graph.size(), 4);
        assert_eq!(parsed.graph.weight(1, 0).unwrap(), 3);
        assert_eq!(parsed.graph.weight(3, 2).unwrap(), 4);
        assert_eq!(parsed.graph.total_weight(), 10);
    }

    #[test]
    fn test_parse_unweighted_with_trials() {
        let input = "# karger input\n3 2 50\n\n0 1\n1 2\n";
        let parsed = parse_graph(input).unwrap();
        assert_eq!(parsed.trials, Some(50));
        assert_eq!(parsed.graph.weight(0, 1).unwrap(), 1);
        assert_eq!(parsed.graph.weight(1, 2).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_edges() {
        let input = "2 2\n0 1 3\n1 0 4\n";
        let overwrite = parse_graph(input).unwrap();
        assert_eq!(overwrite.graph.weight(0, 1).unwrap(), 4);

        let options = ParseOptions {
            duplicates: DuplicateEdges::Sum,
        };
        let summed = parse_graph_with(input, options).unwrap();
        assert_eq!(summed.graph.weight(0, 1).unwrap(), 7);
    }

    #[test]
    fn test_header_errors() {
        assert!(message(parse_graph("").unwrap_err()).contains("empty input"));
        assert!(message(parse_graph("4\n").unwrap_err()).contains("line 1"));
        assert!(message(parse_graph("x 1\n").unwrap_err()).contains("vertex count"));
        assert!(message(parse_graph("2 1 0\n0 1\n").unwrap_err()).contains("trial count"));
        assert!(message(parse_graph("2 1 -5\n0 1\n").unwrap_err()).contains("trial count"));
    }

    #[test]
    fn test_oversized_vertex_count_is_an_error() {
        let err = message(parse_graph("4611686018427387904 0\n").unwrap_err());
        assert_eq!(
            err,
            "line 1: 4611686018427387904 vertices exceeds the limit of 32768"
        );

        let err = message(parse_graph("# big\n1000000 0\n").unwrap_err());
        assert!(err.starts_with("line 2: 1000000 vertices"));

        assert_eq!(parse_graph("5 0\n").unwrap().graph.size(), 5);
    }

    #[test]
    fn test_edge_errors() {
        let err = message(parse_graph("3 1\n0 3 1\n").unwrap_err());
        assert_eq!(err, "line 2: vertex 3 is outside 0..3");

        let err = message(parse_graph("3 1\n1 1 1\n").unwrap_err());
        assert_eq!(err, "line 2: self-loop on vertex 1");

        let err = message(parse_graph("3 1\n0 1 -2\n").unwrap_err());
        assert_eq!(err, "line 2: invalid weight `-2`");

        let err = message(parse_graph("3 1\n0 1 2 9\n").unwrap_err());
        assert!(err.starts_with("line 2: expected `src dst [weight]`"));
    }

    #[test]
    fn test_edge_count_mismatch() {
        let err = message(parse_graph("3 2\n0 1 1\n").unwrap_err());
        assert_eq!(err, "expected 2 edges, found 1");

        let err = message(parse_graph("3 1\n0 1 1\n\n1 2 1\n").unwrap_err());
        assert_eq!(err, "line 4: expected 1 edges, found more");
    }

    #[test]
    fn test_weight_overflow_reports_line() {
        let input = format!("3 2\n0 1 {}\n1 2 1\n", Weight::MAX);
        let err = message(parse_graph(&input).unwrap_err());
        assert_eq!(err, "line 3: total edge weight overflows u64");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(7, None), "7");
        assert_eq!(
            format_result(2, Some(Duration::from_millis(1500))),
            "2 1.5"
        );
    }
}
