//! Incremental graph built one trace step at a time.
//!
//! Each step names a node by a path of segments. Consecutive steps are joined
//! by a link, so the links record the walk in call order.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid trace: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid trace event on line {line}: {source}")]
    Line {
        line: usize,
        source: serde_json::Error,
    },
}

/// One step of a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub path: Vec<String>,
}

impl TraceEvent {
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Node identifier: the path segments joined with `-`.
    pub fn id(&self) -> String {
        self.path.join("-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceNode {
    pub id: String,
}

/// Link between two entries of [`SequenceGraph::nodes`], by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLink {
    pub source: usize,
    pub target: usize,
}

/// Nodes are identified by string equality of their id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceGraph {
    nodes: Vec<SequenceNode>,
    links: Vec<SequenceLink>,
    source_node: Option<usize>,
}

impl SequenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the node with `id`. Index 0 is a hit like any other.
    pub fn find_node(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Index of the node with `id`, appending it first if it is new.
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(index) = self.find_node(id) {
            return index;
        }
        self.nodes.push(SequenceNode { id: id.to_string() });
        self.nodes.len() - 1
    }

    /// Record one trace step, linking it from the previous step if there was one.
    pub fn add_sequence(&mut self, event: &TraceEvent) -> usize {
        let id = event.id();
        let node = self.add_node(&id);

        if let Some(source) = self.source_node {
            self.links.push(SequenceLink {
                source,
                target: node,
            });
            debug!(from = %self.nodes[source].id, to = %id, "sequence link");
        }

        self.source_node = Some(node);
        node
    }

    pub fn nodes(&self) -> &[SequenceNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[SequenceLink] {
        &self.links
    }

    /// Node added by the latest `add_sequence` call.
    pub fn source_node(&self) -> Option<&SequenceNode> {
        self.source_node.map(|i| &self.nodes[i])
    }

    /// Node/link JSON with links referring to node ids.
    pub fn to_json(&self) -> SequenceJson<'_> {
        SequenceJson {
            nodes: &self.nodes,
            links: self
                .links
                .iter()
                .map(|l| SequenceJsonLink {
                    source: &self.nodes[l.source].id,
                    target: &self.nodes[l.target].id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SequenceJson<'a> {
    pub nodes: &'a [SequenceNode],
    pub links: Vec<SequenceJsonLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SequenceJsonLink<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Parse a trace given either as a JSON array of events or as JSON Lines.
pub fn parse_trace(input: &str) -> Result<Vec<TraceEvent>, SequenceError> {
    if input.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(input)?);
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| SequenceError::Line {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Build a graph by feeding every event through [`SequenceGraph::add_sequence`] in order.
pub fn build_sequence(events: &[TraceEvent]) -> SequenceGraph {
    let mut graph = SequenceGraph::new();
    for event in events {
        graph.add_sequence(event);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_finds_index_zero() {
        let mut graph = SequenceGraph::new();
        graph.add_node("x");

        assert_eq!(graph.find_node("x"), Some(0));
        assert_eq!(graph.add_node("x"), 0);
        assert_eq!(graph.nodes().len(), 1);
    }

    #[test]
    fn test_find_node_missing() {
        let mut graph = SequenceGraph::new();
        assert_eq!(graph.find_node("x"), None);

        graph.add_node("x");
        assert_eq!(graph.find_node("y"), None);
    }

    #[test]
    fn test_add_sequence_chaining() {
        let mut graph = SequenceGraph::new();
        graph.add_sequence(&TraceEvent::new(["a"]));
        graph.add_sequence(&TraceEvent::new(["b"]));

        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(graph.links(), &[SequenceLink { source: 0, target: 1 }]);
        assert_eq!(graph.source_node().unwrap().id, "b");
    }

    #[test]
    fn test_first_step_has_no_link() {
        let mut graph = SequenceGraph::new();
        assert!(graph.source_node().is_none());

        graph.add_sequence(&TraceEvent::new(["only"]));
        assert!(graph.links().is_empty());
        assert_eq!(graph.source_node().unwrap().id, "only");
    }

    #[test]
    fn test_revisit_converges_on_existing_node() {
        let graph = build_sequence(&[
            TraceEvent::new(["main"]),
            TraceEvent::new(["lib", "parse"]),
            TraceEvent::new(["main"]),
            TraceEvent::new(["main"]),
        ]);

        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["main", "lib-parse"]);
        assert_eq!(
            graph.links(),
            &[
                SequenceLink { source: 0, target: 1 },
                SequenceLink { source: 1, target: 0 },
                SequenceLink { source: 0, target: 0 },
            ]
        );
    }

    #[test]
    fn test_parse_trace_array_and_lines() {
        let array = parse_trace(r#"[{"path": ["a", "b"]}, {"path": ["c"]}]"#).unwrap();
        let lines = parse_trace("{\"path\": [\"a\", \"b\"]}\n\n{\"path\": [\"c\"]}\n").unwrap();

        assert_eq!(array, lines);
        assert_eq!(array[0].id(), "a-b");
    }

    #[test]
    fn test_parse_trace_reports_line() {
        let err = parse_trace("{\"path\": []}\nnot json\n").unwrap_err();

        match err {
            SequenceError::Line { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected line error, got: {:?}", other),
        }
    }

    #[test]
    fn test_json_uses_ids() {
        let graph = build_sequence(&[TraceEvent::new(["a"]), TraceEvent::new(["b"])]);
        let json = serde_json::to_value(graph.to_json()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [{"id": "a"}, {"id": "b"}],
                "links": [{"source": "a", "target": "b"}]
            })
        );
    }
}
