use super::OutputFormatter;
use crate::diagram::{BundledPath, Diagram};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// Machine-readable layout: every placed node and every link with its route.
#[derive(Debug, Default)]
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonDiagram<'a> {
    diameter: f64,
    inner_radius: f64,
    nodes: Vec<JsonNode<'a>>,
    links: Vec<JsonLink<'a>>,
}

#[derive(Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    key: &'a str,
    x: f64,
    y: f64,
    depth: usize,
    value: f64,
    leaf: bool,
}

#[derive(Serialize)]
struct JsonLink<'a> {
    source: &'a str,
    target: Option<&'a str>,
    import: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    d: Option<&'a str>,
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, diagram: &Diagram, writer: &mut W) -> std::io::Result<()> {
        let nodes = diagram
            .nodes
            .iter()
            .map(|n| {
                let node = diagram.hierarchy.node(n.id);
                JsonNode {
                    name: &node.name,
                    key: &node.key,
                    x: n.x,
                    y: n.y,
                    depth: n.depth,
                    value: n.value,
                    leaf: node.is_leaf(),
                }
            })
            .collect();

        let paths: HashMap<usize, &BundledPath> =
            diagram.paths.iter().map(|p| (p.link, p)).collect();

        let links = diagram
            .links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let path = paths.get(&index).copied();
                JsonLink {
                    source: diagram.name(link.source),
                    target: link.target.map(|t| diagram.name(t)),
                    import: &link.import,
                    points: path.map(|p| p.points.iter().map(|id| diagram.name(*id)).collect()),
                    d: path.map(|p| p.d.as_str()),
                }
            })
            .collect();

        let json = JsonDiagram {
            diameter: diagram.options.diameter,
            inner_radius: diagram.options.inner_radius(),
            nodes,
            links,
        };

        let text = serde_json::to_string_pretty(&json).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", text)
    }
}
