//! The render pipeline: records to hierarchy, layout, import links and bundled curves.

mod highlight;
mod imports;

pub use highlight::{HighlightState, LinkClasses, NodeClasses};
pub use imports::{ImportLink, resolve_imports};

use crate::layout::{Bundle, LayoutNode, RadialCluster, RadialLine, num};
use crate::model::{Hierarchy, NamedRecord, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Width and height of the drawing.
    pub diameter: f64,
    /// Space left outside the node ring for labels.
    pub label_padding: f64,
    pub tension: f64,
    /// Angular extent of the ring in degrees.
    pub sweep: f64,
    /// Gap between a leaf and its label.
    pub label_offset: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            diameter: 960.0,
            label_padding: 200.0,
            tension: 0.85,
            sweep: 360.0,
            label_offset: 8.0,
        }
    }
}

impl RenderOptions {
    /// Half the diameter.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Radius of the leaf ring, never negative.
    pub fn inner_radius(&self) -> f64 {
        (self.radius() - self.label_padding).max(0.0)
    }
}

/// Owns the layout generators for one diagram.
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    cluster: RadialCluster,
    bundle: Bundle,
    line: RadialLine,
}

impl Renderer {
    /// Configure the cluster, bundle and line generators from `options`.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            cluster: RadialCluster::new(options.sweep, options.inner_radius()),
            bundle: Bundle::new(),
            line: RadialLine::new(options.tension),
        }
    }

    /// Options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Run the whole pipeline: hierarchy, layout, import links, bundled routes, labels.
    pub fn render(&self, records: &[NamedRecord]) -> Diagram {
        let hierarchy = Hierarchy::from_records(records);
        let nodes = self.cluster.nodes(&hierarchy);
        let links = resolve_imports(&hierarchy, &nodes);

        let positions: HashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();

        let paths: Vec<BundledPath> = links
            .iter()
            .enumerate()
            .filter_map(|(index, link)| {
                let target = link.target?;
                let points = self.bundle.path(&hierarchy, link.source, target);
                let polar: Vec<(f64, f64)> = points
                    .iter()
                    .map(|id| {
                        let n = &nodes[positions[id]];
                        (n.x, n.y)
                    })
                    .collect();
                Some(BundledPath {
                    link: index,
                    d: self.line.path(&polar),
                    points,
                })
            })
            .collect();

        let labels: Vec<Label> = nodes
            .iter()
            .filter(|n| n.id != hierarchy.root() && hierarchy.node(n.id).is_leaf())
            .map(|n| Label::place(n, &hierarchy, self.options.label_offset))
            .collect();

        info!(
            nodes = nodes.len(),
            leaves = labels.len(),
            links = links.len(),
            drawn = paths.len(),
            "diagram rendered"
        );

        Diagram {
            options: self.options,
            hierarchy,
            nodes,
            links,
            paths,
            labels,
            positions,
        }
    }
}

/// Route of one drawn link through the tree, with its SVG path data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundledPath {
    /// Index into [`Diagram::links`].
    pub link: usize,
    /// Never empty.
    pub points: Vec<NodeId>,
    pub d: String,
}

impl BundledPath {
    pub fn source(&self) -> NodeId {
        self.points[0]
    }

    pub fn target(&self) -> NodeId {
        self.points[self.points.len() - 1]
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.source() == node || self.target() == node
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// Text for one leaf, rotated onto the ring and flipped on the left half so it stays upright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub node: NodeId,
    pub text: String,
    pub transform: String,
    pub anchor: TextAnchor,
}

impl Label {
    fn place(layout: &LayoutNode, hierarchy: &Hierarchy, offset: f64) -> Self {
        let flipped = layout.x >= 180.0;
        let mut transform = format!(
            "rotate({})translate({},0)",
            num(layout.x - 90.0),
            num(layout.y + offset)
        );
        if flipped {
            transform.push_str("rotate(180)");
        }

        Self {
            node: layout.id,
            text: hierarchy.node(layout.id).key.clone(),
            transform,
            anchor: if flipped {
                TextAnchor::End
            } else {
                TextAnchor::Start
            },
        }
    }
}

/// Everything needed to draw the diagram, produced by [`Renderer::render`].
#[derive(Debug, Clone)]
pub struct Diagram {
    pub options: RenderOptions,
    pub hierarchy: Hierarchy,
    /// Every hierarchy node, in pre-order.
    pub nodes: Vec<LayoutNode>,
    /// All import links, including unresolved ones.
    pub links: Vec<ImportLink>,
    /// One entry per resolved link, in link order.
    pub paths: Vec<BundledPath>,
    pub labels: Vec<Label>,
    positions: HashMap<NodeId, usize>,
}

impl Diagram {
    /// Placed position of `id`, if it belongs to this diagram.
    pub fn layout(&self, id: NodeId) -> Option<&LayoutNode> {
        self.positions.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.hierarchy.find(name)
    }

    /// Full dotted name of `id`.
    pub fn name(&self, id: NodeId) -> &str {
        &self.hierarchy.node(id).name
    }

    /// Links whose import named no node. They are kept but never drawn.
    pub fn unresolved_links(&self) -> impl Iterator<Item = &ImportLink> {
        self.links.iter().filter(|l| !l.is_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Diagram {
        Renderer::new(RenderOptions::default()).render(&[
            NamedRecord::new("a.b").with_imports(["a.c"]),
            NamedRecord::new("a.c"),
        ])
    }

    #[test]
    fn test_example_end_to_end() {
        let diagram = example();
        let h = &diagram.hierarchy;

        let root = h.node(h.root());
        assert_eq!(root.children.len(), 1);
        let a = h.node(root.children[0]);
        assert_eq!(a.name, "a");
        let keys: Vec<_> = a.children.iter().map(|c| h.node(*c).key.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);

        assert_eq!(diagram.links.len(), 1);
        assert_eq!(diagram.links[0].source, h.find("a.b").unwrap());
        assert_eq!(diagram.links[0].target, h.find("a.c"));

        assert_eq!(diagram.paths.len(), 1);
        let names: Vec<_> = diagram.paths[0]
            .points
            .iter()
            .map(|id| diagram.name(*id))
            .collect();
        assert_eq!(names, vec!["a.b", "a", "a.c"]);
    }

    #[test]
    fn test_inner_radius_from_diameter() {
        let options = RenderOptions {
            diameter: 960.0,
            ..Default::default()
        };
        assert_eq!(options.inner_radius(), 280.0);

        let small = RenderOptions {
            diameter: 100.0,
            ..Default::default()
        };
        assert_eq!(small.inner_radius(), 0.0);
    }

    #[test]
    fn test_labels_only_for_leaves() {
        let diagram = example();
        let texts: Vec<_> = diagram.labels.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_label_flip_on_left_half() {
        let diagram = example();
        // Two siblings: b at 90 degrees, c at 270 degrees.
        let b = &diagram.labels[0];
        let c = &diagram.labels[1];

        assert_eq!(b.anchor, TextAnchor::Start);
        assert_eq!(b.transform, "rotate(0)translate(288,0)");
        assert_eq!(c.anchor, TextAnchor::End);
        assert_eq!(c.transform, "rotate(180)translate(288,0)rotate(180)");
    }

    #[test]
    fn test_unresolved_link_is_not_drawn() {
        let diagram = Renderer::new(RenderOptions::default()).render(&[
            NamedRecord::new("a").with_imports(["nowhere", "b"]),
            NamedRecord::new("b"),
        ]);

        assert_eq!(diagram.links.len(), 2);
        assert_eq!(diagram.unresolved_links().count(), 1);
        assert_eq!(diagram.paths.len(), 1);
        assert_eq!(diagram.paths[0].link, 1);
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let diagram = Renderer::new(RenderOptions::default()).render(&[]);

        assert!(diagram.labels.is_empty());
        assert!(diagram.paths.is_empty());
        assert_eq!(diagram.nodes.len(), 1);
    }

    #[test]
    fn test_deep_name_renders() {
        let name = vec!["x"; 5_000].join(".");
        let diagram = Renderer::new(RenderOptions::default())
            .render(&[NamedRecord::new(name.as_str()).with_imports(["x"])]);

        assert_eq!(diagram.nodes.len(), 5_001);
        assert_eq!(diagram.labels.len(), 1);
        assert_eq!(diagram.paths.len(), 1);
        assert_eq!(diagram.paths[0].points.len(), 5_000);
        assert!(diagram.paths[0].d.starts_with('M'));
    }
}
