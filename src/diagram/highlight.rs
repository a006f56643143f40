use super::Diagram;
use crate::model::NodeId;
use std::collections::HashMap;

/// Per-node hover classes. `target` marks nodes the hovered node imports,
/// `source` marks nodes that import it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeClasses {
    pub target: bool,
    pub source: bool,
}

impl NodeClasses {
    pub fn css(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.target {
            classes.push("nodeTarget");
        }
        if self.source {
            classes.push("nodeSource");
        }
        classes
    }
}

/// Per-link hover classes: `link_target` when the hovered node is the link's
/// target, `link_source` when it is the link's source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClasses {
    pub link_target: bool,
    pub link_source: bool,
}

impl LinkClasses {
    pub fn css(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.link_target {
            classes.push("linkTarget");
        }
        if self.link_source {
            classes.push("linkSource");
        }
        classes
    }
}

/// Hover highlighting for a [`Diagram`], kept beside it rather than on its nodes.
///
/// Links are indexed like [`Diagram::paths`]. `order` is the drawing order of
/// those links; hovering raises every link touching the hovered node to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    nodes: HashMap<NodeId, NodeClasses>,
    links: Vec<LinkClasses>,
    order: Vec<usize>,
    hovered: Option<NodeId>,
}

impl HighlightState {
    /// Nothing hovered, links in their original order.
    pub fn new(diagram: &Diagram) -> Self {
        Self {
            nodes: HashMap::new(),
            links: vec![LinkClasses::default(); diagram.paths.len()],
            order: (0..diagram.paths.len()).collect(),
            hovered: None,
        }
    }

    /// Hover `hovered`. Links into and out of it get link classes and the nodes at
    /// their far ends get node classes. Those links are raised above the rest.
    ///
    /// Replaces any previous hover, so calling it twice is the same as once.
    pub fn mouseover(&mut self, diagram: &Diagram, hovered: NodeId) {
        if self.links.len() != diagram.paths.len() {
            *self = Self::new(diagram);
        }

        self.nodes.clear();
        self.hovered = Some(hovered);

        let mut raised = Vec::new();
        for (i, path) in diagram.paths.iter().enumerate() {
            let classes = &mut self.links[i];
            classes.link_target = path.target() == hovered;
            classes.link_source = path.source() == hovered;

            if classes.link_target {
                self.nodes.entry(path.source()).or_default().source = true;
            }
            if classes.link_source {
                self.nodes.entry(path.target()).or_default().target = true;
            }
            if path.touches(hovered) {
                raised.push(i);
            }
        }

        self.order.retain(|i| !raised.contains(i));
        self.order.extend(raised);
    }

    /// Hover the node called `name`; an unknown name highlights nothing.
    pub fn mouseover_name(&mut self, diagram: &Diagram, name: &str) -> bool {
        match diagram.find(name) {
            Some(id) => {
                self.mouseover(diagram, id);
                true
            }
            None => {
                self.mouseout();
                false
            }
        }
    }

    /// Clear every class. The raised drawing order is kept.
    pub fn mouseout(&mut self) {
        self.nodes.clear();
        self.links.iter_mut().for_each(|l| *l = LinkClasses::default());
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn node(&self, id: NodeId) -> NodeClasses {
        self.nodes.get(&id).copied().unwrap_or_default()
    }

    pub fn link(&self, index: usize) -> LinkClasses {
        self.links.get(index).copied().unwrap_or_default()
    }

    /// Link indices in drawing order, last on top.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// True when no node or link carries a highlight class.
    pub fn is_clear(&self) -> bool {
        self.nodes.values().all(|c| *c == NodeClasses::default())
            && self.links.iter().all(|c| *c == LinkClasses::default())
    }
}
