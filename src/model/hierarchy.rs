use super::NamedRecord;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Index of a node inside its [`Hierarchy`]. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Full dotted name; empty for the root.
    pub name: String,
    /// Last segment of `name`.
    pub key: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub size: f64,
    pub imports: Vec<String>,
    /// False for package nodes synthesized from a name prefix.
    pub declared: bool,
}

impl HierarchyNode {
    fn bare(name: &str, key: &str, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            children: Vec::new(),
            parent,
            size: 0.0,
            imports: Vec::new(),
            declared: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Tree of dotted names, stored as an arena with a name index.
///
/// Each name hangs under the name obtained by cutting at its last `.`; names
/// without a dot hang under the root. Missing prefixes are synthesized as bare
/// package nodes.
///
/// Duplicate names: the first record that declares a name wins. A record can
/// still fill in a node that was only synthesized as a prefix earlier, but a
/// second record with an already-declared name is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
    by_name: HashMap<String, NodeId>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        let mut by_name = HashMap::new();
        by_name.insert(String::new(), NodeId(0));
        Self {
            nodes: vec![HierarchyNode::bare("", "", None)],
            by_name,
        }
    }
}

impl Hierarchy {
    /// Build the tree from records in order.
    pub fn from_records(records: &[NamedRecord]) -> Self {
        let mut hierarchy = Self::default();
        for record in records {
            hierarchy.insert(record);
        }
        hierarchy
    }

    /// Add one record, creating its node and any missing ancestors.
    pub fn insert(&mut self, record: &NamedRecord) -> NodeId {
        let id = self.ensure(&record.name);
        let node = &mut self.nodes[id.0];

        if node.declared {
            warn!(record = %record.name, "duplicate record ignored");
            return id;
        }

        node.declared = true;
        node.size = record.size;
        node.imports = record.imports.clone();
        id
    }

    fn ensure(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        // Climb to the nearest registered ancestor; the root always is one.
        let mut missing = vec![name];
        let mut current = name;
        let mut parent = loop {
            let parent_name = current.rfind('.').map_or("", |i| &current[..i]);
            if let Some(&id) = self.by_name.get(parent_name) {
                break id;
            }
            missing.push(parent_name);
            current = parent_name;
        };

        for missing_name in missing.into_iter().rev() {
            let key = missing_name
                .rfind('.')
                .map_or(missing_name, |i| &missing_name[i + 1..]);
            let id = NodeId(self.nodes.len());
            self.nodes
                .push(HierarchyNode::bare(missing_name, key, Some(parent)));
            self.nodes[parent.0].children.push(id);
            self.by_name.insert(missing_name.to_string(), id);

            debug!(node = missing_name, parent = %self.nodes[parent.0].name, "created hierarchy node");
            parent = id;
        }

        parent
    }

    /// The synthetic root, named `""`.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Node for an id handed out by this hierarchy. Panics on a foreign id.
    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id.0]
    }

    /// Like [`Hierarchy::node`], but `None` for an out-of-range id.
    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node by its full dotted name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Number of nodes, counting the root and synthesized packages.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root exists, so `len()` is 1.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All nodes in creation order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &HierarchyNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Node ids in depth-first pre-order, children in insertion order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }

        order
    }

    /// `id` followed by each of its ancestors up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            chain.push(parent);
            current = parent;
        }
        chain
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len() - 1
    }
}
