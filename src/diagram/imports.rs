use crate::layout::LayoutNode;
use crate::model::{Hierarchy, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Directed edge from a node to something it imports.
///
/// `target` is `None` when the imported name matches no node; such a link is
/// kept for reporting but never drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportLink {
    pub source: NodeId,
    pub target: Option<NodeId>,
    /// The imported name as written in the record.
    pub import: String,
}

impl ImportLink {
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// One link per entry of every laid-out node's `imports`, in node order.
/// Duplicate imports produce duplicate links.
pub fn resolve_imports(hierarchy: &Hierarchy, nodes: &[LayoutNode]) -> Vec<ImportLink> {
    let by_name: HashMap<&str, NodeId> = nodes
        .iter()
        .map(|n| (hierarchy.node(n.id).name.as_str(), n.id))
        .collect();

    let mut links = Vec::new();
    for layout in nodes {
        let node = hierarchy.node(layout.id);
        for import in &node.imports {
            let target = by_name.get(import.as_str()).copied();
            if target.is_none() {
                warn!(source = %node.name, import = %import, "unresolved import");
            }
            links.push(ImportLink {
                source: layout.id,
                target,
                import: import.clone(),
            });
        }
    }

    links
}
