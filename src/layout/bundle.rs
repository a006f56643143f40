use crate::model::{Hierarchy, NodeId};
use std::collections::HashSet;

/// Routes a link through the tree: up from the source to the lowest common
/// ancestor, then down to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bundle;

impl Bundle {
    pub fn new() -> Self {
        Self
    }

    /// Waypoints from `source` up to the lowest common ancestor and down to `target`.
    /// A self-link is the single node.
    pub fn path(&self, hierarchy: &Hierarchy, source: NodeId, target: NodeId) -> Vec<NodeId> {
        if source == target {
            return vec![source];
        }

        let up = hierarchy.ancestors(source);
        let down = hierarchy.ancestors(target);
        let down_set: HashSet<NodeId> = down.iter().copied().collect();

        let lca_pos = up
            .iter()
            .position(|id| down_set.contains(id))
            .unwrap_or(up.len() - 1);
        let lca = up[lca_pos];

        let mut points: Vec<NodeId> = up[..=lca_pos].to_vec();
        let below_lca = down.iter().take_while(|id| **id != lca).count();
        points.extend(down[..below_lca].iter().rev());
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedRecord;

    fn hierarchy() -> Hierarchy {
        Hierarchy::from_records(&[
            NamedRecord::new("flare.vis.data.Data"),
            NamedRecord::new("flare.vis.Visualization"),
            NamedRecord::new("flare.util.Arrays"),
            NamedRecord::new("other.Thing"),
        ])
    }

    fn path_names(h: &Hierarchy, from: &str, to: &str) -> Vec<String> {
        Bundle::new()
            .path(h, h.find(from).unwrap(), h.find(to).unwrap())
            .into_iter()
            .map(|id| h.node(id).name.clone())
            .collect()
    }

    #[test]
    fn test_path_through_common_package() {
        let h = hierarchy();

        assert_eq!(
            path_names(&h, "flare.vis.data.Data", "flare.util.Arrays"),
            vec![
                "flare.vis.data.Data",
                "flare.vis.data",
                "flare.vis",
                "flare",
                "flare.util",
                "flare.util.Arrays"
            ]
        );
    }

    #[test]
    fn test_path_through_root() {
        let h = hierarchy();

        assert_eq!(
            path_names(&h, "other.Thing", "flare.util.Arrays"),
            vec!["other.Thing", "other", "", "flare", "flare.util", "flare.util.Arrays"]
        );
    }

    #[test]
    fn test_path_to_ancestor() {
        let h = hierarchy();

        assert_eq!(
            path_names(&h, "flare.vis.data.Data", "flare.vis"),
            vec!["flare.vis.data.Data", "flare.vis.data", "flare.vis"]
        );
        assert_eq!(
            path_names(&h, "flare.vis", "flare.vis.data.Data"),
            vec!["flare.vis", "flare.vis.data", "flare.vis.data.Data"]
        );
    }

    #[test]
    fn test_self_link_is_single_point() {
        let h = hierarchy();

        assert_eq!(
            path_names(&h, "flare.util.Arrays", "flare.util.Arrays"),
            vec!["flare.util.Arrays"]
        );
    }
}
