use crate::model::{Hierarchy, NodeId};
use serde::Serialize;

/// A hierarchy node placed on the circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: NodeId,
    /// Angle in degrees, clockwise from twelve o'clock.
    pub x: f64,
    /// Distance from the centre.
    pub y: f64,
    pub depth: usize,
    /// Sum of the sizes of all leaves below (own size for a leaf).
    pub value: f64,
}

/// Radial dendrogram placement: every leaf sits on the outer radius, spaced
/// evenly around `sweep` degrees, and each parent is centred over its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialCluster {
    pub sweep: f64,
    pub radius: f64,
}

impl RadialCluster {
    pub fn new(sweep: f64, radius: f64) -> Self {
        Self { sweep, radius }
    }

    /// Lay out every node of `hierarchy`, returned in pre-order.
    pub fn nodes(&self, hierarchy: &Hierarchy) -> Vec<LayoutNode> {
        let order = hierarchy.preorder();
        let n = hierarchy.len();

        let mut x = vec![0.0; n];
        let mut height = vec![0usize; n];
        let mut value = vec![0.0; n];
        let mut depth = vec![0usize; n];

        for &id in &order {
            if let Some(parent) = hierarchy.node(id).parent {
                depth[id.0] = depth[parent.0] + 1;
            }
        }

        // Leaves, left to right.
        let mut previous: Option<NodeId> = None;
        let mut offset = 0.0;
        for &id in &order {
            let node = hierarchy.node(id);
            if !node.is_leaf() {
                continue;
            }
            if let Some(prev) = previous {
                offset += separation(hierarchy, id, prev);
            }
            x[id.0] = offset;
            value[id.0] = node.size;
            previous = Some(id);
        }

        // Parents after their children.
        for &id in order.iter().rev() {
            let children = &hierarchy.node(id).children;
            if children.is_empty() {
                continue;
            }
            let mean_x = children.iter().map(|c| x[c.0]).sum::<f64>() / children.len() as f64;
            let tallest = children.iter().map(|c| height[c.0]).max().unwrap_or(0);
            let total: f64 = children.iter().map(|c| value[c.0]).sum();
            x[id.0] = mean_x;
            height[id.0] = tallest + 1;
            value[id.0] = total;
        }

        let left = extreme_leaf(hierarchy, |children| children.first());
        let right = extreme_leaf(hierarchy, |children| children.last());
        let x0 = x[left.0] - separation(hierarchy, left, right) / 2.0;
        let x1 = x[right.0] + separation(hierarchy, right, left) / 2.0;
        let root_height = height[hierarchy.root().0];

        order
            .into_iter()
            .map(|id| {
                let relative = if root_height > 0 {
                    height[id.0] as f64 / root_height as f64
                } else {
                    1.0
                };
                LayoutNode {
                    id,
                    x: (x[id.0] - x0) / (x1 - x0) * self.sweep,
                    y: (1.0 - relative) * self.radius,
                    depth: depth[id.0],
                    value: value[id.0],
                }
            })
            .collect()
    }
}

fn separation(hierarchy: &Hierarchy, a: NodeId, b: NodeId) -> f64 {
    if hierarchy.node(a).parent == hierarchy.node(b).parent {
        1.0
    } else {
        2.0
    }
}

fn extreme_leaf<F>(hierarchy: &Hierarchy, pick: F) -> NodeId
where
    F: Fn(&[NodeId]) -> Option<&NodeId>,
{
    let mut current = hierarchy.root();
    while let Some(&next) = pick(hierarchy.node(current).children.as_slice()) {
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedRecord;

    fn layout(names: &[&str]) -> (Hierarchy, Vec<LayoutNode>) {
        let records: Vec<_> = names.iter().map(|n| NamedRecord::new(*n)).collect();
        let hierarchy = Hierarchy::from_records(&records);
        let nodes = RadialCluster::new(360.0, 100.0).nodes(&hierarchy);
        (hierarchy, nodes)
    }

    fn at<'a>(h: &Hierarchy, nodes: &'a [LayoutNode], name: &str) -> &'a LayoutNode {
        let id = h.find(name).unwrap();
        nodes.iter().find(|n| n.id == id).unwrap()
    }

    #[test]
    fn test_leaves_on_outer_radius_root_at_centre() {
        let (h, nodes) = layout(&["a.b", "a.c", "d"]);

        assert_eq!(at(&h, &nodes, "a.b").y, 100.0);
        assert_eq!(at(&h, &nodes, "d").y, 100.0);
        assert_eq!(at(&h, &nodes, "").y, 0.0);
        assert_eq!(at(&h, &nodes, "a").y, 50.0);
    }

    #[test]
    fn test_sibling_and_cousin_spacing() {
        // Leaf offsets: a.b=0, a.c=1, d=3 (cousin gap of 2); padding 1 each side.
        let (h, nodes) = layout(&["a.b", "a.c", "d"]);
        let span = 5.0;

        assert!((at(&h, &nodes, "a.b").x - 360.0 * 1.0 / span).abs() < 1e-9);
        assert!((at(&h, &nodes, "a.c").x - 360.0 * 2.0 / span).abs() < 1e-9);
        assert!((at(&h, &nodes, "d").x - 360.0 * 4.0 / span).abs() < 1e-9);
        assert!((at(&h, &nodes, "a").x - 360.0 * 1.5 / span).abs() < 1e-9);
    }

    #[test]
    fn test_preorder_output_and_depths() {
        let (h, nodes) = layout(&["a.b.c"]);

        let names: Vec<_> = nodes.iter().map(|n| h.node(n.id).name.as_str()).collect();
        assert_eq!(names, vec!["", "a", "a.b", "a.b.c"]);
        let depths: Vec<_> = nodes.iter().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_values_sum_leaf_sizes() {
        let hierarchy = Hierarchy::from_records(&[
            NamedRecord::new("a.b").with_size(3.0),
            NamedRecord::new("a.c").with_size(4.0),
        ]);
        let nodes = RadialCluster::new(360.0, 10.0).nodes(&hierarchy);

        assert_eq!(nodes[0].value, 7.0);
    }

    #[test]
    fn test_empty_hierarchy_places_root() {
        let hierarchy = Hierarchy::default();
        let nodes = RadialCluster::new(360.0, 10.0).nodes(&hierarchy);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].x, 180.0);
        assert_eq!(nodes[0].y, 0.0);
    }
}
