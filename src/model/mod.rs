mod hierarchy;
mod record;

pub use hierarchy::{Hierarchy, HierarchyNode, NodeId};
pub use record::NamedRecord;
