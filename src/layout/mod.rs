//! Geometry for the radial diagram: node placement, link routing and curve generation.

mod bundle;
mod cluster;
mod curve;

pub use bundle::Bundle;
pub use cluster::{LayoutNode, RadialCluster};
pub use curve::{RadialLine, num, to_cartesian};
