pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diagram;
pub mod fs;
pub mod graph;
pub mod layout;
pub mod load;
pub mod model;
pub mod output;
pub mod sequence;
pub mod style;

pub use api::{
    BundleGraphError, render, render_file, render_file_with_fs, render_svg, sequence_from_trace,
};
pub use cli::Cli;
pub use commands::{cmd_init, cmd_render, cmd_sequence, cmd_serve};
pub use config::Config;
pub use diagram::{
    BundledPath, Diagram, HighlightState, ImportLink, Label, RenderOptions, Renderer, TextAnchor,
};
pub use model::{Hierarchy, HierarchyNode, NamedRecord, NodeId};
pub use sequence::{SequenceGraph, TraceEvent};
