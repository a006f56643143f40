//! Library API for bundlegraph.
//!
//! These functions run the same pipeline as the CLI but return `Result`s
//! instead of printing and exiting.
//!
//! # Example
//!
//! ```no_run
//! use bundlegraph::{RenderOptions, render_svg};
//! use std::path::Path;
//!
//! let svg = render_svg(Path::new("imports.json"), RenderOptions::default(), Some("flare.util.Arrays"))?;
//! println!("{}", svg);
//! # Ok::<(), bundlegraph::BundleGraphError>(())
//! ```

use crate::config::ConfigError;
use crate::diagram::{Diagram, HighlightState, RenderOptions, Renderer};
use crate::fs::{FileSystem, default_fs};
use crate::load::{LoadError, load_records};
use crate::model::NamedRecord;
use crate::output::{OutputFormatter, SvgOutput};
use crate::sequence::{SequenceError, SequenceGraph, build_sequence, parse_trace};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum BundleGraphError {
    /// The import graph could not be read or parsed; nothing was rendered.
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A highlight was requested for a name that is not in the diagram.
    #[error("No node named '{0}' to highlight")]
    UnknownNode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lay out and bundle already-loaded records.
pub fn render(records: &[NamedRecord], options: RenderOptions) -> Diagram {
    Renderer::new(options).render(records)
}

/// Load an import graph file and render it. Fails without a diagram if the file cannot be loaded.
pub fn render_file(path: &Path, options: RenderOptions) -> Result<Diagram, BundleGraphError> {
    render_file_with_fs(path, options, default_fs())
}

/// Same as [`render_file`], reading through `fs`.
pub fn render_file_with_fs(
    path: &Path,
    options: RenderOptions,
    fs: &dyn FileSystem,
) -> Result<Diagram, BundleGraphError> {
    let records = load_records(fs, path)?;
    Ok(render(&records, options))
}

/// Render an import graph file to SVG, optionally with one node hovered.
///
/// Fails with [`BundleGraphError::UnknownNode`] if `highlight` names no node.
pub fn render_svg(
    path: &Path,
    options: RenderOptions,
    highlight: Option<&str>,
) -> Result<String, BundleGraphError> {
    let diagram = render_file(path, options)?;
    let mut state = HighlightState::new(&diagram);
    if let Some(name) = highlight {
        if !state.mouseover_name(&diagram, name) {
            warn!(node = name, "highlight target not found");
            return Err(BundleGraphError::UnknownNode(name.to_string()));
        }
    }
    Ok(SvgOutput::new()
        .with_highlight(&state)
        .format_to_string(&diagram)?)
}

/// Read a trace file and replay it into a sequence graph.
pub fn sequence_from_trace(path: &Path) -> Result<SequenceGraph, BundleGraphError> {
    let input = default_fs().read_to_string(path).map_err(SequenceError::from)?;
    let events = parse_trace(&input)?;
    Ok(build_sequence(&events))
}
