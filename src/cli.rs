use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bundlegraph")]
#[command(about = "Draw hierarchical edge-bundling diagrams of import graphs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log pipeline details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render an import graph to SVG, HTML or JSON
    Render(RenderArgs),

    /// Serve the interactive diagram over HTTP
    Serve(ServeArgs),

    /// Build a sequence graph from a trace of path events
    Sequence(SequenceArgs),

    /// Generate a starter .bundlegraph.toml configuration file
    Init(InitArgs),
}

/// Diagram settings shared by `render` and `serve`; unset values come from the config file.
#[derive(Parser, Debug, Clone, Default)]
pub struct DiagramArgs {
    /// Width and height of the diagram in pixels
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Bundle tension between 0 (straight) and 1 (follow the tree)
    #[arg(long)]
    pub tension: Option<f64>,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Import graph JSON: [{"name", "size", "imports"}, ...]
    #[arg(default_value = "readme-flare-imports.json")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render as if this node were hovered
    #[arg(long)]
    pub highlight: Option<String>,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Import graph JSON: [{"name", "size", "imports"}, ...]
    #[arg(default_value = "readme-flare-imports.json")]
    pub input: PathBuf,

    /// Port for HTTP server
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct SequenceArgs {
    /// Trace file: a JSON array or JSON Lines of {"path": [...]} events
    pub trace: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Directory where to create .bundlegraph.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Html,
    Json,
}
