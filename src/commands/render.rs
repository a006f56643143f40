use crate::cli::{OutputFormat, RenderArgs};
use crate::diagram::{HighlightState, Renderer};
use crate::fs::{FileSystem, default_fs};
use crate::output::{HtmlOutput, JsonOutput, OutputFormatter, SvgOutput};
use crate::style;
use std::io::{self, Write};
use std::path::Path;

use super::{CommandContext, emit};

/// Render the import graph and write it to a file or stdout. Returns the exit code.
pub fn cmd_render(args: RenderArgs) -> i32 {
    cmd_render_with_fs(args, Path::new("."), default_fs(), &mut io::stdout())
}

pub fn cmd_render_with_fs(
    args: RenderArgs,
    config_dir: &Path,
    fs: &dyn FileSystem,
    stdout: &mut dyn Write,
) -> i32 {
    let ctx = match CommandContext::new(&args.input, &args.diagram, config_dir, fs) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let diagram = Renderer::new(ctx.options).render(&ctx.records);

    let unresolved = diagram.unresolved_links().count();
    if unresolved > 0 {
        style::warning(&format!("{} import(s) name no known node and were skipped", unresolved));
    }

    let mut state = HighlightState::new(&diagram);
    if let Some(name) = &args.highlight {
        if !state.mouseover_name(&diagram, name) {
            style::warning(&format!("No node named '{}' to highlight", name));
        }
    }

    let rendered = match args.format {
        OutputFormat::Svg => SvgOutput::new().with_highlight(&state).format_to_string(&diagram),
        OutputFormat::Html => HtmlOutput::new(ctx.title())
            .with_highlight(&state)
            .format_to_string(&diagram),
        OutputFormat::Json => JsonOutput::new().format_to_string(&diagram),
    };

    let content = match rendered {
        Ok(content) => content,
        Err(e) => {
            style::error(&format!("Failed to format output: {}", e));
            return 1;
        }
    };

    if let Err(e) = emit(&content, args.output.as_deref(), fs, stdout) {
        style::error(&format!("Failed to write output: {}", e));
        return 1;
    }

    0
}
