use crate::cli::ServeArgs;
use crate::diagram::Renderer;
use crate::fs::default_fs;
use crate::graph::{AppState, serve};
use crate::style;
use std::path::Path;

use super::CommandContext;

/// Render once, then serve the page until the process is stopped.
pub fn cmd_serve(args: ServeArgs) -> i32 {
    let ctx = match CommandContext::new(&args.input, &args.diagram, Path::new("."), default_fs()) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let diagram = Renderer::new(ctx.options).render(&ctx.records);
    let title = ctx.title();
    let state = match AppState::build(ctx.records, &diagram, &title) {
        Ok(state) => state,
        Err(e) => {
            style::error(&format!("Failed to render diagram: {}", e));
            return 1;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            style::error(&format!("Failed to create tokio runtime: {}", e));
            return 1;
        }
    };

    if let Err(e) = rt.block_on(serve(state, args.port, args.open)) {
        style::error(&format!("Server failed: {}", e));
        return 1;
    }

    0
}
