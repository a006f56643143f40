mod init;
mod render;
mod sequence;
mod serve;

pub use init::{cmd_init, cmd_init_with_fs};
pub use render::{cmd_render, cmd_render_with_fs};
pub use sequence::{cmd_sequence, cmd_sequence_with_fs};
pub use serve::cmd_serve;

use crate::cli::DiagramArgs;
use crate::config::Config;
use crate::diagram::RenderOptions;
use crate::fs::FileSystem;
use crate::load::load_records;
use crate::model::NamedRecord;
use crate::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Loaded input and effective options shared by the diagram commands.
pub struct CommandContext {
    pub input: PathBuf,
    pub options: RenderOptions,
    pub records: Vec<NamedRecord>,
}

impl CommandContext {
    /// Merge config file and flags, then load the import graph.
    /// Returns Err(exit_code) if loading fails; nothing has been rendered at that point.
    pub fn new(
        input: &Path,
        diagram: &DiagramArgs,
        config_dir: &Path,
        fs: &dyn FileSystem,
    ) -> Result<Self, i32> {
        let config = Config::load(fs, config_dir).unwrap_or_else(|e| {
            style::warning(&format!("{}. Using defaults.", e));
            Config::default()
        });

        let mut options = config.render;
        if let Some(diameter) = diagram.diameter {
            options.diameter = diameter;
        }
        if let Some(tension) = diagram.tension {
            options.tension = tension;
        }

        let records = match load_records(fs, input) {
            Ok(records) => records,
            Err(e) => {
                style::error(&e.to_string());
                return Err(1);
            }
        };

        Ok(Self {
            input: input.to_path_buf(),
            options,
            records,
        })
    }

    pub fn title(&self) -> String {
        self.input
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("bundlegraph")
            .to_string()
    }
}

/// Write `content` to `output`, or to `stdout` when no path is given.
fn emit(
    content: &str,
    output: Option<&Path>,
    fs: &dyn FileSystem,
    stdout: &mut dyn Write,
) -> io::Result<()> {
    match output {
        Some(path) => {
            fs.write(path, content)?;
            style::success(&format!("Written to {}", style::path(path)));
            Ok(())
        }
        None => stdout.write_all(content.as_bytes()),
    }
}
