use crate::cli::SequenceArgs;
use crate::fs::{FileSystem, default_fs};
use crate::sequence::{build_sequence, parse_trace};
use crate::style;
use std::io::{self, Write};

use super::emit;

pub fn cmd_sequence(args: SequenceArgs) -> i32 {
    cmd_sequence_with_fs(args, default_fs(), &mut io::stdout())
}

pub fn cmd_sequence_with_fs(args: SequenceArgs, fs: &dyn FileSystem, stdout: &mut dyn Write) -> i32 {
    let input = match fs.read_to_string(&args.trace) {
        Ok(input) => input,
        Err(e) => {
            style::error(&format!("Failed to read {}: {}", style::path(&args.trace), e));
            return 1;
        }
    };

    let events = match parse_trace(&input) {
        Ok(events) => events,
        Err(e) => {
            style::error(&e.to_string());
            return 1;
        }
    };

    let graph = build_sequence(&events);
    let json = match serde_json::to_string_pretty(&graph.to_json()) {
        Ok(json) => json + "\n",
        Err(e) => {
            style::error(&format!("Failed to serialize sequence graph: {}", e));
            return 1;
        }
    };

    if let Err(e) = emit(&json, args.output.as_deref(), fs, stdout) {
        style::error(&format!("Failed to write output: {}", e));
        return 1;
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;
    use std::path::PathBuf;

    #[test]
    fn test_sequence_from_json_lines() {
        let fs = MockFs::new().with_file(
            "trace.jsonl",
            "{\"path\": [\"app\", \"init\"]}\n{\"path\": [\"db\"]}\n{\"path\": [\"app\", \"init\"]}\n",
        );
        let args = SequenceArgs {
            trace: PathBuf::from("trace.jsonl"),
            output: None,
        };
        let mut out = Vec::new();

        assert_eq!(cmd_sequence_with_fs(args, &fs, &mut out), 0);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["links"][1]["source"], "db");
        assert_eq!(value["links"][1]["target"], "app-init");
    }

    #[test]
    fn test_sequence_bad_line_fails() {
        let fs = MockFs::new().with_file("trace.jsonl", "{\"path\": [\"a\"]}\n{oops}\n");
        let args = SequenceArgs {
            trace: PathBuf::from("trace.jsonl"),
            output: Some(PathBuf::from("out.json")),
        };

        assert_eq!(cmd_sequence_with_fs(args, &fs, &mut Vec::new()), 1);
        assert!(!fs.exists(std::path::Path::new("out.json")));
    }
}
