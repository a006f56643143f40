use bundlegraph::cli::{Cli, Command};
use bundlegraph::{cmd_init, cmd_render, cmd_sequence, cmd_serve};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Render(args) => cmd_render(args),
        Command::Serve(args) => cmd_serve(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Init(args) => cmd_init(args),
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "bundlegraph=debug" } else { "bundlegraph=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
