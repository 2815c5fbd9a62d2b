// ============================================================================
// outrocut-cli/src/main.rs
// ============================================================================
//
// OUTROCUT CLI: Main Entry Point
//
// Parses the command line, installs logging, runs the trim command and maps
// the outcome to a process exit code:
//   0 success, 1 failure, 2 ffmpeg/ffprobe failure, 3 no outro detected,
//   4 no content before the outro

use clap::Parser;
use log::debug;
use outrocut_cli::logging::init_logging;
use outrocut_cli::{Cli, exit_code, run_trim, terminal};
use std::process;

fn main() {
    let cli = Cli::parse();

    match init_logging(cli.verbose, cli.log_dir.as_deref()) {
        Ok(Some(path)) => debug!("Writing log file {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = run_trim(&cli) {
        terminal::print_error(&e.to_string());
        process::exit(exit_code(&e));
    }
}
