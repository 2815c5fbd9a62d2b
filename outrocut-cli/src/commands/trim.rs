//! Implementation of the trim command.
//!
//! Validates the input, checks for ffmpeg/ffprobe, then runs detection (and
//! trimming unless `--detect-only`) through outrocut-core while a spinner runs.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use outrocut_core::external::check_dependencies;
use outrocut_core::utils::get_file_size;
use outrocut_core::{CoreError, FfmpegOutroRemover, OutroDetection, format_bytes};

use log::debug;

/// Runs outro removal as described by the parsed command line.
pub fn run_trim(cli: &Cli) -> CliResult<()> {
    if !cli.input.is_file() {
        return Err(CoreError::PathError(format!(
            "File not found: {}",
            cli.input.display()
        )));
    }

    let config = cli.to_core_config()?;
    check_dependencies(&config)?;
    debug!("Using ffmpeg at {}, ffprobe at {}", config.ffmpeg_path.display(), config.ffprobe_path.display());
    let remover = FfmpegOutroRemover::from_config(config)?;

    terminal::print_section("Outro removal");
    terminal::print_status("Input", &cli.input.display().to_string(), false);

    if cli.detect_only {
        let spinner = terminal::start_spinner("Searching for the outro");
        let detection = remover.detect(&cli.input);
        spinner.finish_and_clear();

        print_detection(&detection?);
        terminal::print_success("Detection complete, no output written");
        return Ok(());
    }

    terminal::print_status("Output", &cli.output.display().to_string(), false);

    let spinner = terminal::start_spinner("Searching for the outro");
    let report = remover.remove_outro(&cli.input, &cli.output);
    spinner.finish_and_clear();
    let report = report?;

    print_detection(&report.detection);
    let size = get_file_size(&report.output)
        .cli_with_context(|| format!("Failed to read trimmed output {}", report.output.display()))?;
    terminal::print_status("Output size", &format_bytes(size), false);
    terminal::print_status("Elapsed", &format!("{:.1?}", report.elapsed), false);
    terminal::print_success("Outro removed");

    println!("Finished. Output: {}", report.output.display());
    Ok(())
}

fn print_detection(detection: &OutroDetection) {
    let props = &detection.properties;
    terminal::print_status(
        "Video",
        &format!(
            "{}x{}, {} frames at {:.2} fps",
            props.width, props.height, props.frame_count, detection.fps
        ),
        false,
    );
    terminal::print_status("Outro start", &format!("frame {}", detection.boundary()), true);
    terminal::print_status(
        "Cut at",
        &format!("frame {} ({})", detection.end_frame, detection.end_timestamp),
        true,
    );
    terminal::print_status(
        "Samples",
        &format!(
            "{} frames classified in {} rounds",
            detection.search.classifications, detection.search.rounds
        ),
        false,
    );
}
