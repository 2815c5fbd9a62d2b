// outrocut-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use outrocut_core::config::{
    CoreConfigBuilder, DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_FFMPEG_PATH, DEFAULT_FFPROBE_PATH,
    DEFAULT_INITIAL_JUMP, DEFAULT_OUTPUT_FILENAME, DEFAULT_OUTRO_FRAME_PADDING,
};
use outrocut_core::{CoreConfig, CoreResult};
use std::path::PathBuf;
use std::time::Duration;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Outrocut: remove the branded outro from short-form videos",
    long_about = "Finds where a short-form video's end-card outro begins by sampling frame corners \
                  with ffmpeg, then stream-copies everything before it into a new file."
)]
pub struct Cli {
    /// Video to trim
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where the trimmed video is written
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Frames cut before the detected outro boundary
    #[arg(long, value_name = "FRAMES", default_value_t = DEFAULT_OUTRO_FRAME_PADDING)]
    pub padding: u64,

    /// First backward step of the outro search
    #[arg(
        long,
        value_name = "FRAMES",
        default_value_t = DEFAULT_INITIAL_JUMP,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub initial_jump: u64,

    /// Timeout for each ffmpeg/ffprobe call (0 disables)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_COMMAND_TIMEOUT_SECS)]
    pub timeout: u64,

    /// ffmpeg binary to use
    #[arg(long, value_name = "PATH", env = "OUTROCUT_FFMPEG", default_value = DEFAULT_FFMPEG_PATH)]
    pub ffmpeg: PathBuf,

    /// ffprobe binary to use
    #[arg(long, value_name = "PATH", env = "OUTROCUT_FFPROBE", default_value = DEFAULT_FFPROBE_PATH)]
    pub ffprobe: PathBuf,

    /// Directory for pixel sample files (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Report where the outro starts without writing OUTPUT
    #[arg(long)]
    pub detect_only: bool,

    /// Show probe results and search progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write a log file to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Builds and validates the core configuration from the parsed flags.
    pub fn to_core_config(&self) -> CoreResult<CoreConfig> {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        let mut builder = CoreConfigBuilder::new()
            .ffmpeg_path(&self.ffmpeg)
            .ffprobe_path(&self.ffprobe)
            .outro_frame_padding(self.padding)
            .initial_jump(self.initial_jump)
            .command_timeout(timeout);
        if let Some(dir) = &self.temp_dir {
            builder = builder.temp_dir(dir);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["outrocut", "clip.mp4"]);
        assert_eq!(cli.input, PathBuf::from("clip.mp4"));
        assert_eq!(cli.output, PathBuf::from("output.mp4"));
        assert_eq!(cli.padding, 8);
        assert_eq!(cli.initial_jump, 60);
        assert_eq!(cli.timeout, 120);
        assert!(!cli.detect_only);
        assert!(!cli.verbose);
        assert!(cli.log_dir.is_none());

        let config = cli.to_core_config().unwrap();
        assert_eq!(config.outro_frame_padding, 8);
        assert_eq!(config.command_timeout, Some(Duration::from_secs(120)));
        assert!(config.temp_dir.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "outrocut",
            "in.mp4",
            "out/trimmed.mp4",
            "--padding", "4",
            "--initial-jump", "30",
            "--timeout", "0",
            "--ffmpeg", "/opt/bin/ffmpeg",
            "--ffprobe", "/opt/bin/ffprobe",
            "--temp-dir", "/scratch",
            "--detect-only",
            "-v",
            "--log-dir", "logs",
        ]);
        assert_eq!(cli.output, PathBuf::from("out/trimmed.mp4"));
        assert!(cli.detect_only);
        assert!(cli.verbose);
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));

        let config = cli.to_core_config().unwrap();
        assert_eq!(config.outro_frame_padding, 4);
        assert_eq!(config.initial_jump, 30);
        assert_eq!(config.command_timeout, None);
        assert_eq!(config.ffmpeg_path, PathBuf::from("/opt/bin/ffmpeg"));
        assert_eq!(config.ffprobe_path, PathBuf::from("/opt/bin/ffprobe"));
        assert_eq!(config.temp_dir, Some(PathBuf::from("/scratch")));
    }

    #[test]
    fn test_zero_initial_jump_rejected() {
        assert!(Cli::try_parse_from(["outrocut", "in.mp4", "--initial-jump", "0"]).is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["outrocut"]).is_err());
    }
}
