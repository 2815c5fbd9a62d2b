//! FFmpeg command builder utilities
//!
//! Every ffmpeg invocation made by outrocut starts from this builder so the
//! banner, stdin handling, log level and overwrite behavior are consistent.

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::Path;
use std::process::Command;

/// Only errors reach stderr, which becomes the message of a failed command.
const LOG_LEVEL: &str = "error";

/// Builder for creating `FFmpeg` commands with common configurations
pub struct FfmpegCommandBuilder {
    cmd: FfmpegCommand,
}

impl FfmpegCommandBuilder {
    /// Creates a builder for the ffmpeg binary at `ffmpeg_path`
    #[must_use]
    pub fn new(ffmpeg_path: &Path) -> Self {
        // `FfmpegCommand::new_with_path` presets `-loglevel level+info` for its
        // event parser. Output here is read by `run_command`, so start from a
        // bare `Command` and set the level once.
        Self {
            cmd: FfmpegCommand::from(Command::new(ffmpeg_path)),
        }
    }

    /// Builds the `FFmpeg` command with the shared flags applied
    #[must_use]
    pub fn build(mut self) -> FfmpegCommand {
        self.cmd.hide_banner();
        // Never let ffmpeg wait on the terminal for interactive commands.
        self.cmd.arg("-nostdin");
        self.cmd.args(["-loglevel", LOG_LEVEL]);
        self.cmd.overwrite();
        self.cmd
    }
}

/// Collects the arguments of a built command as strings.
#[must_use]
pub fn command_args(cmd: &FfmpegCommand) -> Vec<String> {
    cmd.get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cmd = FfmpegCommandBuilder::new(Path::new("ffmpeg")).build();
        let args = command_args(&cmd);
        assert_eq!(args, ["-hide_banner", "-nostdin", "-loglevel", "error", "-y"]);
    }

    #[test]
    fn test_single_log_level() {
        let mut cmd = FfmpegCommandBuilder::new(Path::new("/opt/ffmpeg")).build();
        cmd.input("in.mp4").output("out.mp4");
        let args = command_args(&cmd);
        assert_eq!(args.iter().filter(|a| *a == "-loglevel").count(), 1);
        assert!(!args.iter().any(|a| a.starts_with("level+")));
        assert_eq!(cmd.as_inner().get_program(), "/opt/ffmpeg");
    }
}
