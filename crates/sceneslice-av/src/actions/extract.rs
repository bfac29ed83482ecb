//! Slice extraction with ffmpeg.

use crate::tools::FFMPEG;
use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// How the streams of a slice are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Repackage audio and video without re-encoding.
    #[default]
    Copy,
    /// Re-encode, passing these arguments to ffmpeg in place of the copy
    /// directive.
    Reencode(Vec<String>),
}

impl StreamMode {
    /// `Copy` when `extra_args` is empty, `Reencode` otherwise.
    pub fn from_extra_args(extra_args: Vec<String>) -> Self {
        if extra_args.is_empty() {
            Self::Copy
        } else {
            Self::Reencode(extra_args)
        }
    }

    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Copy)
    }
}

/// One ffmpeg invocation cutting `duration` seconds starting at `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Seek offset in seconds.
    pub start: f64,
    /// Length in seconds.
    pub duration: f64,
    pub mode: StreamMode,
    /// Pass `-y` so an existing output file is replaced.
    pub overwrite: bool,
}

impl ExtractRequest {
    /// Build the ffmpeg argument list for this request.
    ///
    /// The seek follows `-i`, making it an output seek.
    pub fn ffmpeg_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if self.overwrite {
            args.push("-y".into());
        }
        args.push("-i".into());
        args.push(self.input.clone().into_os_string());
        args.push("-ss".into());
        args.push(format!("{:.6}", self.start).into());
        args.push("-t".into());
        args.push(format!("{:.6}", self.duration).into());

        match &self.mode {
            StreamMode::Copy => {
                args.extend(["-c:v", "copy", "-c:a", "copy"].map(OsString::from));
            }
            StreamMode::Reencode(extra) => {
                args.extend(extra.iter().map(OsString::from));
            }
        }

        args.push(self.output.clone().into_os_string());
        args
    }
}

/// Output captured from a tool run, successful or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

impl ToolOutput {
    /// Convert an unsuccessful run into [`Error::ToolFailed`].
    pub fn check(self, tool: &str) -> Result<Self> {
        if self.success {
            return Ok(self);
        }

        let status = match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let last_line = self.stderr.lines().last().unwrap_or_default().trim();
        let message = if last_line.is_empty() {
            status
        } else {
            format!("{}: {}", status, last_line)
        };
        Err(Error::tool_failed(tool, message))
    }
}

/// Run ffmpeg for one slice and capture its output.
///
/// A non-zero exit is reported through [`ToolOutput::success`], not as an
/// error, so callers can still show ffmpeg's diagnostics.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] or [`Error::Io`] if ffmpeg cannot be spawned.
pub fn extract_slice(ffmpeg: &Path, request: &ExtractRequest) -> Result<ToolOutput> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Extracting {:?} [{:.6}s +{:.6}s] -> {:?}",
        request.input,
        request.start,
        request.duration,
        request.output
    );

    let output = Command::new(ffmpeg)
        .args(request.ffmpeg_args())
        .output()
        .map_err(|e| Error::spawn(FFMPEG, e))?;

    Ok(ToolOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
