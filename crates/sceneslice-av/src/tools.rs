//! External tool detection.
//!
//! Slicing needs two binaries: `ffprobe` to read the frame rate and `ffmpeg`
//! to cut. Both are resolved once up front so a missing tool fails the run
//! before any table row is touched.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the probing tool.
pub const FFPROBE: &str = "ffprobe";

/// Name of the transcoding tool.
pub const FFMPEG: &str = "ffmpeg";

/// Require that a tool is available on `PATH`, returning its path.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// A configured path that does not exist is ignored.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Configured {} path {:?} does not exist, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}

/// Resolved locations of ffprobe and ffmpeg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub ffprobe: PathBuf,
    pub ffmpeg: PathBuf,
}

impl ToolPaths {
    /// Resolve both tools, honouring optional overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] for the first tool that cannot be found.
    pub fn resolve(ffprobe: Option<&Path>, ffmpeg: Option<&Path>) -> Result<Self> {
        Ok(Self {
            ffprobe: get_tool_path(FFPROBE, ffprobe)?,
            ffmpeg: get_tool_path(FFMPEG, ffmpeg)?,
        })
    }
}

impl Default for ToolPaths {
    /// Bare tool names, left for the OS to look up at spawn time.
    fn default() -> Self {
        Self {
            ffprobe: PathBuf::from(FFPROBE),
            ffmpeg: PathBuf::from(FFMPEG),
        }
    }
}
