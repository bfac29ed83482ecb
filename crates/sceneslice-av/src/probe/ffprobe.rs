//! FFprobe-based frame rate probing.

use super::types::FrameRate;
use crate::tools::FFPROBE;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Probe the frame rate of the first video stream of `path`.
///
/// `ffprobe` is the executable to run (a bare name or a resolved path).
///
/// # Errors
///
/// - [`Error::FileNotFound`] if `path` does not exist.
/// - [`Error::ToolNotFound`] if the ffprobe binary cannot be spawned.
/// - [`Error::ToolFailed`] if ffprobe exits unsuccessfully.
/// - [`Error::ParseError`] if the reported rate is not a positive integer
///   or `N/D` rational.
pub fn probe_frame_rate(ffprobe: &Path, path: &Path) -> Result<FrameRate> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=r_frame_rate",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()
        .map_err(|e| Error::spawn(FFPROBE, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed(FFPROBE, stderr.trim().to_string()));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error(FFPROBE, format!("Invalid UTF-8: {}", e)))?;

    // One line per selected stream.
    let rate_str = stdout.lines().next().unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::debug!("ffprobe reported r_frame_rate {:?} for {:?}", rate_str, path);

    parse_frame_rate(rate_str).ok_or_else(|| {
        Error::parse_error(
            FFPROBE,
            format!(
                "invalid frame rate {:?} for {}; the file might be broken",
                rate_str.trim(),
                path.display()
            ),
        )
    })
}

/// Parse an ffprobe rate string (`N/D` or a bare integer) into a
/// [`FrameRate`], truncating fractional rates toward zero.
///
/// Returns `None` for zero, negative, or non-integer input and for a zero
/// denominator.
pub fn parse_frame_rate(rate_str: &str) -> Option<FrameRate> {
    let rate_str = rate_str.trim();

    let fps = match rate_str.split_once('/') {
        Some((num, den)) => {
            let num: u64 = num.trim().parse().ok()?;
            let den: u64 = den.trim().parse().ok()?;
            if den == 0 {
                return None;
            }
            num / den
        }
        None => rate_str.parse().ok()?,
    };

    FrameRate::new(u32::try_from(fps).ok()?)
}
