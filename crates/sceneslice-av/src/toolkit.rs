//! The two external operations slicing depends on.

use crate::actions::{extract_slice, ExtractRequest, ToolOutput};
use crate::probe::{probe_frame_rate, FrameRate};
use crate::tools::ToolPaths;
use crate::Result;
use std::path::Path;

/// Probing and extraction backend.
///
/// [`FfmpegToolkit`] is the real implementation; tests substitute a fake
/// that records requests instead of spawning processes.
pub trait MediaToolkit {
    /// Frame rate of the first video stream of `video`.
    fn frame_rate(&self, video: &Path) -> Result<FrameRate>;

    /// Run one extraction. Returns the captured output even when the tool
    /// exits unsuccessfully; only a failure to run at all is an error.
    fn extract(&self, request: &ExtractRequest) -> Result<ToolOutput>;
}

impl<T: MediaToolkit + ?Sized> MediaToolkit for &T {
    fn frame_rate(&self, video: &Path) -> Result<FrameRate> {
        (**self).frame_rate(video)
    }

    fn extract(&self, request: &ExtractRequest) -> Result<ToolOutput> {
        (**self).extract(request)
    }
}

/// [`MediaToolkit`] backed by the ffprobe and ffmpeg command-line tools.
#[derive(Debug, Clone, Default)]
pub struct FfmpegToolkit {
    paths: ToolPaths,
}

impl FfmpegToolkit {
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }
}

impl MediaToolkit for FfmpegToolkit {
    fn frame_rate(&self, video: &Path) -> Result<FrameRate> {
        probe_frame_rate(&self.paths.ffprobe, video)
    }

    fn extract(&self, request: &ExtractRequest) -> Result<ToolOutput> {
        extract_slice(&self.paths.ffmpeg, request)
    }
}
