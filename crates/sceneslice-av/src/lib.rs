//! # sceneslice-av
//!
//! Thin wrappers around the ffprobe and ffmpeg command-line tools, just
//! enough to cut a video by timecode.
//!
//! This crate provides:
//! - Tool discovery ([`ToolPaths`], [`require_tool`])
//! - Frame rate probing ([`probe::probe_frame_rate`], [`FrameRate`])
//! - Slice extraction with stream copy or re-encoding ([`actions::extract_slice`])
//! - The [`MediaToolkit`] seam used by callers to swap in a fake backend
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use sceneslice_av::{FfmpegToolkit, MediaToolkit, ToolPaths};
//! use std::path::Path;
//!
//! let toolkit = FfmpegToolkit::new(ToolPaths::resolve(None, None)?);
//! let rate = toolkit.frame_rate(Path::new("/path/to/video.mp4"))?;
//! println!("{} fps", rate);
//! # Ok::<(), sceneslice_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod probe;
pub mod toolkit;
pub mod tools;

// Re-exports
pub use actions::{ExtractRequest, StreamMode, ToolOutput};
pub use error::{Error, Result};
pub use probe::FrameRate;
pub use toolkit::{FfmpegToolkit, MediaToolkit};
pub use tools::{require_tool, ToolPaths};
