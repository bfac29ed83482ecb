//! Frame rate probing.
//!
//! Only the first video stream's `r_frame_rate` is read; everything else
//! ffprobe can report is irrelevant to cutting by timecode.

mod ffprobe;
mod types;

pub use ffprobe::{parse_frame_rate, probe_frame_rate};
pub use types::FrameRate;
