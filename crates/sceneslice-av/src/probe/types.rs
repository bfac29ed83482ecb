//! Types produced by probing.

use std::fmt;
use std::num::NonZeroU32;

/// Integer frames-per-second of a video stream.
///
/// Fractional rates are truncated when probed (29.97 becomes 29); a zero
/// rate cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRate(NonZeroU32);

impl FrameRate {
    /// Create a frame rate, returning `None` for zero.
    pub fn new(fps: u32) -> Option<Self> {
        NonZeroU32::new(fps).map(Self)
    }

    /// Frames per second.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Length of a single frame in seconds.
    pub fn frame_duration(self) -> f64 {
        1.0 / f64::from(self.get())
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
