//! Sceneslice - cut a video into slices from a table of timecodes
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod slicer;
pub mod table;
pub mod timecode;
