//! Turning table rows into validated intervals.

use crate::table::{read_table, TableError, TableRow};
use crate::timecode::{self, TimecodeError};
use sceneslice_av::FrameRate;
use std::path::Path;

/// A validated cut: where it starts and how long it runs, in seconds.
///
/// The duration includes the frame at the out point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    duration: f64,
}

impl Interval {
    /// Build the interval from `start` to `end` inclusive of the end frame.
    ///
    /// Returns `None` unless `start` is strictly before `end`.
    pub fn new(start: f64, end: f64, frame_rate: FrameRate) -> Option<Self> {
        if start >= end {
            return None;
        }

        Some(Self {
            start,
            duration: end - start + frame_rate.frame_duration(),
        })
    }

    /// Seek offset in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("{}", join_errors(.0))]
    Timecodes(Vec<TimecodeError>),

    #[error("start cannot be after end: {start}s >= {end}s")]
    StartNotBeforeEnd { start: f64, end: f64 },
}

fn join_errors(errors: &[TimecodeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse one `start,end` pair into an [`Interval`].
///
/// Both timecodes are always parsed so that errors in each are reported
/// together.
pub fn interval_from_row(start: &str, end: &str, frame_rate: FrameRate) -> Result<Interval, RowError> {
    let (start, end) = match (
        timecode::parse(start, frame_rate),
        timecode::parse(end, frame_rate),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        (start, end) => {
            let errors = [start.err(), end.err()].into_iter().flatten().collect();
            return Err(RowError::Timecodes(errors));
        }
    };

    Interval::new(start, end, frame_rate).ok_or(RowError::StartNotBeforeEnd { start, end })
}

/// Convert rows to intervals, logging and dropping invalid rows.
///
/// The result keeps the order of the valid rows.
pub fn intervals_from_rows(rows: &[TableRow], frame_rate: FrameRate) -> Vec<Interval> {
    let mut intervals = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match interval_from_row(&row.start, &row.end, frame_rate) {
            Ok(interval) => intervals.push(interval),
            Err(e) => {
                tracing::error!(
                    "Failed to parse timecodes on row {} (line {}) {:?}: {}",
                    index,
                    row.line,
                    row.raw(),
                    e
                );
                tracing::info!("Skipping row {} {:?}", index, row.raw());
            }
        }
    }

    intervals
}

/// Read the table at `path` and convert it to intervals at `frame_rate`.
///
/// # Errors
///
/// Only reading the table can fail; invalid rows are skipped.
pub fn load_intervals(path: &Path, frame_rate: FrameRate) -> Result<Vec<Interval>, TableError> {
    let rows = read_table(path)?;
    Ok(intervals_from_rows(&rows, frame_rate))
}
