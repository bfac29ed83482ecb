//! `HH:MM:SS:FF` timecode parsing.
//!
//! A timecode is four `:`-separated numbers. The last field counts frames
//! within the current second, so converting to seconds needs the frame rate
//! of the video being cut.
//!
//! Every problem with a timecode is reported, not just the first one, so a
//! skipped table row can be fixed in one go.

use sceneslice_av::FrameRate;
use std::fmt;

/// Separator between timecode fields.
pub const SEPARATOR: char = ':';

const FIELD_COUNT: usize = 4;

/// A position within a timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
    Frames,
}

impl Field {
    const ALL: [Field; FIELD_COUNT] = [Field::Hours, Field::Minutes, Field::Seconds, Field::Frames];

    pub fn name(self) -> &'static str {
        match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
            Field::Frames => "frames",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a violation is about the shape of the text or about a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Format,
    Range,
}

/// One constraint a timecode failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("expected 4 ':'-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not a number: {raw:?}")]
    NotNumeric { field: Field, raw: String },

    #[error("{field} cannot be negative: {value}")]
    Negative { field: Field, value: f64 },

    #[error("frames must be below the frame rate of {frame_rate}: {value}")]
    FrameOutOfRange { value: f64, frame_rate: u32 },

    #[error("total offset is too large to represent in seconds")]
    TooLarge,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::FieldCount { .. } | Violation::NotNumeric { .. } => ViolationKind::Format,
            Violation::Negative { .. }
            | Violation::FrameOutOfRange { .. }
            | Violation::TooLarge => ViolationKind::Range,
        }
    }
}

/// All the ways one timecode string is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid timecode {text:?}: {}", join_violations(.violations))]
pub struct TimecodeError {
    text: String,
    violations: Vec<Violation>,
}

impl TimecodeError {
    fn new(text: &str, violations: Vec<Violation>) -> Self {
        Self {
            text: text.to_string(),
            violations,
        }
    }

    /// The timecode text as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every violated constraint, in field order. Never empty.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True if any violation is a format problem.
    pub fn is_format_error(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind() == ViolationKind::Format)
    }

    /// True if any violation is an out-of-range value.
    pub fn is_range_error(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind() == ViolationKind::Range)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert `text` to an offset in seconds at `frame_rate`.
///
/// Each field may be any finite non-negative real number, so `00:01.5:00:00`
/// is 90 seconds. The frame field must lie in `[0, frame_rate)`.
///
/// # Errors
///
/// Returns a [`TimecodeError`] listing every violated constraint. A wrong
/// field count is reported on its own since the fields cannot be identified.
pub fn parse(text: &str, frame_rate: FrameRate) -> Result<f64, TimecodeError> {
    let raw_fields: Vec<&str> = text.split(SEPARATOR).collect();
    if raw_fields.len() != FIELD_COUNT {
        return Err(TimecodeError::new(
            text,
            vec![Violation::FieldCount {
                found: raw_fields.len(),
            }],
        ));
    }

    let mut violations = Vec::new();
    let mut values = [0.0_f64; FIELD_COUNT];

    for ((field, raw), value) in Field::ALL.into_iter().zip(&raw_fields).zip(&mut values) {
        let Some(parsed) = parse_field(raw) else {
            violations.push(Violation::NotNumeric {
                field,
                raw: raw.to_string(),
            });
            continue;
        };

        if parsed < 0.0 {
            violations.push(Violation::Negative {
                field,
                value: parsed,
            });
        }
        *value = parsed;
    }

    let [hours, minutes, seconds, frames] = values;
    let fps = f64::from(frame_rate.get());

    if frames >= fps {
        violations.push(Violation::FrameOutOfRange {
            value: frames,
            frame_rate: frame_rate.get(),
        });
    }

    if !violations.is_empty() {
        return Err(TimecodeError::new(text, violations));
    }

    // Finite fields can still overflow once weighted.
    let total = hours * 3600.0 + minutes * 60.0 + seconds + frames / fps;
    if !total.is_finite() {
        return Err(TimecodeError::new(text, vec![Violation::TooLarge]));
    }

    Ok(total)
}

fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
