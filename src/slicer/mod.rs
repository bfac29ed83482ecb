//! Batch slicing: probe the frame rate, turn table rows into intervals, and
//! cut one output file per valid interval.
//!
//! Everything runs in order on the calling thread. Bad rows are logged and
//! skipped; any other failure ends the run and is returned to the caller.
//! Slices written before a failure stay on disk.

mod interval;
mod output;

pub use interval::{interval_from_row, intervals_from_rows, load_intervals, Interval, RowError};
pub use output::slice_output_path;

use crate::table::{read_table, TableError};
use sceneslice_av::tools::FFMPEG;
use sceneslice_av::{ExtractRequest, FrameRate, MediaToolkit, StreamMode};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A failure that ends the run.
#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    #[error("failed to probe frame rate of {}: {source}", video.display())]
    Probe {
        video: PathBuf,
        #[source]
        source: sceneslice_av::Error,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to extract slice {index} to {}: {source}", output.display())]
    Extract {
        index: usize,
        output: PathBuf,
        #[source]
        source: sceneslice_av::Error,
    },

    #[error("failed to write transcoder diagnostics: {0}")]
    Diagnostics(#[source] std::io::Error),
}

/// How slices are written.
#[derive(Debug, Clone)]
pub struct SliceOptions {
    /// Stream copy, or re-encode with extra ffmpeg arguments.
    pub mode: StreamMode,
    /// Replace existing output files.
    pub overwrite: bool,
    /// Echo the transcoder's diagnostic output after each slice.
    pub verbose: bool,
    /// Plan the slices without running the transcoder.
    pub dry_run: bool,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            mode: StreamMode::Copy,
            overwrite: true,
            verbose: false,
            dry_run: false,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frame_rate: FrameRate,
    /// Non-blank rows in the table.
    pub rows: usize,
    /// Output files, in index order.
    pub outputs: Vec<PathBuf>,
}

impl RunSummary {
    /// Rows that did not produce a slice.
    pub fn skipped(&self) -> usize {
        self.rows - self.outputs.len()
    }
}

/// Drives a [`MediaToolkit`] over a table of timecodes.
pub struct Slicer<T> {
    toolkit: T,
    options: SliceOptions,
}

impl<T: MediaToolkit> Slicer<T> {
    pub fn new(toolkit: T, options: SliceOptions) -> Self {
        Self { toolkit, options }
    }

    /// Frame rate of the first video stream of `video`.
    pub fn probe_frame_rate(&self, video: &Path) -> Result<FrameRate, SliceError> {
        let frame_rate = self
            .toolkit
            .frame_rate(video)
            .map_err(|source| SliceError::Probe {
                video: video.to_path_buf(),
                source,
            })?;

        tracing::info!("Frame rate of {:?}: {} fps", video, frame_rate);
        Ok(frame_rate)
    }

    /// Cut one file per interval, in order, returning the output paths.
    ///
    /// Slice `i` is written to [`slice_output_path`]`(video, i)`. In verbose
    /// mode the transcoder's stderr is written to `diagnostics` after every
    /// invocation, including a failed one.
    pub fn emit_slices<W: Write>(
        &self,
        intervals: &[Interval],
        video: &Path,
        diagnostics: &mut W,
    ) -> Result<Vec<PathBuf>, SliceError> {
        let mut outputs = Vec::with_capacity(intervals.len());

        for (index, interval) in intervals.iter().enumerate() {
            let output = slice_output_path(video, index);
            let request = ExtractRequest {
                input: video.to_path_buf(),
                output: output.clone(),
                start: interval.start(),
                duration: interval.duration(),
                mode: self.options.mode.clone(),
                overwrite: self.options.overwrite,
            };

            if self.options.dry_run {
                tracing::info!(
                    "[DRY RUN] Would extract slice #{} [{:.6}s +{:.6}s] to {:?}",
                    index,
                    request.start,
                    request.duration,
                    output
                );
                outputs.push(output);
                continue;
            }

            tracing::info!("Processing slice #{} -> {:?}", index, output);

            let extract_error = |source| SliceError::Extract {
                index,
                output: output.clone(),
                source,
            };

            let result = self.toolkit.extract(&request).map_err(extract_error)?;

            if self.options.verbose {
                writeln!(diagnostics, "{}", result.stderr).map_err(SliceError::Diagnostics)?;
            }

            result.check(FFMPEG).map_err(extract_error)?;
            outputs.push(output);
        }

        Ok(outputs)
    }

    /// Probe `video`, read the table at `table`, and cut every valid row.
    pub fn run<W: Write>(
        &self,
        video: &Path,
        table: &Path,
        diagnostics: &mut W,
    ) -> Result<RunSummary, SliceError> {
        let frame_rate = self.probe_frame_rate(video)?;

        let rows = read_table(table)?;
        let intervals = intervals_from_rows(&rows, frame_rate);
        tracing::debug!("{} of {} rows are valid", intervals.len(), rows.len());

        let outputs = self.emit_slices(&intervals, video, diagnostics)?;

        let summary = RunSummary {
            frame_rate,
            rows: rows.len(),
            outputs,
        };
        tracing::info!(
            "Wrote {} slices from {} rows ({} skipped)",
            summary.outputs.len(),
            summary.rows,
            summary.skipped()
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneslice_av::{Error, ToolOutput};
    use std::cell::RefCell;

    /// Records requests; fails extraction at `fail_at` if set.
    struct FakeToolkit {
        fps: u32,
        fail_at: Option<usize>,
        requests: RefCell<Vec<ExtractRequest>>,
    }

    impl FakeToolkit {
        fn new(fps: u32) -> Self {
            Self {
                fps,
                fail_at: None,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl MediaToolkit for FakeToolkit {
        fn frame_rate(&self, _video: &Path) -> sceneslice_av::Result<FrameRate> {
            FrameRate::new(self.fps).ok_or_else(|| Error::parse_error("ffprobe", "0/0"))
        }

        fn extract(&self, request: &ExtractRequest) -> sceneslice_av::Result<ToolOutput> {
            let index = self.requests.borrow().len();
            self.requests.borrow_mut().push(request.clone());
            let success = self.fail_at != Some(index);
            Ok(ToolOutput {
                success,
                code: Some(if success { 0 } else { 1 }),
                stdout: String::new(),
                stderr: format!("ffmpeg log for slice {index}"),
            })
        }
    }

    fn intervals(fps: u32, pairs: &[(f64, f64)]) -> Vec<Interval> {
        let rate = FrameRate::new(fps).unwrap();
        pairs
            .iter()
            .map(|&(s, e)| Interval::new(s, e, rate).unwrap())
            .collect()
    }

    #[test]
    fn probe_failure_is_fatal() {
        let slicer = Slicer::new(FakeToolkit::new(0), SliceOptions::default());
        let err = slicer.probe_frame_rate(Path::new("v.mp4")).unwrap_err();
        assert!(matches!(err, SliceError::Probe { .. }));
    }

    #[test]
    fn emits_in_order_with_copy_mode() {
        let toolkit = FakeToolkit::new(25);
        let slicer = Slicer::new(&toolkit, SliceOptions::default());
        let mut diag = Vec::new();

        let outputs = slicer
            .emit_slices(&intervals(25, &[(0.0, 1.0), (5.0, 6.0)]), Path::new("/m/v.mp4"), &mut diag)
            .unwrap();

        assert_eq!(
            outputs,
            vec![PathBuf::from("/m/v_0000.mp4"), PathBuf::from("/m/v_0001.mp4")]
        );
        let requests = toolkit.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].start, 5.0);
        assert!(requests.iter().all(|r| r.mode.is_copy() && r.overwrite));
        assert!(diag.is_empty(), "quiet mode must not echo");
    }

    #[test]
    fn failure_stops_the_batch_after_echoing() {
        let mut toolkit = FakeToolkit::new(25);
        toolkit.fail_at = Some(1);
        let options = SliceOptions {
            verbose: true,
            ..Default::default()
        };
        let slicer = Slicer::new(&toolkit, options);
        let mut diag = Vec::new();

        let err = slicer
            .emit_slices(
                &intervals(25, &[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)]),
                Path::new("v.mp4"),
                &mut diag,
            )
            .unwrap_err();

        assert!(matches!(err, SliceError::Extract { index: 1, .. }));
        assert_eq!(toolkit.requests.borrow().len(), 2);

        let echoed = String::from_utf8(diag).unwrap();
        assert!(echoed.contains("slice 0"));
        assert!(echoed.contains("slice 1"));
    }

    #[test]
    fn dry_run_does_not_extract() {
        let toolkit = FakeToolkit::new(25);
        let options = SliceOptions {
            dry_run: true,
            ..Default::default()
        };
        let slicer = Slicer::new(&toolkit, options);

        let outputs = slicer
            .emit_slices(&intervals(25, &[(0.0, 1.0)]), Path::new("v.mkv"), &mut Vec::new())
            .unwrap();

        assert_eq!(outputs, vec![PathBuf::from("v_0000.mkv")]);
        assert!(toolkit.requests.borrow().is_empty());
    }

    #[test]
    fn summary_counts_skipped_rows() {
        let summary = RunSummary {
            frame_rate: FrameRate::new(24).unwrap(),
            rows: 5,
            outputs: vec![PathBuf::from("a_0000.mp4"), PathBuf::from("a_0001.mp4")],
        };
        assert_eq!(summary.skipped(), 3);
    }
}
