//! Shared helpers for integration tests.
//!
//! [`FakeToolkit`] stands in for ffprobe/ffmpeg in library-level tests.
//! [`FakeTools`] writes shell-script stand-ins plus a config file pointing at
//! them, for driving the real binary.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use sceneslice_av::{Error, ExtractRequest, FrameRate, MediaToolkit, Result, ToolOutput};

/// In-memory [`MediaToolkit`] that records every extraction request.
pub struct FakeToolkit {
    pub fps: u32,
    /// Index of the extraction that should exit unsuccessfully.
    pub fail_at: Option<usize>,
    pub requests: RefCell<Vec<ExtractRequest>>,
}

impl FakeToolkit {
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            fail_at: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_at(fps: u32, index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new(fps)
        }
    }

    pub fn outputs(&self) -> Vec<PathBuf> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.output.clone())
            .collect()
    }
}

impl MediaToolkit for FakeToolkit {
    fn frame_rate(&self, _video: &Path) -> Result<FrameRate> {
        FrameRate::new(self.fps)
            .ok_or_else(|| Error::parse_error("ffprobe", format!("invalid frame rate {}", self.fps)))
    }

    fn extract(&self, request: &ExtractRequest) -> Result<ToolOutput> {
        let index = self.requests.borrow().len();
        self.requests.borrow_mut().push(request.clone());

        let success = self.fail_at != Some(index);
        Ok(ToolOutput {
            success,
            code: Some(if success { 0 } else { 1 }),
            stdout: String::new(),
            stderr: format!("frame= 42 slice {index}"),
        })
    }
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Executable ffprobe/ffmpeg stand-ins and a config that selects them.
#[cfg(unix)]
pub struct FakeTools {
    pub config: PathBuf,
}

#[cfg(unix)]
impl FakeTools {
    /// `rate` is what ffprobe prints; ffmpeg exits with `ffmpeg_exit` after
    /// creating its output file (the last argument) on success.
    pub fn install(dir: &Path, rate: &str, ffmpeg_exit: i32) -> Self {
        let ffprobe = write_script(dir, "fake-ffprobe", &format!("echo '{rate}'\n"));
        let ffmpeg = write_script(
            dir,
            "fake-ffmpeg",
            &format!(
                "for last; do :; done\n\
                 echo \"fake ffmpeg $*\" >&2\n\
                 if [ {ffmpeg_exit} -eq 0 ]; then : > \"$last\"; fi\n\
                 exit {ffmpeg_exit}\n"
            ),
        );

        let config = write_file(
            dir,
            "sceneslice.toml",
            &format!(
                "[tools]\nffprobe_path = {:?}\nffmpeg_path = {:?}\n",
                ffprobe.display().to_string(),
                ffmpeg.display().to_string()
            ),
        );

        Self { config }
    }
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_file(dir, name, &format!("#!/bin/sh\n{body}"));
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
