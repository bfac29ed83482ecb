//! Integration tests for configuration loading.

mod common;

use common::write_file;
use sceneslice::config::{load_config, load_config_or_default, Config};
use std::path::PathBuf;
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_config_copies_and_overwrites() {
    let config = Config::default();
    assert!(config.slicing.overwrite);
    assert!(config.slicing.extra_args.is_empty());
    assert!(config.tools.ffmpeg_path.is_none());
    assert!(config.tools.ffprobe_path.is_none());
}

#[test]
fn empty_file_is_valid() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "empty.toml", "");

    let config = load_config(&path).unwrap();
    assert!(config.slicing.overwrite);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[test]
fn tools_and_slicing_sections() {
    let temp = tempdir().unwrap();
    let path = write_file(
        temp.path(),
        "sceneslice.toml",
        r#"
[tools]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
ffprobe_path = "/opt/ffmpeg/bin/ffprobe"

[slicing]
overwrite = false
extra_args = ["-c:v", "libx264", "-crf", "18"]
"#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(
        config.tools.ffmpeg_path,
        Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
    );
    assert_eq!(
        config.tools.ffprobe_path,
        Some(PathBuf::from("/opt/ffmpeg/bin/ffprobe"))
    );
    assert!(!config.slicing.overwrite);
    assert_eq!(config.slicing.extra_args, ["-c:v", "libx264", "-crf", "18"]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_extra_arg_is_rejected() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "bad.toml", "[slicing]\nextra_args = [\"\"]\n");

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("empty arguments"));
}

#[test]
fn malformed_toml_is_rejected() {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "bad.toml", "[slicing\noverwrite = yes\n");

    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let result = load_config_or_default(Some(std::path::Path::new(
        "/nonexistent/sceneslice.toml",
    )));
    assert!(result.is_err());
}
