use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Path of slice `index` cut from `video`: `<stem>_<index:04>.<ext>` next to
/// the source.
///
/// The index is zero-padded to four digits so the first 10000 slices sort
/// the same lexically and numerically.
pub fn slice_output_path(video: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(video.file_stem().unwrap_or_default());
    name.push(format!("_{:04}", index));

    if let Some(ext) = video.extension() {
        name.push(".");
        name.push(ext);
    }

    video.with_file_name(name)
}
