use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub slicing: SlicingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlicingConfig {
    /// Replace existing slice files (ffmpeg `-y`)
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// Extra ffmpeg arguments used when none are given on the command line.
    /// Any extra arguments switch slicing from stream copy to re-encoding.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for SlicingConfig {
    fn default() -> Self {
        Self {
            overwrite: default_overwrite(),
            extra_args: Vec::new(),
        }
    }
}

fn default_overwrite() -> bool {
    true
}
