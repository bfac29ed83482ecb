use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sceneslice")]
#[command(author, version, about = "Cut a video into slices from a table of in/out timecodes")]
pub struct Cli {
    /// Input video file
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Comma-separated table of start,end timecodes (HH:MM:SS:FF), no header
    #[arg(short = 'c', long = "timecodes", value_name = "PATH")]
    pub timecodes: PathBuf,

    /// Echo ffmpeg output after each slice and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra ffmpeg arguments; slices are re-encoded instead of stream-copied
    #[arg(long = "args", value_name = "ARGS", allow_hyphen_values = true)]
    pub extra_args: Option<String>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the slices that would be cut without running ffmpeg
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse `args` (including the program name), accepting `-args` as an
    /// alias of `--args`.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(args.into_iter().map(Into::into).map(normalize_arg))
    }

    /// Extra ffmpeg arguments split on whitespace, if given.
    pub fn extra_args(&self) -> Option<Vec<String>> {
        self.extra_args
            .as_deref()
            .map(|s| s.split_whitespace().map(String::from).collect())
    }
}

fn normalize_arg(arg: OsString) -> OsString {
    match arg.to_str() {
        Some("-args") => "--args".into(),
        Some(s) if s.starts_with("-args=") => format!("-{s}").into(),
        _ => arg,
    }
}
