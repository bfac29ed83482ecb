mod cli;

use sceneslice::config;
use sceneslice::slicer::{SliceOptions, Slicer};
use sceneslice_av::{FfmpegToolkit, StreamMode, ToolPaths};

use anyhow::Result;
use cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 rather than clap's default of 2.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "sceneslice=debug,sceneslice_av=debug".to_string()
        } else {
            "sceneslice=info,sceneslice_av=info".to_string()
        }
    });

    // Logs go to stderr; stdout carries the echoed ffmpeg output.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    slice_file(&cli)
}

fn slice_file(cli: &Cli) -> Result<()> {
    let config = config::load_config_or_default(cli.config.as_deref())?;

    if !cli.input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", cli.input);
    }

    let paths = ToolPaths::resolve(
        config.tools.ffprobe_path.as_deref(),
        config.tools.ffmpeg_path.as_deref(),
    )?;
    tracing::debug!("Using ffprobe {:?}, ffmpeg {:?}", paths.ffprobe, paths.ffmpeg);

    let extra_args = cli
        .extra_args()
        .unwrap_or_else(|| config.slicing.extra_args.clone());
    let mode = StreamMode::from_extra_args(extra_args);
    if let StreamMode::Reencode(ref args) = mode {
        tracing::info!("Re-encoding slices with extra arguments: {}", args.join(" "));
    }

    let options = SliceOptions {
        mode,
        overwrite: config.slicing.overwrite,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };
    let slicer = Slicer::new(FfmpegToolkit::new(paths), options);

    let summary = slicer.run(&cli.input, &cli.timecodes, &mut std::io::stdout().lock())?;

    if cli.dry_run {
        println!("[DRY RUN] Would write {} slices:", summary.outputs.len());
        for output in &summary.outputs {
            println!("  {}", output.display());
        }
    }

    Ok(())
}
