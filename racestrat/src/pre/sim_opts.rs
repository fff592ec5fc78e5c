use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "racestrat",
    about = "A lap-discrete race strategy simulator written in Rust"
)]
pub struct SimOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing (car summary and per-lap events)
    #[clap(short, long)]
    pub debug: bool,

    /// Run the race loop on a worker thread and present per-lap snapshots live
    #[clap(short, long)]
    pub live: bool,

    /// Skip the pre-race pit stop plan preview
    #[clap(long)]
    pub skip_plan: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the race scenario file (OPTIONAL: if not set, a default setup is used)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set path to a directory with catalog asset files (engines.csv, tyres.csv, ...)
    #[clap(short, long)]
    pub assets_dir: Option<PathBuf>,

    /// Set the wall clock pause per simulated lap in live mode (milliseconds)
    #[clap(short = 't', long, default_value = "200")]
    pub lap_time_ms: u64,
}
