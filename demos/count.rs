//! Counts a page-touching workload with a counter group and prints the values.
//!
//! ```sh
//! cargo run --features serde --example count -- --pages 4096 --exclude-kernel
//! ```

use std::fs::{self, File};
use std::hint::black_box;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perf_counter_group::catalog::Catalog;
use perf_counter_group::config::Opts;
use perf_counter_group::count::group::CounterGroup;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with `[[counter]]` tables, defaults to the dTLB counters
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Write values to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of pages to touch
    #[arg(short, long, default_value_t = 1024)]
    pages: usize,

    /// Count user space only
    #[arg(long)]
    exclude_kernel: bool,

    /// Log level
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::dtlb());
    };
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
    toml::from_str(&text).with_context(|| format!("failed to parse {:?}", path))
}

fn touch_pages(pages: usize) -> usize {
    let mut buf = vec![0_u8; pages * 4096];
    for i in (0..buf.len()).step_by(4096) {
        buf[i] = 1;
    }
    black_box(&buf).iter().filter(|it| **it > 0).count()
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let catalog = load_catalog(args.catalog.as_ref())?;
    let mut opts = Opts::default();
    opts.exclude.kernel = args.exclude_kernel;

    let mut group = CounterGroup::open(&catalog, opts).context("when opening counters")?;

    group.reset()?;
    group.start()?;
    let touched = touch_pages(args.pages);
    group.stop()?;
    info!(touched, "workload done");

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("{:?}", path))?),
        None => Box::new(io::stdout().lock()),
    };
    group.finish(sink)?;

    Ok(())
}
