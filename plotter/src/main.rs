use clap::Parser;
use std::path::PathBuf;
use workflow::config::RunConfig;
use workflow::runner::Runner;

mod workflow;

const DEFAULT_DATASET: &str = "site_data.json";

#[derive(Parser)]
#[command(author, version, about = "Site-characterization chart rendering driver")]
struct Args {
    /// Site dataset file to render charts from
    #[arg(default_value = DEFAULT_DATASET)]
    data: PathBuf,
    /// Directory the chart files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = RunConfig::from_args(args.data, args.out_dir);
    let runner = Runner::new(config);
    let summary = runner.execute()?;

    println!(
        "Rendered {} charts across {} locations ({} skipped)",
        summary.charts_rendered, summary.locations, summary.charts_skipped
    );

    Ok(())
}
