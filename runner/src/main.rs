use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "meridian-runner",
  about = "Execute configured contract steps against a mock host"
)]
struct Args {
  /// Path to the JSON execution config
  config_path: PathBuf,

  /// Where to write the execution trace
  #[clap(long, default_value = "trace.json")]
  output: PathBuf,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args = Args::parse();
  meridian_runner::run(&args.config_path, &args.output)
}
