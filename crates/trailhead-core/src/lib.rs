pub mod cli;
pub mod commands;
pub mod config;
pub mod html;
pub mod serve;
pub mod source;

use std::ffi::OsString;

use anyhow::Context;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_args(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting trailhead"
  );

  let mut cfg = config::Config::load(
    cli.rc_file.as_deref()
  )?;
  cfg.apply_overrides(cli.overrides());
  debug!(
    loaded_files = ?cfg.loaded_files,
    "configuration resolved"
  );

  let runtime =
    tokio::runtime::Builder::new_multi_thread()
      .enable_all()
      .build()
      .context(
        "failed to start async runtime"
      )?;

  runtime.block_on(commands::dispatch(
    &cfg,
    cli.command
  ))?;

  info!("done");
  Ok(())
}
