use std::fmt::Write as _;
use std::fs;
use std::io::{
  self,
  Write
};

use anyhow::Context;
use tracing::{
  info,
  warn
};
use trailhead_shared::{
  AssetKind,
  Board,
  DataSource,
  ErrorNotice,
  SourceSet,
  load_project
};

use crate::cli::{
  Command,
  RenderArgs,
  ServeArgs
};
use crate::config::Config;
use crate::html;
use crate::serve;
use crate::source::HttpSource;

#[tracing::instrument(skip_all)]
pub async fn dispatch(
  cfg: &Config,
  command: Command
) -> anyhow::Result<()> {
  match command {
    | Command::Render(args) => {
      let sources = cfg.source_set()?;
      let source = local_http_source()?;
      let page =
        render(&source, &sources, &args)
          .await?;
      write_output(&args, &page)
    }
    | Command::Check => {
      let sources = cfg.source_set()?;
      let source = local_http_source()?;
      let report =
        check(&source, &sources).await?;
      io::stdout()
        .lock()
        .write_all(report.as_bytes())
        .context("failed writing report")
    }
    | Command::Serve(args) => {
      serve::serve(serve_settings(
        cfg, args
      )?)
      .await
    }
  }
}

/// Loads the project and renders the
/// requested view of the board. When no
/// source is available the page carries
/// the error notice instead of failing.
#[tracing::instrument(skip_all, fields(task = args.task))]
pub async fn render<S>(
  source: &S,
  sources: &SourceSet,
  args: &RenderArgs
) -> anyhow::Result<String>
where
  S: DataSource
{
  let loaded =
    match load_project(source, sources)
      .await
    {
      | Ok(loaded) => loaded,
      | Err(err) => {
        warn!(error = %err, "rendering error notice");
        return html::render_failure_page(
          &ErrorNotice::from_load_error(&err)
        )
        .context("failed to render page");
      }
    };

  let mut board = Board::new(loaded.project)?;
  board
    .select_task(args.task)
    .context("cannot select task")?;
  if args.collapse_sidebar {
    board.toggle_sidebar();
  }
  for asset_id in &args.collapse {
    board
      .toggle_description(asset_id)
      .context(
        "cannot collapse description"
      )?;
  }

  info!(
    origin = %loaded.origin,
    cards = board.cards().len(),
    "rendered board"
  );
  html::render_page(&board)
    .context("failed to render page")
}

#[tracing::instrument(skip_all)]
pub async fn check<S>(
  source: &S,
  sources: &SourceSet
) -> anyhow::Result<String>
where
  S: DataSource
{
  let loaded =
    load_project(source, sources).await?;
  let project = &loaded.project;

  let mut out = String::new();
  writeln!(out, "project  {}", project.title)?;
  writeln!(out, "origin   {}", loaded.origin)?;
  writeln!(out, "tasks    {}", project.tasks.len())?;
  writeln!(out, "assets   {}", project.asset_count())?;

  for (index, task) in
    project.tasks.iter().enumerate()
  {
    writeln!(out, "[{index}] {}", task.title)?;
    for asset in &task.assets {
      let kind = AssetKind::classify(asset);
      writeln!(
        out,
        "    {:<10} {:<15} {}",
        asset.id,
        kind.as_key(),
        asset.title
      )?;
    }
  }

  Ok(out)
}

fn local_http_source()
-> anyhow::Result<HttpSource> {
  let cwd = std::env::current_dir()
    .context(
      "failed to resolve working \
       directory"
    )?;
  HttpSource::new(cwd)
}

fn serve_settings(
  cfg: &Config,
  args: ServeArgs
) -> anyhow::Result<crate::config::ServeSettings>
{
  let mut settings = cfg.serve_settings()?;
  if let Some(host) = args.host {
    settings.host = host;
  }
  if let Some(port) = args.port {
    settings.port = port;
  }
  if let Some(root) = args.root {
    settings.root = root;
  }
  Ok(settings)
}

fn write_output(
  args: &RenderArgs,
  page: &str
) -> anyhow::Result<()> {
  match &args.out {
    | Some(path) => {
      fs::write(path, page).with_context(
        || {
          format!(
            "failed to write {}",
            path.display()
          )
        }
      )?;
      info!(path = %path.display(), "wrote page");
      Ok(())
    }
    | None => io::stdout()
      .lock()
      .write_all(page.as_bytes())
      .context("failed writing page")
  }
}
