use std::ffi::OsString;
use std::io::IsTerminal;
use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{
  ArgAction,
  Args,
  Parser,
  Subcommand
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct KeyVal {
  pub key:   String,
  pub value: String
}

impl std::str::FromStr for KeyVal {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let (k, v) =
      s.split_once('=').ok_or_else(|| {
        anyhow!(
          "expected KEY=VALUE, got: {s}"
        )
      })?;
    Ok(Self {
      key:   k.trim().to_string(),
      value: v.trim().to_string()
    })
  }
}

#[derive(Parser, Debug, Clone)]
#[command(
  name = "trailhead",
  version,
  about = "Trailhead: learning journey \
           board renderer",
  disable_help_subcommand = true
)]
pub struct GlobalCli {
  #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
  pub verbose: u8,

  #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
  pub quiet: u8,

  #[arg(
    long = "rc",
    value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
    action = ArgAction::Append,
    global = true
  )]
  pub rc_overrides: Vec<KeyVal>,

  #[arg(long = "rc-file", global = true)]
  pub rc_file: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
  /// Load the project and write the
  /// board as a static HTML page.
  Render(RenderArgs),
  /// Load the project and summarize
  /// what every asset renders as.
  Check,
  /// Serve a directory with permissive
  /// CORS headers for local development.
  Serve(ServeArgs)
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
  /// Zero-based task to select.
  #[arg(long = "task", default_value_t = 0)]
  pub task: usize,

  #[arg(long = "collapse-sidebar")]
  pub collapse_sidebar: bool,

  /// Asset whose description starts
  /// collapsed.
  #[arg(long = "collapse", action = ArgAction::Append)]
  pub collapse: Vec<String>,

  #[arg(long = "out")]
  pub out: Option<PathBuf>
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
  #[arg(long = "host")]
  pub host: Option<IpAddr>,

  #[arg(long = "port")]
  pub port: Option<u16>,

  #[arg(long = "root")]
  pub root: Option<PathBuf>
}

impl GlobalCli {
  pub fn parse_args(
    raw_args: Vec<OsString>
  ) -> Self {
    Self::parse_from(raw_args)
  }

  pub fn overrides(
    &self
  ) -> impl Iterator<Item = (String, String)>
  + '_ {
    self
      .rc_overrides
      .iter()
      .map(|kv| (kv.key.clone(), kv.value.clone()))
  }
}

pub fn init_tracing(
  verbose: u8,
  quiet: u8
) -> anyhow::Result<()> {
  let default_level = if quiet >= 2 {
    "error"
  } else if quiet == 1 {
    "warn"
  } else if verbose >= 3 {
    "trace"
  } else if verbose == 2 {
    "debug"
  } else if verbose == 1 {
    "info"
  } else {
    "warn"
  };

  let env_filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(default_level)
      })
      .map_err(|e| {
        anyhow!(
          "invalid RUST_LOG / log \
           filter: {e}"
        )
      })?;

  let init_result =
    tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_target(true)
      .with_level(true)
      .with_thread_ids(true)
      .with_writer(std::io::stderr)
      .with_ansi(
        std::io::stderr().is_terminal()
      )
      .try_init();

  if let Err(err) = init_result {
    debug!(error = %err, "tracing subscriber already set, continuing");
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::ffi::OsString;

  use clap::Parser;

  use super::{
    Command,
    GlobalCli,
    KeyVal
  };

  fn args(raw: &[&str]) -> Vec<OsString> {
    raw.iter().map(OsString::from).collect()
  }

  #[test]
  fn key_val_requires_equals() {
    let kv: KeyVal = " source.fallback = ./d.json "
      .parse()
      .expect("parse kv");
    assert_eq!(kv.key, "source.fallback");
    assert_eq!(kv.value, "./d.json");
    assert!("nope".parse::<KeyVal>().is_err());
  }

  #[test]
  fn render_flags_and_global_overrides() {
    let cli = GlobalCli::try_parse_from(args(&[
      "trailhead",
      "render",
      "--task",
      "2",
      "--collapse",
      "a",
      "--collapse",
      "b",
      "--rc",
      "source.timeout_ms=500",
      "-vv"
    ]))
    .expect("parse cli");

    assert_eq!(cli.verbose, 2);
    assert_eq!(
      cli.overrides().collect::<Vec<_>>(),
      vec![(
        "source.timeout_ms".to_string(),
        "500".to_string()
      )]
    );
    match cli.command {
      | Command::Render(render) => {
        assert_eq!(render.task, 2);
        assert_eq!(render.collapse, ["a", "b"]);
        assert!(!render.collapse_sidebar);
      }
      | other => {
        panic!("unexpected command {other:?}")
      }
    }
  }

  #[test]
  fn serve_accepts_host_and_port() {
    let cli = GlobalCli::try_parse_from(args(&[
      "trailhead",
      "serve",
      "--host",
      "127.0.0.1",
      "--port",
      "9000"
    ]))
    .expect("parse cli");
    match cli.command {
      | Command::Serve(serve) => {
        assert_eq!(serve.port, Some(9000));
        assert_eq!(
          serve.host.map(|h| h.to_string()),
          Some("127.0.0.1".to_string())
        );
      }
      | other => {
        panic!("unexpected command {other:?}")
      }
    }
  }
}
