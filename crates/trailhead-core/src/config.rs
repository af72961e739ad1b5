use std::collections::HashMap;
use std::fs;
use std::net::IpAddr;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  info,
  trace,
  warn
};
use trailhead_shared::SourceSet;
use trailhead_shared::loader::{
  DEFAULT_FALLBACK_SOURCE,
  DEFAULT_PRIMARY_SOURCE,
  DEFAULT_TIMEOUT_MS
};

pub const RC_ENV: &str = "TRAILHEADRC";
pub const RC_FILE_NAME: &str =
  ".trailheadrc";

#[derive(Debug, Clone)]
pub struct Config {
  map:              HashMap<String, String>,
  pub loaded_files: Vec<PathBuf>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
  pub host: IpAddr,
  pub port: u16,
  pub root: PathBuf
}

impl Config {
  #[tracing::instrument(skip(
    rc_override
  ))]
  pub fn load(
    rc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Self::defaults();

    let rc = resolve_rc_path(rc_override)?;
    if let Some(path) = rc {
      info!(rc = %path.display(), "loading rc file");
      cfg.load_file(&path)?;
    } else {
      debug!(
        "no rc file found; using \
         defaults"
      );
    }

    Ok(cfg)
  }

  pub fn defaults() -> Self {
    let mut map = HashMap::new();
    map.insert(
      "source.primary".to_string(),
      DEFAULT_PRIMARY_SOURCE.to_string()
    );
    map.insert(
      "source.fallback".to_string(),
      DEFAULT_FALLBACK_SOURCE.to_string()
    );
    map.insert(
      "source.timeout_ms".to_string(),
      DEFAULT_TIMEOUT_MS.to_string()
    );
    map.insert(
      "serve.host".to_string(),
      "0.0.0.0".to_string()
    );
    map.insert(
      "serve.port".to_string(),
      "8000".to_string()
    );
    map.insert(
      "serve.root".to_string(),
      ".".to_string()
    );

    Self {
      map,
      loaded_files: vec![]
    }
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_parsed<T>(
    &self,
    key: &str
  ) -> anyhow::Result<Option<T>>
  where
    T: std::str::FromStr,
    T::Err: std::fmt::Display
  {
    self
      .map
      .get(key)
      .map(|raw| {
        raw.trim().parse::<T>().map_err(
          |e| {
            anyhow!(
              "invalid value for {key}: \
               {raw} ({e})"
            )
          }
        )
      })
      .transpose()
  }

  pub fn source_set(
    &self
  ) -> anyhow::Result<SourceSet> {
    let defaults = SourceSet::default();
    let timeout_ms = self
      .get_parsed::<u64>(
        "source.timeout_ms"
      )?
      .unwrap_or(defaults.timeout_ms);
    if timeout_ms == 0 {
      return Err(anyhow!(
        "source.timeout_ms must be \
         greater than zero"
      ));
    }

    Ok(SourceSet {
      primary: self
        .get("source.primary")
        .unwrap_or(defaults.primary),
      fallback: self
        .get("source.fallback")
        .unwrap_or(defaults.fallback),
      timeout_ms
    })
  }

  pub fn serve_settings(
    &self
  ) -> anyhow::Result<ServeSettings> {
    let host = self
      .get_parsed::<IpAddr>("serve.host")?
      .ok_or_else(|| {
        anyhow!("serve.host is not set")
      })?;
    let port = self
      .get_parsed::<u16>("serve.port")?
      .ok_or_else(|| {
        anyhow!("serve.port is not set")
      })?;
    let root = self
      .get("serve.root")
      .map(|raw| {
        expand_tilde(Path::new(&raw))
      })
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    Ok(ServeSettings {
      host,
      port,
      root
    })
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let path =
      fs::canonicalize(&path).unwrap_or(path);
    if self.loaded_files.contains(&path) {
      warn!(path = %path.display(), "rc file already loaded; skipping include cycle");
      return Ok(());
    }
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    self
      .loaded_files
      .push(path.clone());

    let base_dir = path
      .parent()
      .map(|p| p.to_path_buf())
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if line.is_empty()
        || line.starts_with('#')
      {
        continue;
      }

      // URLs may carry fragments, so
      // only " #" starts a trailing
      // comment.
      if let Some((before, _)) =
        line.split_once(" #")
      {
        line = before.trim();
      }

      if let Some(include_rest) =
        line.strip_prefix("include ")
      {
        let include_path =
          resolve_include_path(
            &base_dir,
            include_rest.trim()
          )?;
        debug!(
            file = %path.display(),
            include = %include_path.display(),
            line = line_num + 1,
            "processing include"
        );

        if include_path.exists() {
          self
            .load_file(&include_path)?;
        } else {
          warn!(include = %include_path.display(), "include file does not exist; skipping");
        }
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    Ok(())
  }
}

#[tracing::instrument(skip(
  override_path
))]
fn resolve_rc_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(rc_env) =
    std::env::var(RC_ENV)
  {
    if rc_env == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(
      rc_env
    )));
  }

  let Some(home) = dirs::home_dir()
  else {
    warn!(
      "cannot determine home \
       directory; skipping rc file"
    );
    return Ok(None);
  };
  let candidate = home.join(RC_FILE_NAME);
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn resolve_include_path(
  base_dir: &Path,
  include: &str
) -> anyhow::Result<PathBuf> {
  if include.trim().is_empty() {
    return Err(anyhow!(
      "include path cannot be empty"
    ));
  }

  let raw = PathBuf::from(include);
  let expanded = expand_tilde(&raw);
  if expanded.is_absolute() {
    Ok(expanded)
  } else {
    Ok(base_dir.join(expanded))
  }
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}
