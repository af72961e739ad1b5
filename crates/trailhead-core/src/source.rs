use std::path::{
  Path,
  PathBuf
};
use std::time::Duration;

use anyhow::Context;
use tracing::{
  debug,
  instrument
};
use trailhead_shared::{
  DataSource,
  SourceErrorKind
};

/// Reads `http(s)://` locations over
/// the network and anything else as a
/// file relative to `base_dir`.
#[derive(Debug, Clone)]
pub struct HttpSource {
  client:   reqwest::Client,
  base_dir: PathBuf
}

impl HttpSource {
  pub fn new(
    base_dir: impl Into<PathBuf>
  ) -> anyhow::Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!(
        "trailhead/",
        env!("CARGO_PKG_VERSION")
      ))
      .build()
      .context(
        "failed building HTTP client \
         for project sources"
      )?;

    Ok(Self {
      client,
      base_dir: base_dir.into()
    })
  }

  async fn fetch_remote(
    &self,
    url: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind> {
    let response = self
      .client
      .get(url)
      .header(
        reqwest::header::ACCEPT,
        "application/json"
      )
      .timeout(timeout)
      .send()
      .await
      .map_err(|err| {
        classify_reqwest(err, timeout)
      })?;

    let status = response.status();
    if !status.is_success() {
      return Err(SourceErrorKind::Status(
        status.as_u16()
      ));
    }

    response.text().await.map_err(|err| {
      classify_reqwest(err, timeout)
    })
  }

  async fn fetch_local(
    &self,
    location: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind> {
    let path = self.resolve(location);
    debug!(path = %path.display(), "reading local source");

    match tokio::time::timeout(
      timeout,
      tokio::fs::read_to_string(&path)
    )
    .await
    {
      | Ok(Ok(body)) => Ok(body),
      | Ok(Err(err)) => {
        Err(SourceErrorKind::Transport(
          format!(
            "failed to read {}: {err}",
            path.display()
          )
        ))
      }
      | Err(_) => {
        Err(SourceErrorKind::TimedOut(
          millis(timeout)
        ))
      }
    }
  }

  fn resolve(
    &self,
    location: &str
  ) -> PathBuf {
    let trimmed = location
      .strip_prefix("file://")
      .unwrap_or(location);
    let path = Path::new(trimmed);
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.base_dir.join(path)
    }
  }
}

impl DataSource for HttpSource {
  #[instrument(skip(self))]
  async fn fetch(
    &self,
    location: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind> {
    if is_remote(location) {
      self
        .fetch_remote(location, timeout)
        .await
    } else {
      self
        .fetch_local(location, timeout)
        .await
    }
  }
}

pub fn is_remote(location: &str) -> bool {
  let lower = location
    .trim_start()
    .to_ascii_lowercase();
  lower.starts_with("http://")
    || lower.starts_with("https://")
}

fn classify_reqwest(
  err: reqwest::Error,
  timeout: Duration
) -> SourceErrorKind {
  if err.is_timeout() {
    SourceErrorKind::TimedOut(millis(
      timeout
    ))
  } else {
    SourceErrorKind::Transport(format!(
      "{err}"
    ))
  }
}

fn millis(duration: Duration) -> u64 {
  u64::try_from(duration.as_millis())
    .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
  use super::{
    HttpSource,
    is_remote
  };

  #[test]
  fn remote_detection_is_scheme_based() {
    assert!(is_remote(
      "https://dev.deepthought.education/x.json"
    ));
    assert!(is_remote("HTTP://localhost:8000/data.json"));
    assert!(!is_remote("./data.json"));
    assert!(!is_remote("file:///tmp/data.json"));
  }

  #[test]
  fn local_locations_resolve_against_base_dir()
   {
    let source = HttpSource::new("/srv/site")
      .expect("source");
    assert_eq!(
      source.resolve("./data.json"),
      std::path::Path::new("/srv/site/./data.json")
    );
    assert_eq!(
      source.resolve("file:///tmp/data.json"),
      std::path::Path::new("/tmp/data.json")
    );
  }
}
