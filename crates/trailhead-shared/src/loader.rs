use std::fmt;
use std::time::Duration;

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info,
  warn
};

use crate::error::{
  LoadError,
  SourceError,
  SourceErrorKind
};
use crate::model::Project;

pub const DEFAULT_PRIMARY_SOURCE: &str =
  "https://dev.deepthought.education/\
   assets/uploads/files/files/others/\
   front_end_subset.json";
pub const DEFAULT_FALLBACK_SOURCE: &str =
  "./data.json";
pub const DEFAULT_TIMEOUT_MS: u64 =
  10_000;

pub const LOADING_TEXT: &str =
  "Loading assets...";

/// The two locations a project is read
/// from, in the order they are tried.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct SourceSet {
  pub primary:    String,
  pub fallback:   String,
  pub timeout_ms: u64
}

impl Default for SourceSet {
  fn default() -> Self {
    Self {
      primary:    DEFAULT_PRIMARY_SOURCE
        .to_string(),
      fallback:   DEFAULT_FALLBACK_SOURCE
        .to_string(),
      timeout_ms: DEFAULT_TIMEOUT_MS
    }
  }
}

impl SourceSet {
  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
  Primary,
  Fallback
}

impl fmt::Display for SourceOrigin {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Primary => {
        f.write_str("external API")
      }
      | Self::Fallback => {
        f.write_str("local fallback")
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
  pub project: Project,
  pub origin:  SourceOrigin
}

/// Fetches the raw body behind a
/// location. Implementations bound each
/// call by `timeout` and report a
/// non-success status as
/// [`SourceErrorKind::Status`].
#[allow(async_fn_in_trait)]
pub trait DataSource {
  async fn fetch(
    &self,
    location: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind>;
}

/// Loads the project from the primary
/// location, falling back to the
/// secondary one. Attempts run one after
/// the other, never concurrently.
#[tracing::instrument(
  skip_all,
  fields(
    primary = %sources.primary,
    fallback = %sources.fallback
  )
)]
pub async fn load_project<S>(
  source: &S,
  sources: &SourceSet
) -> Result<Loaded, LoadError>
where
  S: DataSource
{
  let timeout = sources.timeout();

  let primary = match attempt(
    source,
    &sources.primary,
    timeout
  )
  .await
  {
    | Ok(project) => {
      info!(
        origin = %SourceOrigin::Primary,
        tasks = project.tasks.len(),
        "data loaded from external API"
      );
      return Ok(Loaded {
        project,
        origin: SourceOrigin::Primary
      });
    }
    | Err(err) => {
      warn!(
        error = %err,
        "external API failed, trying \
         local fallback"
      );
      err
    }
  };

  match attempt(
    source,
    &sources.fallback,
    timeout
  )
  .await
  {
    | Ok(project) => {
      info!(
        origin = %SourceOrigin::Fallback,
        tasks = project.tasks.len(),
        "data loaded from local fallback"
      );
      Ok(Loaded {
        project,
        origin: SourceOrigin::Fallback
      })
    }
    | Err(fallback) => {
      let err =
        LoadError::DataUnavailable {
          primary,
          fallback
        };
      error!(error = %err, "failed to load data");
      Err(err)
    }
  }
}

async fn attempt<S>(
  source: &S,
  location: &str,
  timeout: Duration
) -> Result<Project, SourceError>
where
  S: DataSource
{
  let body = source
    .fetch(location, timeout)
    .await
    .map_err(|kind| {
      SourceError::new(location, kind)
    })?;

  decode_project(&body).map_err(|kind| {
    SourceError::new(location, kind)
  })
}

/// Parses a payload and checks it is
/// safe to render.
pub fn decode_project(
  body: &str
) -> Result<Project, SourceErrorKind> {
  let project = Project::from_json(body)
    .map_err(|err| {
      SourceErrorKind::Decode(
        err.to_string()
      )
    })?;
  project
    .validate()
    .map_err(SourceErrorKind::Integrity)?;
  Ok(project)
}

/// What the asset container shows when
/// nothing could be loaded.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct ErrorNotice {
  pub heading: String,
  pub detail:  String,
  pub hint:    String
}

impl ErrorNotice {
  pub fn from_load_error(
    err: &LoadError
  ) -> Self {
    Self::from_message(&err.to_string())
  }

  pub fn from_message(
    message: &str
  ) -> Self {
    Self {
      heading: "Failed to load content"
        .to_string(),
      detail:  format!("Error: {message}"),
      hint:    "Please make sure you're \
                running the app via \
                http://localhost:8000"
        .to_string()
    }
  }
}
