use thiserror::Error;

/// Structural problems in a decoded
/// project that would make rendering
/// target the wrong elements.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum IntegrityError {
  #[error("project has no tasks")]
  NoTasks,

  #[error("asset id {id} is used more than once")]
  DuplicateAssetId { id: String }
}

/// Why a single source attempt failed.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum SourceErrorKind {
  #[error("{0}")]
  Transport(String),

  #[error("HTTP error! status: {0}")]
  Status(u16),

  #[error("timed out after {0} ms")]
  TimedOut(u64),

  #[error("invalid JSON payload: {0}")]
  Decode(String),

  #[error("{0}")]
  Integrity(IntegrityError)
}

/// One failed fetch from one location.
/// Recovered by trying the next source.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
#[error("{location}: {kind}")]
pub struct SourceError {
  pub location: String,
  pub kind:     SourceErrorKind
}

impl SourceError {
  pub fn new(
    location: &str,
    kind: SourceErrorKind
  ) -> Self {
    Self {
      location: location.to_string(),
      kind
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum LoadError {
  #[error(
    "both external API and local \
     fallback failed (primary \
     {primary}; fallback {fallback})"
  )]
  DataUnavailable {
    primary:  SourceError,
    fallback: SourceError
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum BoardError {
  #[error("project has no tasks")]
  NoTasks,

  #[error(
    "task index {index} is out of \
     range for {len} tasks"
  )]
  IndexOutOfRange { index: usize, len: usize },

  #[error(
    "asset {asset_id} is not part of \
     the selected task"
  )]
  UnknownAsset { asset_id: String }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum CardError {
  #[error("asset \"{title}\" has no id")]
  MissingId { title: String }
}
