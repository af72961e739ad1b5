use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use futures::executor::block_on;
use trailhead_shared::{
  Board,
  DataSource,
  ErrorNotice,
  LoadError,
  SourceErrorKind,
  SourceOrigin,
  SourceSet,
  load_project
};

const FALLBACK_BODY: &str = r#"{"title":"X","tasks":[{"task_title":"T1","task_description":"D1","assets":[]}]}"#;

/// Canned responses per location that
/// records the order of requests.
#[derive(Default)]
struct ScriptedSource {
  responses: HashMap<
    String,
    Result<String, SourceErrorKind>
  >,
  calls:     RefCell<Vec<String>>
}

impl ScriptedSource {
  fn respond(
    mut self,
    location: &str,
    response: Result<&str, SourceErrorKind>
  ) -> Self {
    self.responses.insert(
      location.to_string(),
      response.map(str::to_string)
    );
    self
  }
}

impl DataSource for ScriptedSource {
  async fn fetch(
    &self,
    location: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind> {
    assert_eq!(
      timeout,
      Duration::from_millis(250)
    );
    self
      .calls
      .borrow_mut()
      .push(location.to_string());
    self
      .responses
      .get(location)
      .cloned()
      .unwrap_or_else(|| {
        Err(SourceErrorKind::Status(404))
      })
  }
}

fn sources() -> SourceSet {
  SourceSet {
    primary:    "https://remote.example/journey.json"
      .to_string(),
    fallback:   "./data.json".to_string(),
    timeout_ms: 250
  }
}

#[test]
fn primary_success_skips_fallback() {
  let source = ScriptedSource::default()
    .respond(
      "https://remote.example/journey.json",
      Ok(FALLBACK_BODY)
    );

  let loaded =
    block_on(load_project(&source, &sources()))
      .expect("load project");

  assert_eq!(
    loaded.origin,
    SourceOrigin::Primary
  );
  assert_eq!(
    source.calls.borrow().as_slice(),
    ["https://remote.example/journey.json"]
  );
}

#[test]
fn primary_failure_falls_back_to_local_copy() {
  let source = ScriptedSource::default()
    .respond(
      "https://remote.example/journey.json",
      Err(SourceErrorKind::Transport(
        "Failed to fetch".to_string()
      ))
    )
    .respond(
      "./data.json",
      Ok(FALLBACK_BODY)
    );

  let loaded =
    block_on(load_project(&source, &sources()))
      .expect("load project");
  assert_eq!(
    loaded.origin,
    SourceOrigin::Fallback
  );

  let board =
    Board::new(loaded.project)
      .expect("board");
  assert_eq!(board.title(), "X");
  assert_eq!(board.header().title, "T1");
  assert_eq!(board.header().description, "D1");
  assert!(board.render_board()[0].active);
  assert!(board.cards().is_empty());
  assert_eq!(
    source.calls.borrow().len(),
    2
  );
}

#[test]
fn invalid_primary_payload_falls_back() {
  let source = ScriptedSource::default()
    .respond(
      "https://remote.example/journey.json",
      Ok(r#"{"title":"Empty","tasks":[]}"#)
    )
    .respond(
      "./data.json",
      Ok(FALLBACK_BODY)
    );

  let loaded =
    block_on(load_project(&source, &sources()))
      .expect("load project");
  assert_eq!(loaded.project.title, "X");
}

#[test]
fn both_failures_are_reported_together() {
  let source = ScriptedSource::default()
    .respond(
      "https://remote.example/journey.json",
      Err(SourceErrorKind::TimedOut(250))
    )
    .respond(
      "./data.json",
      Ok("<html>not json</html>")
    );

  let err =
    block_on(load_project(&source, &sources()))
      .expect_err("both sources fail");

  let LoadError::DataUnavailable {
    primary,
    fallback
  } = &err;
  assert_eq!(
    primary.kind,
    SourceErrorKind::TimedOut(250)
  );
  assert!(matches!(
    fallback.kind,
    SourceErrorKind::Decode(_)
  ));

  let notice =
    ErrorNotice::from_load_error(&err);
  assert_eq!(
    notice.heading,
    "Failed to load content"
  );
  assert!(notice.detail.contains("timed out after 250 ms"));
  assert!(notice.detail.contains("invalid JSON payload"));
  assert!(notice.detail.contains("./data.json"));
}
