use std::time::Duration;

use futures::future::{
  Either,
  select
};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use trailhead_shared::{
  DataSource,
  SourceErrorKind
};

/// Fetches project sources with the
/// browser's `fetch`, relative URLs
/// resolving against the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSource;

impl BrowserSource {
  async fn fetch_text(
    location: &str
  ) -> Result<String, SourceErrorKind> {
    let response = Request::get(location)
      .send()
      .await
      .map_err(|e| {
        SourceErrorKind::Transport(
          e.to_string()
        )
      })?;

    if !response.ok() {
      return Err(SourceErrorKind::Status(
        response.status()
      ));
    }

    response.text().await.map_err(|e| {
      SourceErrorKind::Transport(
        e.to_string()
      )
    })
  }
}

impl DataSource for BrowserSource {
  async fn fetch(
    &self,
    location: &str,
    timeout: Duration
  ) -> Result<String, SourceErrorKind> {
    let millis = timeout_millis(timeout);
    let request =
      Box::pin(Self::fetch_text(location));
    let deadline = Box::pin(
      TimeoutFuture::new(timer_millis(
        millis
      ))
    );

    match select(request, deadline).await {
      | Either::Left((result, _)) => result,
      | Either::Right(((), _)) => {
        tracing::warn!(
          location,
          millis,
          "source request timed out"
        );
        Err(SourceErrorKind::TimedOut(
          millis
        ))
      }
    }
  }
}

fn timeout_millis(timeout: Duration) -> u64 {
  u64::try_from(timeout.as_millis())
    .unwrap_or(u64::MAX)
}

// Browser timers take a u32 delay.
fn timer_millis(millis: u64) -> u32 {
  u32::try_from(millis).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::{
    timeout_millis,
    timer_millis
  };

  #[test]
  fn default_timeout_fits_a_browser_timer()
   {
    let millis = timeout_millis(
      Duration::from_secs(10)
    );
    assert_eq!(millis, 10_000);
    assert_eq!(timer_millis(millis), 10_000);
  }

  #[test]
  fn oversized_timeouts_saturate() {
    assert_eq!(
      timeout_millis(Duration::MAX),
      u64::MAX
    );
    assert_eq!(
      timer_millis(u64::from(u32::MAX) + 1),
      u32::MAX
    );
  }
}
