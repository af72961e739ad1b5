//! Element ids the host page and the
//! renderers agree on.

pub const SIDEBAR: &str = "sidebar";
pub const SIDEBAR_TOGGLE: &str =
  "toggle-btn";
pub const JOURNEY_LIST: &str =
  "journey-list";
pub const PROJECT_TITLE: &str =
  "main-project-title";
pub const TASK_TITLE: &str = "task-title";
pub const TASK_DESCRIPTION: &str =
  "task-description";
pub const ASSET_CONTAINER: &str =
  "asset-container";

pub const DESCRIPTION_PREFIX: &str =
  "desc";
pub const ARROW_PREFIX: &str = "arrow";

pub fn description_id(
  asset_id: &str
) -> String {
  format!("{DESCRIPTION_PREFIX}-{asset_id}")
}

pub fn arrow_id(asset_id: &str) -> String {
  format!("{ARROW_PREFIX}-{asset_id}")
}
