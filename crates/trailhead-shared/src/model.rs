use std::collections::BTreeSet;

use serde::de::Error as _;
use serde::{
  Deserialize,
  Deserializer,
  Serialize
};
use serde_json::Value;

use crate::error::IntegrityError;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Project {
  pub title: String,
  #[serde(default)]
  pub tasks: Vec<Task>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  #[serde(rename = "task_title")]
  pub title:       String,
  #[serde(
    rename = "task_description",
    default,
    deserialize_with = "lenient_string"
  )]
  pub description: String,
  #[serde(default)]
  pub assets:      Vec<Asset>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Asset {
  #[serde(
    rename = "asset_id",
    default,
    deserialize_with = "lenient_string"
  )]
  pub id:           String,
  #[serde(
    rename = "asset_title",
    default,
    deserialize_with = "lenient_string"
  )]
  pub title:        String,
  #[serde(
    rename = "asset_description",
    default,
    deserialize_with = "lenient_string"
  )]
  pub description:  String,
  #[serde(
    rename = "asset_content_type",
    default,
    deserialize_with = "lenient_string"
  )]
  pub content_type: String,
  #[serde(
    rename = "asset_content",
    default,
    deserialize_with = "lenient_string"
  )]
  pub content:      String
}

impl Project {
  pub fn from_json(
    text: &str
  ) -> Result<Self, serde_json::Error> {
    serde_json::from_str(text)
  }

  /// Checks the invariants rendering
  /// relies on: at least one task and
  /// no asset id used twice. Empty ids
  /// are left to the card builder,
  /// which isolates them per card.
  pub fn validate(
    &self
  ) -> Result<(), IntegrityError> {
    if self.tasks.is_empty() {
      return Err(IntegrityError::NoTasks);
    }

    let mut seen = BTreeSet::new();
    for asset in self
      .tasks
      .iter()
      .flat_map(|task| task.assets.iter())
    {
      if asset.id.is_empty() {
        continue;
      }
      if !seen.insert(asset.id.as_str()) {
        return Err(
          IntegrityError::DuplicateAssetId {
            id: asset.id.clone()
          }
        );
      }
    }

    Ok(())
  }

  pub fn asset_count(&self) -> usize {
    self
      .tasks
      .iter()
      .map(|task| task.assets.len())
      .sum()
  }
}

impl Task {
  pub fn asset(
    &self,
    id: &str
  ) -> Option<&Asset> {
    self
      .assets
      .iter()
      .find(|asset| asset.id == id)
  }
}

// Upstream ids arrive as numbers or
// strings and optional text as null.
fn lenient_string<'de, D>(
  deserializer: D
) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  match Value::deserialize(deserializer)? {
    | Value::String(text) => Ok(text),
    | Value::Number(number) => {
      Ok(number.to_string())
    }
    | Value::Null => Ok(String::new()),
    | other => {
      Err(D::Error::custom(format!(
        "expected string or number, \
         got {other}"
      )))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Project;
  use crate::error::IntegrityError;

  #[test]
  fn decodes_upstream_field_names() {
    let project = Project::from_json(
      r#"{
        "title": "Journey",
        "tasks": [{
          "task_id": 18882,
          "task_title": "Explore the world of management",
          "task_description": "As a project manager...",
          "assets": [{
            "asset_id": 18883,
            "asset_title": "Technical Project Management",
            "asset_description": "Story of Alignment",
            "asset_content": " https://www.youtube.com/embed/TiMRwri1xJ8",
            "asset_type": "display_asset",
            "asset_content_type": "video"
          }]
        }]
      }"#
    )
    .expect("decode project");

    assert_eq!(project.title, "Journey");
    let asset = &project.tasks[0].assets[0];
    assert_eq!(asset.id, "18883");
    assert_eq!(asset.content_type, "video");
    assert_eq!(
      asset.content,
      " https://www.youtube.com/embed/TiMRwri1xJ8"
    );
  }

  #[test]
  fn missing_and_null_text_fields_default_to_empty()
   {
    let project = Project::from_json(
      r#"{"title":"X","tasks":[{"task_title":"T1","assets":[
        {"asset_id":"a","asset_title":"Read me","asset_content":null}
      ]}]}"#
    )
    .expect("decode project");

    let task = &project.tasks[0];
    assert_eq!(task.description, "");
    assert_eq!(task.assets[0].content, "");
    assert_eq!(
      task.assets[0].content_type,
      ""
    );
  }

  #[test]
  fn missing_asset_id_and_title_decode_as_empty()
   {
    let project = Project::from_json(
      r#"{"title":"X","tasks":[{"task_title":"T1","assets":[
        {"asset_title":"Bad"},
        {"asset_id":"b"},
        {"asset_id":"c","asset_title":"Good"}
      ]}]}"#
    )
    .expect("decode project");

    let assets = &project.tasks[0].assets;
    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].id, "");
    assert_eq!(assets[0].title, "Bad");
    assert_eq!(assets[1].title, "");
    assert_eq!(project.validate(), Ok(()));
  }

  #[test]
  fn rejects_non_scalar_asset_id() {
    let result = Project::from_json(
      r#"{"title":"X","tasks":[{"task_title":"T1","assets":[
        {"asset_id":[1],"asset_title":"t"}
      ]}]}"#
    );
    assert!(result.is_err());
  }

  #[test]
  fn validate_flags_empty_task_list() {
    let project = Project::from_json(
      r#"{"title":"X","tasks":[]}"#
    )
    .expect("decode project");
    assert_eq!(
      project.validate(),
      Err(IntegrityError::NoTasks)
    );
  }

  #[test]
  fn validate_flags_duplicate_ids_across_tasks()
   {
    let project = Project::from_json(
      r#"{"title":"X","tasks":[
        {"task_title":"T1","assets":[{"asset_id":"7","asset_title":"a"}]},
        {"task_title":"T2","assets":[{"asset_id":7,"asset_title":"b"}]}
      ]}"#
    )
    .expect("decode project");
    assert_eq!(
      project.validate(),
      Err(
        IntegrityError::DuplicateAssetId {
          id: "7".to_string()
        }
      )
    );
  }
}
