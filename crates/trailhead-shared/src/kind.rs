use serde::Serialize;

use crate::model::Asset;

const VIDEO_CONTENT_TYPE: &str = "video";
const VIDEO_HOST_MARKERS: [&str; 2] =
  ["youtube", "vimeo"];
const THREAD_TITLE_MARKERS: [&str; 2] =
  ["threadbuild", "thread"];
const STRUCTURE_TITLE_MARKERS: [&str; 2] =
  ["structure", "pointer"];

/// What an asset renders as.
///
/// Upstream payloads carry no reliable
/// discriminator, so the kind is decoded
/// from the content type, the content
/// URL and the title on every render.
/// The checks run in a fixed order and
/// the first match wins.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(
  tag = "kind",
  rename_all = "snake_case"
)]
pub enum AssetKind {
  Video { src: String },
  ThreadForm,
  StructureForm,
  Article { link: Option<String> }
}

impl AssetKind {
  #[tracing::instrument(
    level = "trace",
    skip(asset),
    fields(asset_id = %asset.id)
  )]
  pub fn classify(asset: &Asset) -> Self {
    if asset.content_type
      == VIDEO_CONTENT_TYPE
      || VIDEO_HOST_MARKERS.iter().any(
        |marker| {
          asset.content.contains(marker)
        }
      )
    {
      return Self::Video {
        src: asset
          .content
          .trim()
          .to_string()
      };
    }

    let title =
      asset.title.to_lowercase();
    if contains_any(
      &title,
      &THREAD_TITLE_MARKERS
    ) {
      return Self::ThreadForm;
    }
    if contains_any(
      &title,
      &STRUCTURE_TITLE_MARKERS
    ) {
      return Self::StructureForm;
    }

    let link = if asset.content.is_empty()
    {
      None
    } else {
      Some(asset.content.clone())
    };
    Self::Article { link }
  }

  pub fn as_key(&self) -> &'static str {
    match self {
      | Self::Video { .. } => "video",
      | Self::ThreadForm => {
        "thread_form"
      }
      | Self::StructureForm => {
        "structure_form"
      }
      | Self::Article { .. } => {
        "article"
      }
    }
  }
}

fn contains_any(
  haystack: &str,
  needles: &[&str]
) -> bool {
  needles
    .iter()
    .any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
  use super::AssetKind;
  use crate::model::Asset;

  fn asset(
    title: &str,
    content_type: &str,
    content: &str
  ) -> Asset {
    Asset {
      id:           "1".to_string(),
      title:        title.to_string(),
      description:  "desc".to_string(),
      content_type: content_type
        .to_string(),
      content:      content.to_string()
    }
  }

  #[test]
  fn video_content_type_wins_over_title() {
    let kind = AssetKind::classify(
      &asset(
        "Threadbuild walkthrough",
        "video",
        "  https://example.com/embed/1 "
      )
    );
    assert_eq!(
      kind,
      AssetKind::Video {
        src: "https://example.com/embed/1"
          .to_string()
      }
    );
  }

  #[test]
  fn hosting_substring_marks_video() {
    let kind = AssetKind::classify(
      &asset(
        "Structure you pointers",
        "article",
        "https://player.vimeo.com/video/9"
      )
    );
    assert_eq!(kind.as_key(), "video");
  }

  #[test]
  fn thread_title_is_case_insensitive() {
    assert_eq!(
      AssetKind::classify(&asset(
        "THREADBUILD",
        "threadbuilder",
        ""
      )),
      AssetKind::ThreadForm
    );
    assert_eq!(
      AssetKind::classify(&asset(
        "Main Thread",
        "",
        ""
      )),
      AssetKind::ThreadForm
    );
  }

  #[test]
  fn thread_beats_structure() {
    assert_eq!(
      AssetKind::classify(&asset(
        "Thread structure",
        "",
        ""
      )),
      AssetKind::ThreadForm
    );
  }

  #[test]
  fn structure_and_pointer_titles() {
    assert_eq!(
      AssetKind::classify(&asset(
        "Structure your pointers",
        "article",
        ""
      )),
      AssetKind::StructureForm
    );
    assert_eq!(
      AssetKind::classify(&asset(
        "4SA Method: Pointer",
        "",
        "https://example.com/doc"
      )),
      AssetKind::StructureForm
    );
  }

  #[test]
  fn everything_else_is_an_article() {
    assert_eq!(
      AssetKind::classify(&asset(
        "Reading",
        "article",
        "https://example.com/doc.pdf"
      )),
      AssetKind::Article {
        link: Some(
          "https://example.com/doc.pdf"
            .to_string()
        )
      }
    );
    assert_eq!(
      AssetKind::classify(&asset(
        "Reading", "article", ""
      )),
      AssetKind::Article { link: None }
    );
  }
}
