use serde::Serialize;

use crate::kind::AssetKind;
use crate::model::Asset;

pub const THREAD_HEADING: &str =
  "Thread A";
pub const ADD_SUB_THREAD_LABEL: &str =
  "+ Add Sub-thread";
pub const RESOURCE_LINK_LABEL: &str =
  "📄 View Full Resource";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
  SingleLine,
  MultiLine { rows: u32 }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct FormField {
  pub label:       String,
  pub placeholder: String,
  pub input:       InputKind,
  pub value:       String
}

impl FormField {
  fn new(
    label: &str,
    placeholder: &str,
    input: InputKind
  ) -> Self {
    Self {
      label: label.to_string(),
      placeholder: placeholder
        .to_string(),
      input,
      value: String::new()
    }
  }

  pub fn is_multi_line(&self) -> bool {
    matches!(
      self.input,
      InputKind::MultiLine { .. }
    )
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct ResourceLink {
  pub href:  String,
  pub label: String
}

/// Type-specific body of an asset card.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(
  tag = "fragment",
  rename_all = "snake_case"
)]
pub enum ContentFragment {
  VideoEmbed {
    src: String
  },
  /// The add button has no behaviour
  /// attached.
  ThreadForm {
    heading:   String,
    fields:    [FormField; 2],
    add_label: String
  },
  StructureForm {
    title_field:   FormField,
    content_field: FormField
  },
  Article {
    text: String,
    link: Option<ResourceLink>
  }
}

impl ContentFragment {
  pub fn fields(&self) -> Vec<&FormField> {
    match self {
      | Self::ThreadForm {
        fields, ..
      } => fields.iter().collect(),
      | Self::StructureForm {
        title_field,
        content_field
      } => vec![title_field, content_field],
      | Self::VideoEmbed { .. }
      | Self::Article { .. } => vec![]
    }
  }
}

pub fn classify_and_render(
  asset: &Asset
) -> ContentFragment {
  render_kind(
    AssetKind::classify(asset),
    asset
  )
}

pub fn render_kind(
  kind: AssetKind,
  asset: &Asset
) -> ContentFragment {
  match kind {
    | AssetKind::Video { src } => {
      ContentFragment::VideoEmbed { src }
    }
    | AssetKind::ThreadForm => {
      ContentFragment::ThreadForm {
        heading:   THREAD_HEADING
          .to_string(),
        fields:    [
          FormField::new(
            "Sub Interpretation 1",
            "Enter your interpretation here",
            InputKind::MultiLine {
              rows: 4
            }
          ),
          FormField::new(
            "Sub Reflection 1",
            "Enter your reflection here",
            InputKind::MultiLine {
              rows: 4
            }
          )
        ],
        add_label: ADD_SUB_THREAD_LABEL
          .to_string()
      }
    }
    | AssetKind::StructureForm => {
      ContentFragment::StructureForm {
        title_field:   FormField::new(
          "Title",
          "Enter title here",
          InputKind::SingleLine
        ),
        content_field: FormField::new(
          "Content",
          "Enter content here",
          InputKind::MultiLine {
            rows: 8
          }
        )
      }
    }
    | AssetKind::Article { link } => {
      ContentFragment::Article {
        text: asset.description.clone(),
        link: link.map(|href| {
          ResourceLink {
            href,
            label: RESOURCE_LINK_LABEL
              .to_string()
          }
        })
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    ContentFragment,
    InputKind,
    classify_and_render
  };
  use crate::model::Asset;

  fn asset(
    title: &str,
    content_type: &str,
    content: &str
  ) -> Asset {
    Asset {
      id:           "a1".to_string(),
      title:        title.to_string(),
      description:  "Read this first"
        .to_string(),
      content_type: content_type
        .to_string(),
      content:      content.to_string()
    }
  }

  #[test]
  fn video_fragment_uses_trimmed_src() {
    let fragment = classify_and_render(
      &asset(
        "Intro",
        "video",
        " https://www.youtube.com/embed/x \n"
      )
    );
    assert_eq!(
      fragment,
      ContentFragment::VideoEmbed {
        src: "https://www.youtube.com/embed/x"
          .to_string()
      }
    );
  }

  #[test]
  fn thread_form_has_two_empty_multi_line_fields()
   {
    let fragment = classify_and_render(
      &asset("Threadbuild", "threadbuilder", "")
    );
    let fields = fragment.fields();
    assert_eq!(fields.len(), 2);
    assert!(fields.iter().all(|field| {
      field.is_multi_line()
        && field.value.is_empty()
        && !field.label.is_empty()
    }));
    assert_eq!(
      fields[0].label,
      "Sub Interpretation 1"
    );
    assert_eq!(
      fields[1].label,
      "Sub Reflection 1"
    );
  }

  #[test]
  fn structure_form_mixes_single_and_multi_line()
   {
    let fragment = classify_and_render(
      &asset(
        "Structure you pointers",
        "article",
        ""
      )
    );
    let fields = fragment.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(
      fields[0].input,
      InputKind::SingleLine
    );
    assert_eq!(
      fields[1].input,
      InputKind::MultiLine { rows: 8 }
    );
  }

  #[test]
  fn article_link_only_when_content_present()
   {
    match classify_and_render(&asset(
      "Notes",
      "article",
      "https://example.com/a.pdf"
    )) {
      | ContentFragment::Article {
        text,
        link
      } => {
        assert_eq!(text, "Read this first");
        let link = link.expect("link");
        assert_eq!(
          link.href,
          "https://example.com/a.pdf"
        );
      }
      | other => {
        panic!("unexpected fragment {other:?}")
      }
    }

    assert_eq!(
      classify_and_render(&asset(
        "Notes", "article", ""
      )),
      ContentFragment::Article {
        text: "Read this first"
          .to_string(),
        link: None
      }
    );
  }
}
