use std::fmt::{
  self,
  Write as _
};

use html_escape::{
  encode_double_quoted_attribute as attr,
  encode_text as text
};
use trailhead_shared::fragment::FormField;
use trailhead_shared::mount;
use trailhead_shared::{
  AssetCard,
  Board,
  CardSlot,
  ContentFragment,
  ErrorNotice,
  InputKind
};

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<link rel=\"stylesheet\" href=\"style.css\">
";

/// Renders the whole board with the
/// selected task's cards, matching the
/// markup the browser front end builds.
#[tracing::instrument(
  skip_all,
  fields(selected = board.selected_index())
)]
pub fn render_page(
  board: &Board
) -> Result<String, fmt::Error> {
  let mut out = String::new();
  let header = board.header();
  let sidebar = board.sidebar();

  out.push_str(PAGE_HEAD);
  writeln!(
    out,
    "<title>{}</title>\n</head>\n<body>",
    text(board.title())
  )?;
  writeln!(
    out,
    "<aside id=\"{}\" class=\"{}\">",
    mount::SIDEBAR,
    class_list("sidebar", sidebar.class())
  )?;
  writeln!(
    out,
    "<button id=\"{}\" class=\"toggle-btn\">{}</button>",
    mount::SIDEBAR_TOGGLE,
    sidebar.glyph()
  )?;
  writeln!(
    out,
    "<ul id=\"{}\">",
    mount::JOURNEY_LIST
  )?;
  for entry in board.render_board() {
    writeln!(
      out,
      "<li class=\"{}\" data-task=\"{}\">{}</li>",
      if entry.active { "active" } else { "" },
      entry.index,
      text(&entry.title)
    )?;
  }
  out.push_str("</ul>\n</aside>\n<main>\n");

  writeln!(
    out,
    "<h1 id=\"{}\">{}</h1>",
    mount::PROJECT_TITLE,
    text(board.title())
  )?;
  writeln!(
    out,
    "<h2 id=\"{}\">{}</h2>",
    mount::TASK_TITLE,
    text(&header.title)
  )?;
  writeln!(
    out,
    "<p id=\"{}\">{}</p>",
    mount::TASK_DESCRIPTION,
    text(&header.description)
  )?;

  writeln!(
    out,
    "<section id=\"{}\">",
    mount::ASSET_CONTAINER
  )?;
  for slot in board.cards() {
    match slot {
      | CardSlot::Ready(card) => {
        let state = board
          .description_state(&card.asset_id);
        render_card(&mut out, &card, state)?;
      }
      | CardSlot::Broken { title, reason } => {
        writeln!(
          out,
          "<div class=\"asset-card broken\"><div class=\"card-header\">{}</div><p>{}</p></div>",
          text(&title),
          text(&reason)
        )?;
      }
    }
  }
  out.push_str("</section>\n</main>\n</body>\n</html>\n");
  Ok(out)
}

/// Page shown when no source could be
/// loaded: no task list, the notice in
/// the asset container.
pub fn render_failure_page(
  notice: &ErrorNotice
) -> Result<String, fmt::Error> {
  let mut out = String::new();
  out.push_str(PAGE_HEAD);
  out.push_str(
    "<title>Failed to load content</title>\n</head>\n<body>\n<main>\n"
  );
  writeln!(
    out,
    "<section id=\"{}\">",
    mount::ASSET_CONTAINER
  )?;
  writeln!(
    out,
    "<div class=\"error-message\">\n<h3>{}</h3>\n<p>{}</p>\n<p>{}</p>\n</div>",
    text(&notice.heading),
    text(&notice.detail),
    text(&notice.hint)
  )?;
  out.push_str("</section>\n</main>\n</body>\n</html>\n");
  Ok(out)
}

fn render_card(
  out: &mut String,
  card: &AssetCard,
  state: trailhead_shared::DescriptionState
) -> fmt::Result {
  writeln!(
    out,
    "<div class=\"asset-card {}\">",
    card.kind
  )?;
  writeln!(
    out,
    "<div class=\"card-header\">{}<span class=\"info-icon\" title=\"{}\">ℹ️</span></div>",
    text(&card.title),
    attr(&card.tooltip)
  )?;
  writeln!(
    out,
    "<div class=\"card-description-wrapper\"><div class=\"{}\" id=\"{}\"><strong>Description:</strong> {}</div>",
    class_list("card-description", state.class()),
    attr(&card.description_dom_id),
    text(&card.description)
  )?;
  writeln!(
    out,
    "<button class=\"expand-btn\" data-asset=\"{}\"><span id=\"{}\">{}</span></button></div>",
    attr(&card.asset_id),
    attr(&card.arrow_dom_id),
    state.glyph()
  )?;
  out.push_str("<div class=\"card-body\">\n");
  render_fragment(out, &card.body)?;
  out.push_str("</div>\n</div>\n");
  Ok(())
}

pub fn render_fragment(
  out: &mut String,
  fragment: &ContentFragment
) -> fmt::Result {
  match fragment {
    | ContentFragment::VideoEmbed { src } => {
      writeln!(
        out,
        "<iframe src=\"{}\" frameborder=\"0\" allowfullscreen></iframe>",
        attr(src)
      )?;
    }
    | ContentFragment::ThreadForm {
      heading,
      fields,
      add_label
    } => {
      writeln!(
        out,
        "<div class=\"thread-container\">\n<div class=\"thread-header\">{}</div>\n<div class=\"thread-inputs\">",
        text(heading)
      )?;
      for field in fields {
        render_field(out, field)?;
      }
      writeln!(
        out,
        "</div>\n<button class=\"add-sub-thread-btn\">{}</button>\n</div>",
        text(add_label)
      )?;
    }
    | ContentFragment::StructureForm {
      title_field,
      content_field
    } => {
      out.push_str(
        "<div class=\"structure-container\">\n"
      );
      render_field(out, title_field)?;
      render_field(out, content_field)?;
      out.push_str("</div>\n");
    }
    | ContentFragment::Article {
      text: body,
      link
    } => {
      writeln!(
        out,
        "<div class=\"article-content\">\n<p>{}</p>",
        text(body)
      )?;
      if let Some(link) = link {
        writeln!(
          out,
          "<a href=\"{}\" target=\"_blank\" class=\"resource-link\">{}</a>",
          attr(&link.href),
          text(&link.label)
        )?;
      }
      out.push_str("</div>\n");
    }
  }
  Ok(())
}

fn render_field(
  out: &mut String,
  field: &FormField
) -> fmt::Result {
  writeln!(
    out,
    "<div class=\"input-group\">\n<label>{}</label>",
    text(&field.label)
  )?;
  match field.input {
    | InputKind::SingleLine => {
      writeln!(
        out,
        "<input type=\"text\" placeholder=\"{}\" value=\"{}\" />",
        attr(&field.placeholder),
        attr(&field.value)
      )?;
    }
    | InputKind::MultiLine { rows } => {
      writeln!(
        out,
        "<textarea placeholder=\"{}\" rows=\"{rows}\">{}</textarea>",
        attr(&field.placeholder),
        text(&field.value)
      )?;
    }
  }
  out.push_str("</div>\n");
  Ok(())
}

fn class_list(
  base: &str,
  extra: Option<&str>
) -> String {
  match extra {
    | Some(extra) => format!("{base} {extra}"),
    | None => base.to_string()
  }
}
