use trailhead_shared::{
  ContentFragment,
  FormField,
  InputKind
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CardBodyProps {
  pub fragment: ContentFragment
}

#[function_component(CardBody)]
pub fn card_body(
  props: &CardBodyProps
) -> Html {
  match &props.fragment {
    | ContentFragment::VideoEmbed { src } => html! {
        <iframe src={src.clone()} frameborder="0" allowfullscreen={true}></iframe>
    },
    | ContentFragment::ThreadForm {
      heading,
      fields,
      add_label
    } => html! {
        <div class="thread-container">
            <div class="thread-header">{ heading }</div>
            <div class="thread-inputs">
                { for fields.iter().map(form_field) }
            </div>
            // Decorative; appending sub-threads is not supported.
            <button class="add-sub-thread-btn">{ add_label }</button>
        </div>
    },
    | ContentFragment::StructureForm {
      title_field,
      content_field
    } => html! {
        <div class="structure-container">
            { form_field(title_field) }
            { form_field(content_field) }
        </div>
    },
    | ContentFragment::Article { text, link } => html! {
        <div class="article-content">
            <p>{ text }</p>
            {
                match link {
                    | Some(link) => html! {
                        <a href={link.href.clone()} target="_blank" class="resource-link">
                            { &link.label }
                        </a>
                    },
                    | None => html! {}
                }
            }
        </div>
    }
  }
}

fn form_field(field: &FormField) -> Html {
  let input = match field.input {
    | InputKind::SingleLine => html! {
        <input
            type="text"
            placeholder={field.placeholder.clone()}
            value={field.value.clone()}
        />
    },
    | InputKind::MultiLine { rows } => html! {
        <textarea
            placeholder={field.placeholder.clone()}
            rows={rows.to_string()}
            value={field.value.clone()}
        />
    }
  };

  html! {
      <div class="input-group">
          <label>{ &field.label }</label>
          { input }
      </div>
  }
}
