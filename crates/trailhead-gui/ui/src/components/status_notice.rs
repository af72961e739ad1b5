use trailhead_shared::ErrorNotice;
use trailhead_shared::loader::LOADING_TEXT;
use trailhead_shared::mount;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusNoticeProps {
  /// `None` while the project is still
  /// loading.
  pub notice: Option<ErrorNotice>
}

#[function_component(StatusNotice)]
pub fn status_notice(
  props: &StatusNoticeProps
) -> Html {
  let body = match &props.notice {
    | None => html! {
        <div class="loading">{ LOADING_TEXT }</div>
    },
    | Some(notice) => html! {
        <div class="error-message">
            <h3>{ &notice.heading }</h3>
            <p>{ &notice.detail }</p>
            <p>{ &notice.hint }</p>
        </div>
    }
  };

  html! {
      <div id={mount::ASSET_CONTAINER}>
          { body }
      </div>
  }
}
