use trailhead_shared::{
  AssetCard,
  BoardEvent,
  DescriptionState
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::CardBody;

#[derive(Properties, PartialEq)]
pub struct CardViewProps {
  pub card:     AssetCard,
  pub state:    DescriptionState,
  pub on_event: Callback<BoardEvent>
}

#[function_component(CardView)]
pub fn card_view(
  props: &CardViewProps
) -> Html {
  let card = &props.card;
  let on_toggle = {
    let on_event = props.on_event.clone();
    let asset_id = card.asset_id.clone();
    Callback::from(move |_| {
      on_event.emit(
        BoardEvent::ToggleDescription(
          asset_id.clone()
        )
      )
    })
  };

  html! {
      <div class={classes!("asset-card", card.kind)}>
          <div class="card-header">
              { &card.title }
              <span class="info-icon" title={card.tooltip.clone()}>{ "ℹ️" }</span>
          </div>
          <div class="card-description-wrapper">
              <div
                  class={classes!("card-description", props.state.class())}
                  id={card.description_dom_id.clone()}
              >
                  <strong>{ "Description:" }</strong>
                  { " " }
                  { &card.description }
              </div>
              <button class="expand-btn" onclick={on_toggle}>
                  <span id={card.arrow_dom_id.clone()}>{ props.state.glyph() }</span>
              </button>
          </div>
          <div class="card-body">
              <CardBody fragment={card.body.clone()} />
          </div>
      </div>
  }
}
