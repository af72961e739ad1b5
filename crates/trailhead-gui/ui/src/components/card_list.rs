use trailhead_shared::mount;
use trailhead_shared::{
  Board,
  BoardEvent,
  CardSlot
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::CardView;

#[derive(Properties, PartialEq)]
pub struct CardListProps {
  pub board:    Board,
  pub on_event: Callback<BoardEvent>
}

/// Cards of the selected task, rebuilt
/// from scratch on every render.
#[function_component(CardList)]
pub fn card_list(
  props: &CardListProps
) -> Html {
  html! {
      <div id={mount::ASSET_CONTAINER}>
          {
              for props.board.cards().into_iter().map(|slot| match slot {
                  | CardSlot::Ready(card) => {
                      let state = props.board.description_state(&card.asset_id);
                      let key = card.asset_id.clone();
                      html! {
                          <CardView
                              key={key}
                              card={card}
                              state={state}
                              on_event={props.on_event.clone()}
                          />
                      }
                  }
                  | CardSlot::Broken { title, reason } => html! {
                      <div class="asset-card broken">
                          <div class="card-header">{ title }</div>
                          <p class="task-subtitle">{ reason }</p>
                      </div>
                  }
              })
          }
      </div>
  }
}
