use trailhead_shared::mount;
use trailhead_shared::{
  Board,
  BoardEvent,
  SidebarState
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub board:    Option<Board>,
  pub state:    SidebarState,
  pub on_event: Callback<BoardEvent>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let state = props.state;
  let entries = props
    .board
    .as_ref()
    .map(Board::render_board)
    .unwrap_or_default();

  let on_toggle = {
    let on_event = props.on_event.clone();
    Callback::from(move |_| {
      on_event.emit(BoardEvent::ToggleSidebar)
    })
  };

  html! {
      <aside id={mount::SIDEBAR} class={classes!("sidebar", state.class())}>
          <button id={mount::SIDEBAR_TOGGLE} class="toggle-btn" onclick={on_toggle}>
              { state.glyph() }
          </button>
          <ul id={mount::JOURNEY_LIST}>
              {
                  for entries.into_iter().map(|entry| {
                      let on_event = props.on_event.clone();
                      let index = entry.index;
                      html! {
                          <li
                              key={index}
                              class={classes!(entry.active.then_some("active"))}
                              onclick={move |_| on_event.emit(BoardEvent::SelectTask(index))}
                          >
                              { entry.title }
                          </li>
                      }
                  })
              }
          </ul>
      </aside>
  }
}
