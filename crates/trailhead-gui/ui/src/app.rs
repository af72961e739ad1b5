use trailhead_shared::{
  Board,
  BoardEvent,
  ErrorNotice,
  LoadError,
  Loaded,
  SidebarState,
  SourceSet,
  load_project
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api::BrowserSource;
use crate::components::{
  CardList,
  Sidebar,
  StatusNotice,
  TaskSummary
};

/// What the page is showing. The board
/// is built once, after the load.
#[derive(Debug, Clone, PartialEq)]
enum AppView {
  Loading,
  Ready(Board),
  Failed(ErrorNotice)
}

/// Outcome of one UI event.
#[derive(Debug, PartialEq)]
enum Routed {
  Sidebar(SidebarState),
  View(AppView),
  Ignored
}

fn view_from_load(
  result: Result<Loaded, LoadError>
) -> AppView {
  match result {
    | Ok(loaded) => {
      match Board::new(loaded.project) {
        | Ok(board) => {
          tracing::info!(
            origin = %loaded.origin,
            "application initialized"
          );
          AppView::Ready(board)
        }
        | Err(err) => AppView::Failed(
          ErrorNotice::from_message(
            &err.to_string()
          )
        )
      }
    }
    | Err(err) => {
      tracing::error!(error = %err, "failed to load data");
      AppView::Failed(
        ErrorNotice::from_load_error(&err)
      )
    }
  }
}

// The sidebar toggle has no data
// dependency; everything else needs a
// loaded board.
fn route_event(
  view: &AppView,
  sidebar: SidebarState,
  event: BoardEvent
) -> Routed {
  if event == BoardEvent::ToggleSidebar {
    return Routed::Sidebar(
      sidebar.toggled()
    );
  }

  let AppView::Ready(board) = view else {
    return Routed::Ignored;
  };
  let mut next = board.clone();
  match next.apply(event) {
    | Ok(()) => {
      Routed::View(AppView::Ready(next))
    }
    | Err(err) => {
      tracing::warn!(error = %err, "ignored board event");
      Routed::Ignored
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let view = use_state(|| AppView::Loading);
  let sidebar =
    use_state(SidebarState::default);

  {
    let view = view.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          let sources = SourceSet::default();
          let result = load_project(
            &BrowserSource,
            &sources
          )
          .await;
          view.set(view_from_load(result));
        }
      );
      || ()
    });
  }

  let on_event = {
    let view = view.clone();
    let sidebar = sidebar.clone();
    Callback::from(move |event: BoardEvent| {
      match route_event(
        &view, *sidebar, event
      ) {
        | Routed::Sidebar(next) => {
          sidebar.set(next)
        }
        | Routed::View(next) => {
          view.set(next)
        }
        | Routed::Ignored => {}
      }
    })
  };

  let state = *sidebar;
  match &*view {
    | AppView::Loading => html! {
        <div class="layout">
            <Sidebar board={None::<Board>} state={state} on_event={on_event.clone()} />
            <main class="main-content">
                <StatusNotice notice={None::<ErrorNotice>} />
            </main>
        </div>
    },
    | AppView::Failed(notice) => html! {
        <div class="layout">
            <Sidebar board={None::<Board>} state={state} on_event={on_event.clone()} />
            <main class="main-content">
                <StatusNotice notice={Some(notice.clone())} />
            </main>
        </div>
    },
    | AppView::Ready(board) => html! {
        <div class="layout">
            <Sidebar board={Some(board.clone())} state={state} on_event={on_event.clone()} />
            <main class="main-content">
                <TaskSummary
                    project_title={board.title().to_string()}
                    header={board.header()}
                />
                <CardList board={board.clone()} on_event={on_event.clone()} />
            </main>
        </div>
    }
  }
}
