use trailhead_shared::mount;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskSummaryProps {
  pub project_title: String,
  pub header:        trailhead_shared::TaskHeader
}

#[function_component(TaskSummary)]
pub fn task_summary(
  props: &TaskSummaryProps
) -> Html {
  html! {
      <>
          <h1 id={mount::PROJECT_TITLE}>{ &props.project_title }</h1>
          <div class="task-header">
              <h2 id={mount::TASK_TITLE}>{ &props.header.title }</h2>
              <p id={mount::TASK_DESCRIPTION}>{ &props.header.description }</p>
          </div>
      </>
  }
}
