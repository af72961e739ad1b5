use serde::Serialize;
use tracing::debug;

use crate::card::{
  CardSlot,
  build_cards
};
use crate::error::BoardError;
use crate::model::{
  Project,
  Task
};
use crate::toggles::{
  DescriptionState,
  DescriptionToggles,
  SidebarState
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct NavEntry {
  pub index:  usize,
  pub title:  String,
  pub active: bool
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
)]
pub struct TaskHeader {
  pub title:       String,
  pub description: String
}

/// User interactions, keyed by task
/// position or asset id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
  SelectTask(usize),
  ToggleSidebar,
  ToggleDescription(String)
}

/// The loaded project plus everything
/// the UI shows about it: which task is
/// selected and which panels are
/// collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
  project:      Project,
  selected:     usize,
  sidebar:      SidebarState,
  descriptions: DescriptionToggles
}

impl Board {
  pub fn new(
    project: Project
  ) -> Result<Self, BoardError> {
    if project.tasks.is_empty() {
      return Err(BoardError::NoTasks);
    }

    Ok(Self {
      project,
      selected: 0,
      sidebar: SidebarState::default(),
      descriptions:
        DescriptionToggles::default()
    })
  }

  pub fn project(&self) -> &Project {
    &self.project
  }

  pub fn title(&self) -> &str {
    &self.project.title
  }

  pub fn selected_index(&self) -> usize {
    self.selected
  }

  pub fn selected_task(&self) -> &Task {
    &self.project.tasks[self.selected]
  }

  pub fn render_board(&self) -> Vec<NavEntry> {
    self
      .project
      .tasks
      .iter()
      .enumerate()
      .map(|(index, task)| NavEntry {
        index,
        title: task.title.clone(),
        active: index == self.selected
      })
      .collect()
  }

  /// Selects a task by position. Card
  /// descriptions of the newly shown
  /// task start expanded.
  #[tracing::instrument(skip(self))]
  pub fn select_task(
    &mut self,
    index: usize
  ) -> Result<&Task, BoardError> {
    let len = self.project.tasks.len();
    if index >= len {
      return Err(
        BoardError::IndexOutOfRange {
          index,
          len
        }
      );
    }

    self.selected = index;
    self.descriptions.reset();
    debug!(
      index,
      title = %self.selected_task().title,
      "selected task"
    );
    Ok(self.selected_task())
  }

  pub fn header(&self) -> TaskHeader {
    let task = self.selected_task();
    TaskHeader {
      title:       task.title.clone(),
      description: task
        .description
        .clone()
    }
  }

  pub fn cards(&self) -> Vec<CardSlot> {
    build_cards(
      &self.selected_task().assets
    )
  }

  pub fn sidebar(&self) -> SidebarState {
    self.sidebar
  }

  pub fn toggle_sidebar(
    &mut self
  ) -> SidebarState {
    self.sidebar = self.sidebar.toggled();
    self.sidebar
  }

  pub fn description_state(
    &self,
    asset_id: &str
  ) -> DescriptionState {
    self.descriptions.state(asset_id)
  }

  pub fn toggle_description(
    &mut self,
    asset_id: &str
  ) -> Result<DescriptionState, BoardError>
  {
    if self
      .selected_task()
      .asset(asset_id)
      .is_none()
    {
      return Err(
        BoardError::UnknownAsset {
          asset_id: asset_id.to_string()
        }
      );
    }

    Ok(self.descriptions.toggle(asset_id))
  }

  #[tracing::instrument(
    level = "debug",
    skip(self)
  )]
  pub fn apply(
    &mut self,
    event: BoardEvent
  ) -> Result<(), BoardError> {
    match event {
      | BoardEvent::SelectTask(index) => {
        self.select_task(index)?;
      }
      | BoardEvent::ToggleSidebar => {
        self.toggle_sidebar();
      }
      | BoardEvent::ToggleDescription(
        asset_id
      ) => {
        self.toggle_description(&asset_id)?;
      }
    }
    Ok(())
  }
}
