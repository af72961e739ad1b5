use std::collections::BTreeSet;

use serde::Serialize;

pub const COLLAPSED_CLASS: &str =
  "collapsed";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
  #[default]
  Expanded,
  Collapsed
}

impl SidebarState {
  pub fn toggled(self) -> Self {
    match self {
      | Self::Expanded => Self::Collapsed,
      | Self::Collapsed => Self::Expanded
    }
  }

  pub fn glyph(self) -> &'static str {
    match self {
      | Self::Expanded => "➡️",
      | Self::Collapsed => "⬅️"
    }
  }

  pub fn is_collapsed(self) -> bool {
    self == Self::Collapsed
  }

  pub fn class(self) -> Option<&'static str> {
    self
      .is_collapsed()
      .then_some(COLLAPSED_CLASS)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionState {
  #[default]
  Expanded,
  Collapsed
}

impl DescriptionState {
  pub fn toggled(self) -> Self {
    match self {
      | Self::Expanded => Self::Collapsed,
      | Self::Collapsed => Self::Expanded
    }
  }

  pub fn glyph(self) -> &'static str {
    match self {
      | Self::Expanded => "▼",
      | Self::Collapsed => "▶"
    }
  }

  pub fn is_collapsed(self) -> bool {
    self == Self::Collapsed
  }

  pub fn class(self) -> Option<&'static str> {
    self
      .is_collapsed()
      .then_some(COLLAPSED_CLASS)
  }
}

/// Per-asset description disclosure.
/// Only collapsed ids are stored; any
/// other id reads as expanded.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DescriptionToggles {
  collapsed: BTreeSet<String>
}

impl DescriptionToggles {
  pub fn state(
    &self,
    asset_id: &str
  ) -> DescriptionState {
    if self.collapsed.contains(asset_id) {
      DescriptionState::Collapsed
    } else {
      DescriptionState::Expanded
    }
  }

  pub fn toggle(
    &mut self,
    asset_id: &str
  ) -> DescriptionState {
    if !self.collapsed.remove(asset_id) {
      self
        .collapsed
        .insert(asset_id.to_string());
    }
    self.state(asset_id)
  }

  pub fn reset(&mut self) {
    self.collapsed.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::{
    DescriptionState,
    DescriptionToggles,
    SidebarState
  };

  #[test]
  fn sidebar_toggle_swaps_glyph_and_class() {
    let state = SidebarState::default();
    assert_eq!(state.glyph(), "➡️");
    assert_eq!(state.class(), None);

    let collapsed = state.toggled();
    assert_eq!(collapsed.glyph(), "⬅️");
    assert_eq!(
      collapsed.class(),
      Some("collapsed")
    );
    assert_eq!(collapsed.toggled(), state);
  }

  #[test]
  fn description_double_toggle_restores_state_and_glyph()
   {
    let mut toggles =
      DescriptionToggles::default();
    let before = toggles.state("a");
    assert_eq!(before.glyph(), "▼");

    assert_eq!(
      toggles.toggle("a"),
      DescriptionState::Collapsed
    );
    assert_eq!(
      toggles.state("a").glyph(),
      "▶"
    );
    assert_eq!(toggles.toggle("a"), before);
    assert_eq!(
      toggles.state("a").glyph(),
      before.glyph()
    );
  }

  #[test]
  fn toggles_for_different_assets_are_independent()
   {
    let mut toggles =
      DescriptionToggles::default();
    toggles.toggle("a");
    assert!(toggles.state("a").is_collapsed());
    assert!(!toggles.state("b").is_collapsed());

    toggles.toggle("b");
    toggles.toggle("a");
    assert!(!toggles.state("a").is_collapsed());
    assert!(toggles.state("b").is_collapsed());
  }
}
