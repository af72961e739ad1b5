pub mod board;
pub mod card;
pub mod error;
pub mod fragment;
pub mod kind;
pub mod loader;
pub mod model;
pub mod mount;
pub mod toggles;

pub use board::{
  Board,
  BoardEvent,
  NavEntry,
  TaskHeader
};
pub use card::{
  AssetCard,
  CardSlot,
  build_card,
  build_cards
};
pub use error::{
  BoardError,
  CardError,
  IntegrityError,
  LoadError,
  SourceError,
  SourceErrorKind
};
pub use fragment::{
  ContentFragment,
  FormField,
  InputKind,
  ResourceLink,
  classify_and_render
};
pub use kind::AssetKind;
pub use loader::{
  DataSource,
  ErrorNotice,
  Loaded,
  SourceOrigin,
  SourceSet,
  load_project
};
pub use model::{
  Asset,
  Project,
  Task
};
pub use toggles::{
  DescriptionState,
  DescriptionToggles,
  SidebarState
};
