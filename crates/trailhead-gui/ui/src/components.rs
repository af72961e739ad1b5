mod card_body;
mod card_list;
mod card_view;
mod sidebar;
mod status_notice;
mod task_summary;

pub use card_body::CardBody;
pub use card_list::CardList;
pub use card_view::CardView;
pub use sidebar::Sidebar;
pub use status_notice::StatusNotice;
pub use task_summary::TaskSummary;
