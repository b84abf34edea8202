//! 各界面的数据状态

mod dashboard;
mod editor;
mod modal;

pub use dashboard::DashboardState;
pub use editor::{EditorField, EditorState};
pub use modal::{Modal, ModalState};
