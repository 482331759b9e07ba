//! Widgets
//!
//! Each widget borrows presenter state from `model` and draws it; none of
//! them hold state of their own.

pub mod dialog_frame;
pub mod editor_form;
pub mod landing;
pub mod notification_stack;
pub mod user_table;

pub use dialog_frame::DialogFrame;
pub use editor_form::EditorForm;
pub use landing::Landing;
pub use notification_stack::NotificationStack;
pub use user_table::UserTable;
