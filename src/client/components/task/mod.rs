pub mod add_modal;
pub mod details_modal;
pub mod edit_modal;
pub mod form;

pub use add_modal::AddTaskModal;
pub use details_modal::TaskDetailsModal;
pub use edit_modal::EditTaskModal;
