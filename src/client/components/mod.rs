pub mod confirm_delete;
pub mod contractor;
pub mod file_upload;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod project;
pub mod status_badge;
pub mod task;
pub mod toast;

pub use confirm_delete::ConfirmDeleteModal;
pub use file_upload::FileUpload;
pub use modal::Modal;
pub use navbar::Navbar;
pub use page::Page;
pub use status_badge::{ProjectStatusBadge, TaskStatusBadge};
pub use toast::{ToastContainer, Toasts};
