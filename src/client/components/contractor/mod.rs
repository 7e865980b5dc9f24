pub mod form_modal;

pub use form_modal::ContractorFormModal;
