pub mod contractors;
pub mod home;
pub mod not_found;
pub mod project;

pub use contractors::Contractors;
pub use home::Home;
pub use not_found::NotFound;
pub use project::ProjectDetail;
