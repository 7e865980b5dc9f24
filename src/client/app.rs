use dioxus::prelude::*;

use crate::client::components::{ToastContainer, Toasts};
use crate::client::config::ApiConfig;
use crate::client::router::Route;

/// Application root: provides the API configuration and the toast store to
/// the whole tree, then hands control to the router.
#[component]
pub fn App() -> Element {
    use_context_provider(ApiConfig::from_env);
    use_context_provider(Toasts::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
        ToastContainer {}
    }
}
