use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaFolderOpen, FaUsers, FaXmark};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

/// Persistent shell: top bar plus a collapsible sidebar with the two
/// top-level sections, rendering the active route below.
#[component]
pub fn Navbar() -> Element {
    let mut sidebar_open = use_signal(|| false);

    rsx! {
        div {
            class: "navbar bg-primary text-primary-content shadow-md",
            div {
                class: "navbar-start",
                button {
                    class: "btn btn-ghost btn-square",
                    onclick: move |_| sidebar_open.set(true),
                    Icon { width: 24, height: 24, icon: FaBars }
                }
            }
            div {
                class: "navbar-center",
                p { class: "text-xl font-semibold", "Gerenciador de Projetos" }
            }
            div { class: "navbar-end" }
        }

        if sidebar_open() {
            div {
                class: "fixed inset-0 bg-black/50 z-40",
                onclick: move |_| sidebar_open.set(false),
            }
            div { class: "fixed inset-y-0 left-0 w-64 bg-base-100 shadow-lg z-50",
                div { class: "p-4 flex justify-between items-center border-b border-base-300",
                    h2 { class: "text-lg font-semibold", "Menu" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                }
                nav { class: "p-4 flex flex-col gap-4",
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 hover:text-primary",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { width: 20, height: 20, icon: FaFolderOpen }
                        span { "Projetos" }
                    }
                    Link {
                        to: Route::Contractors {},
                        class: "flex items-center gap-2 hover:text-primary",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { width: 20, height: 20, icon: FaUsers }
                        span { "Contratantes" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
