use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Fixed-overlay dialog shell shared by every form and confirmation modal.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box relative max-w-2xl",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-3 top-3",
                    onclick: move |_| on_close.call(()),
                    Icon { width: 18, height: 18, icon: FaXmark }
                }
                h2 { class: "text-xl font-bold text-center mb-4", "{title}" }
                {children}
            }
        }
    }
}
