use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen bg-base-200 p-6 {class}",
            {children}
        }
    )
}
