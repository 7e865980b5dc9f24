use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Página não encontrada" }
            p { class: "opacity-70", "O endereço acessado não existe." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Voltar para os projetos" }
        }
    )
}
