use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Contractors, Home, NotFound, ProjectDetail},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/projeto/:id")]
    ProjectDetail { id: i32 },

    #[route("/contratantes")]
    Contractors {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
