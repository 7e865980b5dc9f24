use dioxus::prelude::*;

use crate::model::project::ProjectStatus;
use crate::model::task::TaskStatus;

// Same palette as the original cards: green when done, blue while running,
// yellow before work starts.

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> Element {
    let class = match status {
        ProjectStatus::Done => "badge badge-success text-white",
        ProjectStatus::InProgress => "badge badge-info text-white",
        ProjectStatus::Planned => "badge badge-warning",
    };
    rsx!(span { class: "{class}", "{status}" })
}

#[component]
pub fn TaskStatusBadge(status: TaskStatus) -> Element {
    let class = match status {
        TaskStatus::Done => "badge badge-success text-white",
        TaskStatus::InProgress => "badge badge-info text-white",
        TaskStatus::Pending => "badge badge-warning",
    };
    rsx!(span { class: "{class}", "{status}" })
}
