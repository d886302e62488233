use api::ProjectStatus;
use dioxus::prelude::*;

/// Stylesheet modifier class for a project status.
pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Pending => "status-pending",
        ProjectStatus::InReview => "status-in-review",
        ProjectStatus::Approved => "status-approved",
        ProjectStatus::Rejected => "status-rejected",
        ProjectStatus::InProgress => "status-in-progress",
        ProjectStatus::Completed => "status-completed",
    }
}

/// Pill badge showing a submission's status.
#[component]
pub fn StatusBadge(status: ProjectStatus) -> Element {
    rsx! {
        span {
            class: "status-badge {status_class(status)}",
            "{status.label()}"
        }
    }
}
