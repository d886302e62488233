//! Project submission queue: searchable table, status transitions, deletion.

use api::projects::ProjectListParams;
use api::{Project, ProjectStatus};
use dioxus::prelude::*;
use ui::icons::{FaCalendarDays, FaEnvelope, FaEye, FaFolderOpen, FaMagnifyingGlass, FaTrash, FaUser};
use ui::{confirm, project_service, surface_error, Icon, Spinner, StatusBadge};

#[component]
pub fn Projects() -> Element {
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| Option::<ProjectStatus>::None);
    let mut selected = use_signal(|| Option::<Project>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    // Refetches whenever the status filter changes; search stays client-side
    let mut data = use_resource(move || async move {
        project_service()
            .all(&ProjectListParams::recent_first(100, status_filter()))
            .await
    });

    match &*data.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(e)) => {
            let message = surface_error(e);
            rsx! {
                div { class: "error-banner", "Failed to load projects: {message}" }
            }
        }
        Some(Ok(page)) => {
            let term = search().to_lowercase();
            let filtered: Vec<Project> = page
                .projects
                .iter()
                .filter(|p| {
                    p.user_name.to_lowercase().contains(&term)
                        || p.email.to_lowercase().contains(&term)
                        || p.project_type.to_lowercase().contains(&term)
                })
                .cloned()
                .collect();
            let count = filtered.len();

            rsx! {
                div {
                    class: "page",

                    div {
                        class: "page-head",
                        Icon { icon: FaFolderOpen, width: 30, height: 30 }
                        div {
                            h1 { class: "page-title", "Project Submissions" }
                            p { class: "page-sub", "{count} projects found" }
                        }
                    }

                    if let Some(err) = action_error() {
                        div { class: "error-banner", "{err}" }
                    }

                    div {
                        class: "toolbar",
                        div {
                            class: "search-box",
                            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search by name, email, or project type...",
                                value: search(),
                                oninput: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                        select {
                            class: "filter-select",
                            onchange: move |evt: FormEvent| {
                                status_filter.set(ProjectStatus::parse(&evt.value()));
                            },
                            option { value: "all", selected: status_filter().is_none(), "All Status" }
                            for status in ProjectStatus::ALL {
                                option {
                                    value: "{status.as_str()}",
                                    selected: status_filter() == Some(status),
                                    "{status.label()}"
                                }
                            }
                        }
                    }

                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Submitter" }
                                    th { "Project Type" }
                                    th { "Budget" }
                                    th { "Status" }
                                    th { "Submitted" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                if filtered.is_empty() {
                                    tr {
                                        td { colspan: 6, class: "empty-state", "No projects found" }
                                    }
                                } else {
                                    for project in filtered {
                                        ProjectRow {
                                            key: "{project.id}",
                                            project: project.clone(),
                                            on_view: move |project| selected.set(Some(project)),
                                            on_status: move |(id, status): (String, ProjectStatus)| {
                                                spawn(async move {
                                                    match project_service().update_status(&id, status).await {
                                                        Ok(_) => {
                                                            action_error.set(None);
                                                            data.restart();
                                                        }
                                                        Err(e) => action_error.set(Some(surface_error(&e))),
                                                    }
                                                });
                                            },
                                            on_delete: move |id: String| {
                                                if !confirm("Are you sure you want to delete this project?") {
                                                    return;
                                                }
                                                spawn(async move {
                                                    match project_service().delete(&id).await {
                                                        Ok(()) => {
                                                            action_error.set(None);
                                                            data.restart();
                                                        }
                                                        Err(e) => action_error.set(Some(surface_error(&e))),
                                                    }
                                                });
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(project) = selected() {
                        ProjectDetailsModal {
                            project: project.clone(),
                            on_close: move |_| selected.set(None),
                            on_status_change: move |status: ProjectStatus| {
                                let id = project.id.clone();
                                selected.set(None);
                                spawn(async move {
                                    match project_service().update_status(&id, status).await {
                                        Ok(_) => {
                                            action_error.set(None);
                                            data.restart();
                                        }
                                        Err(e) => action_error.set(Some(surface_error(&e))),
                                    }
                                });
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    on_view: EventHandler<Project>,
    on_status: EventHandler<(String, ProjectStatus)>,
    on_delete: EventHandler<String>,
) -> Element {
    let budget = project.budget.clone().unwrap_or_else(|| "N/A".to_string());
    let submitted = project
        .submitted_at
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let view_project = project.clone();
    let status_id = project.id.clone();
    let delete_id = project.id.clone();

    rsx! {
        tr {
            td {
                div { class: "cell-primary", "{project.user_name}" }
                div { class: "cell-secondary", "{project.email}" }
            }
            td {
                span { class: "type-tag", "{project.project_type}" }
            }
            td { "{budget}" }
            td {
                select {
                    class: "status-select",
                    onchange: move |evt: FormEvent| {
                        if let Some(status) = ProjectStatus::parse(&evt.value()) {
                            on_status.call((status_id.clone(), status));
                        }
                    },
                    for status in ProjectStatus::ALL {
                        option {
                            value: "{status.as_str()}",
                            selected: project.status == status,
                            "{status.label()}"
                        }
                    }
                }
            }
            td { class: "cell-secondary", "{submitted}" }
            td {
                div {
                    class: "actions",
                    button {
                        class: "icon-btn",
                        title: "View Details",
                        onclick: move |_| on_view.call(view_project.clone()),
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectDetailsModal(
    project: Project,
    on_close: EventHandler<()>,
    on_status_change: EventHandler<ProjectStatus>,
) -> Element {
    let budget = project.budget.clone().unwrap_or_else(|| "N/A".to_string());
    let timeline = project.timeline.clone().unwrap_or_else(|| "N/A".to_string());
    let submitted = project
        .submitted_at
        .map(|d| d.format("%b %e, %Y %H:%M").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "modal-head",
                    h2 { "Project Details" }
                }

                div {
                    class: "modal-body",

                    div {
                        class: "info-grid",
                        InfoField { label: "Name", value: project.user_name.clone(),
                            Icon { icon: FaUser, width: 16, height: 16 } }
                        InfoField { label: "Email", value: project.email.clone(),
                            Icon { icon: FaEnvelope, width: 16, height: 16 } }
                        InfoField { label: "Type", value: project.project_type.clone(),
                            Icon { icon: FaFolderOpen, width: 16, height: 16 } }
                        InfoField { label: "Budget", value: budget,
                            Icon { icon: FaFolderOpen, width: 16, height: 16 } }
                        InfoField { label: "Timeline", value: timeline,
                            Icon { icon: FaCalendarDays, width: 16, height: 16 } }
                        InfoField { label: "Submitted", value: submitted,
                            Icon { icon: FaCalendarDays, width: 16, height: 16 } }
                    }

                    div {
                        class: "info-field",
                        span { class: "info-label", "Description" }
                        div { class: "description-box", p { "{project.description}" } }
                    }

                    div {
                        class: "info-field",
                        span { class: "info-label", "Current Status" }
                        StatusBadge { status: project.status }
                    }

                    div {
                        class: "info-field",
                        span { class: "info-label", "Update Status" }
                        div {
                            class: "status-options",
                            for status in ProjectStatus::ALL {
                                button {
                                    class: if project.status == status { "status-option status-option-active" } else { "status-option" },
                                    onclick: move |_| on_status_change.call(status),
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "modal-foot",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn InfoField(label: &'static str, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "info-field",
            span {
                class: "info-label",
                {children}
                "{label}"
            }
            p { class: "info-value", "{value}" }
        }
    }
}
