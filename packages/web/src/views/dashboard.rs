//! Dashboard view: aggregate counts and the latest submissions.

use api::projects::ProjectListParams;
use api::auth::UserListParams;
use api::gallery::GalleryListParams;
use api::{ApiError, GalleryItem, GalleryPage, Project, ProjectPage, ProjectStatus, UserPage};
use dioxus::prelude::*;
use ui::icons::{
    FaCircleCheck, FaCircleXmark, FaClock, FaFolderOpen, FaGauge, FaImage, FaUsers,
};
use ui::{auth_service, gallery_service, project_service, surface_error, Icon, Spinner, StatusBadge};

#[derive(Debug, Clone, Default, PartialEq)]
struct DashboardStats {
    total_projects: usize,
    pending_projects: usize,
    approved_projects: usize,
    rejected_projects: usize,
    total_gallery: usize,
    active_gallery: usize,
    total_users: u64,
}

impl DashboardStats {
    /// Aggregate counts. "Approved" rolls up everything at or past approval.
    fn compute(projects: &[Project], gallery: &[GalleryItem], total_users: u64) -> Self {
        let by_status = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total_projects: projects.len(),
            pending_projects: by_status(ProjectStatus::Pending),
            approved_projects: by_status(ProjectStatus::Approved)
                + by_status(ProjectStatus::InProgress)
                + by_status(ProjectStatus::Completed),
            rejected_projects: by_status(ProjectStatus::Rejected),
            total_gallery: gallery.len(),
            active_gallery: gallery.iter().filter(|g| g.is_active).count(),
            total_users,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct DashboardData {
    stats: DashboardStats,
    recent: Vec<Project>,
}

/// Combine the three concurrent reads. Only the user count is allowed to
/// fail — it defaults to zero; a failed projects or gallery read fails the
/// whole load.
fn combine(
    projects: Result<ProjectPage, ApiError>,
    gallery: Result<GalleryPage, ApiError>,
    users: Result<UserPage, ApiError>,
) -> Result<DashboardData, ApiError> {
    let total_users = match users {
        Ok(page) => page.pagination.total_users,
        Err(e) => {
            tracing::warn!(error = %e, "user count unavailable, defaulting to zero");
            0
        }
    };
    let projects = projects?.projects;
    let gallery = gallery?.gallery_items;

    Ok(DashboardData {
        stats: DashboardStats::compute(&projects, &gallery, total_users),
        recent: projects.into_iter().take(5).collect(),
    })
}

async fn load_dashboard() -> Result<DashboardData, ApiError> {
    let project_svc = project_service();
    let gallery_svc = gallery_service();
    let auth_svc = auth_service();

    // Three independent reads fired together and awaited as one
    let project_params = ProjectListParams::recent_first(100, None);
    let gallery_params = GalleryListParams::with_limit(100);
    let user_params = UserListParams::recent_first(1, 1);
    let (projects, gallery, users) = futures::join!(
        project_svc.all(&project_params),
        gallery_svc.all(&gallery_params),
        auth_svc.all_users(&user_params),
    );
    combine(projects, gallery, users)
}

#[component]
pub fn Dashboard() -> Element {
    let data = use_resource(load_dashboard);

    match &*data.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(e)) => {
            let message = surface_error(e);
            rsx! {
                div { class: "error-banner", "Failed to load dashboard: {message}" }
            }
        }
        Some(Ok(data)) => {
            let stats = &data.stats;
            rsx! {
                div {
                    class: "page",

                    div {
                        class: "page-head",
                        Icon { icon: FaGauge, width: 30, height: 30 }
                        div {
                            h1 { class: "page-title", "Dashboard" }
                            p { class: "page-sub", "Welcome to MustardWorks Admin" }
                        }
                    }

                    div {
                        class: "stat-grid",
                        StatCard {
                            title: "Total Projects",
                            value: stats.total_projects.to_string(),
                            tone: "primary",
                            Icon { icon: FaFolderOpen, width: 22, height: 22 }
                        }
                        StatCard {
                            title: "Pending Review",
                            value: stats.pending_projects.to_string(),
                            tone: "warning",
                            Icon { icon: FaClock, width: 22, height: 22 }
                        }
                        StatCard {
                            title: "Approved",
                            value: stats.approved_projects.to_string(),
                            tone: "success",
                            Icon { icon: FaCircleCheck, width: 22, height: 22 }
                        }
                        StatCard {
                            title: "Rejected",
                            value: stats.rejected_projects.to_string(),
                            tone: "danger",
                            Icon { icon: FaCircleXmark, width: 22, height: 22 }
                        }
                        StatCard {
                            title: "Gallery Items",
                            value: "{stats.active_gallery}/{stats.total_gallery}",
                            tone: "accent",
                            Icon { icon: FaImage, width: 22, height: 22 }
                        }
                        StatCard {
                            title: "Registered Users",
                            value: stats.total_users.to_string(),
                            tone: "info",
                            Icon { icon: FaUsers, width: 22, height: 22 }
                        }
                    }

                    div {
                        class: "card",
                        h2 { class: "card-title", "Recent Project Submissions" }
                        if data.recent.is_empty() {
                            p { class: "empty-state", "No projects yet" }
                        } else {
                            div {
                                class: "recent-list",
                                for project in &data.recent {
                                    div {
                                        key: "{project.id}",
                                        class: "recent-row",
                                        div {
                                            class: "recent-meta",
                                            h3 { "{project.user_name}" }
                                            p { "{project.project_type} • {project.email}" }
                                        }
                                        StatusBadge { status: project.status }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String, tone: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div {
                class: "stat-icon stat-{tone}",
                {children}
            }
            h3 { class: "stat-value", "{value}" }
            p { class: "stat-label", "{title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Pagination;

    fn project(status: ProjectStatus) -> Project {
        Project {
            id: format!("p-{}", status.as_str()),
            user_name: "Ravi".into(),
            email: "ravi@example.com".into(),
            project_type: "IoT".into(),
            budget: None,
            timeline: None,
            description: String::new(),
            status,
            submitted_at: None,
        }
    }

    fn item(is_active: bool) -> GalleryItem {
        GalleryItem {
            id: "g".into(),
            title: "Drone".into(),
            description: String::new(),
            category: Default::default(),
            image: String::new(),
            is_active,
        }
    }

    fn pages(
        statuses: &[ProjectStatus],
        active: &[bool],
        users: u64,
    ) -> (ProjectPage, GalleryPage, UserPage) {
        (
            ProjectPage {
                projects: statuses.iter().map(|s| project(*s)).collect(),
                pagination: Pagination::default(),
            },
            GalleryPage {
                gallery_items: active.iter().map(|a| item(*a)).collect(),
                pagination: Pagination::default(),
            },
            UserPage {
                users: Vec::new(),
                pagination: Pagination {
                    total_users: users,
                    ..Pagination::default()
                },
            },
        )
    }

    #[test]
    fn test_stats_roll_up_in_progress_and_completed_as_approved() {
        let (projects, gallery, _) = pages(
            &[
                ProjectStatus::Pending,
                ProjectStatus::Approved,
                ProjectStatus::InProgress,
                ProjectStatus::Completed,
                ProjectStatus::Rejected,
                ProjectStatus::InReview,
            ],
            &[true, false, true],
            0,
        );
        let stats = DashboardStats::compute(&projects.projects, &gallery.gallery_items, 7);
        assert_eq!(stats.total_projects, 6);
        assert_eq!(stats.pending_projects, 1);
        assert_eq!(stats.approved_projects, 3);
        assert_eq!(stats.rejected_projects, 1);
        assert_eq!(stats.total_gallery, 3);
        assert_eq!(stats.active_gallery, 2);
        assert_eq!(stats.total_users, 7);
    }

    #[test]
    fn test_user_count_failure_is_tolerated() {
        let (projects, gallery, _) = pages(&[ProjectStatus::Pending], &[true], 0);
        let data = combine(
            Ok(projects),
            Ok(gallery),
            Err(ApiError::Backend {
                status: 500,
                message: "boom".into(),
            }),
        )
        .unwrap();
        assert_eq!(data.stats.total_users, 0);
        assert_eq!(data.stats.total_projects, 1);
    }

    #[test]
    fn test_gallery_failure_fails_the_load() {
        let (projects, _, users) = pages(&[ProjectStatus::Pending], &[], 12);
        let result = combine(
            Ok(projects),
            Err(ApiError::Backend {
                status: 502,
                message: "bad gateway".into(),
            }),
            Ok(users),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_projects_failure_fails_the_load() {
        let (_, gallery, users) = pages(&[], &[true], 12);
        let result = combine(
            Err(ApiError::Unauthorized {
                message: String::new(),
            }),
            Ok(gallery),
            Ok(users),
        );
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn test_recent_keeps_at_most_five() {
        let statuses = [ProjectStatus::Pending; 8];
        let (projects, gallery, users) = pages(&statuses, &[], 0);
        let data = combine(Ok(projects), Ok(gallery), Ok(users)).unwrap();
        assert_eq!(data.recent.len(), 5);
    }
}
