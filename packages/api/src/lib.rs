//! # API crate — REST client layer for the MustardWorks admin console
//!
//! Everything the views need to talk to the external backend lives here: the
//! HTTP adapter that every call passes through, the tolerant response-envelope
//! normalization, the domain models, and one thin service client per backend
//! domain.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` — bearer-token attach, cross-origin credentials, status/error mapping, 401 session clearing |
//! | [`envelope`] | Ordered extraction strategies over the backend's response envelope shapes |
//! | [`error`] | `ApiError` taxonomy: `Unauthorized`, `Backend`, `Transport`, `Decode` |
//! | [`models`] | Users, project submissions, gallery items, pagination |
//! | [`auth`] | Login / current-user / logout / users listing |
//! | [`projects`] | Project submission queue: list, status transition, delete |
//! | [`gallery`] | Gallery curation: list, create, partial update, delete, categories |
//!
//! The session store is injected into [`client::ApiClient`] at construction,
//! so every service can run against an in-memory store in tests.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod gallery;
pub mod models;
pub mod projects;

pub use auth::{AuthService, Credentials};
pub use client::ApiClient;
pub use error::ApiError;
pub use gallery::GalleryService;
pub use models::{
    GalleryCategory, GalleryItem, GalleryItemDraft, GalleryItemPatch, GalleryPage, Pagination,
    Project, ProjectPage, ProjectStatus, Role, User, UserPage,
};
pub use projects::ProjectService;

/// Fallback backend base URL used when `MUSTARDWORKS_API_URL` is not set at
/// compile time.
pub const DEFAULT_BASE_URL: &str = "http://mustardworks-backend.onrender.com/api";

/// The backend base URL for this build.
pub fn base_url() -> &'static str {
    option_env!("MUSTARDWORKS_API_URL").unwrap_or(DEFAULT_BASE_URL)
}
