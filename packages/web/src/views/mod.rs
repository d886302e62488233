mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod projects;
pub use projects::Projects;

mod gallery;
pub use gallery::Gallery;

mod users;
pub use users::Users;
