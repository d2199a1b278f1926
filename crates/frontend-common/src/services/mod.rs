pub mod auth;
pub mod content;

pub use auth::AuthApiService;
pub use content::CourseService;
