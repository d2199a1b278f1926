//! Course content service

use crate::client::{ClientError, create_public_client};
use catalog_http::types::{Course, CourseCollection};

/// Number of courses shown per catalog page
pub const COURSES_PER_PAGE: u32 = 9;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseService;

impl CourseService {
    pub const fn new() -> Self {
        Self
    }

    /// One page of the course catalog, authors populated
    pub async fn list(&self, page: u32) -> Result<CourseCollection, ClientError> {
        let client = create_public_client()?;
        client.courses_page(page.max(1), COURSES_PER_PAGE).await
    }

    /// A single course, `None` when the slug is unknown
    pub async fn by_slug(&self, slug: &str) -> Result<Option<Course>, ClientError> {
        let client = create_public_client()?;
        client.course_by_slug(slug).await
    }
}
