//! Content API client methods

use super::{ClientError, PublicCatalogClient};
use crate::types::{Collection, Course, CourseAttributes, CourseCollection};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

impl PublicCatalogClient {
    /// Fetch a paginated collection from `/api/<path>`.
    ///
    /// `path` is a collection name optionally followed by a query string,
    /// e.g. `courses?populate=*`.
    pub async fn fetch_content<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Collection<T>, ClientError> {
        let request = self.request(Method::GET, &format!("/api/{}", path.trim_start_matches('/')));

        self.execute(request).await.map_err(|err| {
            error!(path, kind = ?err.kind(), "Error fetching data: {err}");
            match err {
                ClientError::ServerRejected { status, .. } => ClientError::ServerRejected {
                    status,
                    message: format!("Error fetching data: {status}"),
                },
                other => other,
            }
        })
    }

    /// All courses with their authors populated
    pub async fn courses(&self) -> Result<CourseCollection, ClientError> {
        self.fetch_content("courses?populate=*").await
    }

    /// One page of courses
    pub async fn courses_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CourseCollection, ClientError> {
        self.fetch_content(&format!(
            "courses?populate=*&pagination[page]={page}&pagination[pageSize]={page_size}"
        ))
        .await
    }

    /// Look a course up by its slug
    pub async fn course_by_slug(&self, slug: &str) -> Result<Option<Course>, ClientError> {
        let slug: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
        let collection: Collection<CourseAttributes> = self
            .fetch_content(&format!("courses?filters[slug][$eq]={slug}&populate=*"))
            .await?;
        Ok(collection.data.into_iter().next())
    }
}
