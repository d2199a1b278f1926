//! Wire types of the content and identity APIs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A paginated collection response: `{ data: [...], meta: { pagination } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<Entry<T>>,
    pub meta: Meta,
}

/// A single content entry: `{ id, attributes: {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: u64,
    pub attributes: T,
}

/// A populated relation nested in an entry's attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation<T> {
    pub data: Vec<Entry<T>>,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl Pagination {
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAttributes {
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub creation_date: String,
    /// Length in minutes
    pub duration: u32,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
    /// Empty unless the request asked for `populate`
    #[serde(default)]
    pub authors: Relation<AuthorAttributes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttributes {
    pub author_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

pub type Course = Entry<CourseAttributes>;
pub type Author = Entry<AuthorAttributes>;
pub type CourseCollection = Collection<CourseAttributes>;

impl CourseAttributes {
    /// Author names joined for display
    pub fn author_names(&self) -> String {
        self.authors
            .data
            .iter()
            .map(|author| author.attributes.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Login request body
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginData {
    /// Username or email
    pub identifier: String,
    pub password: String,
}

/// Registration request body
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrationData {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginData")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for RegistrationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationData")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful register/login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    pub email: String,
}

/// `GET /api/users/me` response; only the name is needed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub username: Option<String>,
}

/// Error body returned by the identity endpoints: `{ error: { message } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the human-readable message from a raw response body
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|body| body.error)
            .and_then(|detail| detail.message)
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_collection_deserializes() {
        let body = json!({
            "data": [{
                "id": 1,
                "attributes": {
                    "courseId": "C-101",
                    "title": "Rust basics",
                    "description": "Ownership and borrowing",
                    "creationDate": "2024-01-05",
                    "duration": 125,
                    "slug": "rust-basics",
                    "createdAt": "2024-01-05T10:00:00.000Z",
                    "updatedAt": "2024-01-06T10:00:00.000Z",
                    "publishedAt": "2024-01-06T10:00:00.000Z",
                    "authors": {
                        "data": [{
                            "id": 7,
                            "attributes": {
                                "authorId": "A-7",
                                "name": "Ada",
                                "createdAt": "2024-01-01T00:00:00.000Z",
                                "updatedAt": "2024-01-01T00:00:00.000Z",
                                "publishedAt": null
                            }
                        }]
                    }
                }
            }],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 1 } }
        });

        let collection: CourseCollection = serde_json::from_value(body).unwrap();
        assert_eq!(collection.data.len(), 1);
        let course = &collection.data[0];
        assert_eq!(course.id, 1);
        assert_eq!(course.attributes.duration, 125);
        assert_eq!(course.attributes.author_names(), "Ada");
        assert_eq!(collection.meta.pagination.page_size, 25);
        assert!(!collection.meta.pagination.has_next());
        assert!(!collection.meta.pagination.has_previous());
    }

    #[test]
    fn test_authors_default_when_not_populated() {
        let attributes: CourseAttributes = serde_json::from_value(json!({
            "courseId": "C-1",
            "title": "t",
            "description": "d",
            "creationDate": "2024-01-05",
            "duration": 30,
            "slug": "t",
            "createdAt": "2024-01-05T10:00:00.000Z",
            "updatedAt": "2024-01-05T10:00:00.000Z",
            "publishedAt": null
        }))
        .unwrap();
        assert!(attributes.authors.data.is_empty());
        assert_eq!(attributes.author_names(), "");
    }

    #[test]
    fn test_error_body_message() {
        let body = r#"{"data":null,"error":{"status":400,"name":"ValidationError","message":"Invalid identifier or password"}}"#;
        assert_eq!(
            ErrorBody::message_from(body).as_deref(),
            Some("Invalid identifier or password")
        );
        assert_eq!(ErrorBody::message_from("Bad Gateway"), None);
        assert_eq!(ErrorBody::message_from(r#"{"error":{"message":""}}"#), None);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let login = LoginData {
            identifier: "ada".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{login:?}");
        assert!(debug.contains("ada"));
        assert!(!debug.contains("hunter2"));
    }
}
