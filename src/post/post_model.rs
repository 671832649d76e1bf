use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::utils::error::ApiError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

/// A blog post as stored in the `blogposts` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: Author,
    pub title: String,
    pub content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(author: Author, title: String, content: String) -> Self {
        BlogPost {
            id: ObjectId::new(),
            author,
            title,
            content,
            // BSON dates hold milliseconds
            created: Utc::now().trunc_subsecs(3),
        }
    }
}

/// The shape a post takes in API responses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogPostResponse {
    pub id: String,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        BlogPostResponse {
            id: post.id.to_hex(),
            author: post.author,
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

/// Validated input for a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

/// The mutable fields of a post; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
}

pub fn parse_post_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(format!("Invalid post ID `{id}`")))
}

fn missing(field: &str) -> ApiError {
    ApiError::Validation(format!("Missing `{field}` in request body"))
}

fn require_text(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn check_author(author: &Author) -> Result<(), ApiError> {
    if author.first_name.trim().is_empty() {
        return Err(missing("author.firstName"));
    }
    if author.last_name.trim().is_empty() {
        return Err(missing("author.lastName"));
    }
    Ok(())
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, ApiError> {
        let title = require_text("title", self.title)?;
        let content = require_text("content", self.content)?;
        let author = self.author.ok_or_else(|| missing("author"))?;
        check_author(&author)?;

        Ok(NewPost {
            author,
            title,
            content,
        })
    }
}

impl UpdatePostRequest {
    /// Checks the body against the id taken from the path.
    pub fn validate(self, path_id: &str) -> Result<PostChanges, ApiError> {
        if let Some(body_id) = &self.id {
            if parse_post_id(body_id)? != parse_post_id(path_id)? {
                return Err(ApiError::Validation(format!(
                    "Request path id ({path_id}) and request body id ({body_id}) must match"
                )));
            }
        }

        if self.title.is_none() && self.content.is_none() && self.author.is_none() {
            return Err(ApiError::Validation(
                "Request body must contain at least one of `title`, `content`, `author`".into(),
            ));
        }

        let title = self
            .title
            .map(|t| require_text("title", Some(t)))
            .transpose()?;
        let content = self
            .content
            .map(|c| require_text("content", Some(c)))
            .transpose()?;
        if let Some(author) = &self.author {
            check_author(author)?;
        }

        Ok(PostChanges {
            author: self.author,
            title,
            content,
        })
    }
}
