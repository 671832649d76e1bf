use crate::post::post_model::{BlogPost, NewPost, PostChanges, parse_post_id};
use crate::utils::error::ApiError;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, to_bson},
    options::ReturnDocument,
};

pub const COLLECTION_NAME: &str = "blogposts";

#[derive(Clone)]
pub struct PostService {
    collection: Collection<BlogPost>,
}

impl PostService {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<BlogPost>(COLLECTION_NAME);
        PostService { collection }
    }

    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        let posts: Vec<BlogPost> = cursor.try_collect().await?;
        Ok(posts)
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<BlogPost>, ApiError> {
        let object_id = parse_post_id(id)?;
        let post = self.collection.find_one(doc! { "_id": object_id }).await?;
        Ok(post)
    }

    pub async fn create_post(&self, new_post: NewPost) -> Result<BlogPost, ApiError> {
        let post = BlogPost::new(new_post.author, new_post.title, new_post.content);
        self.collection.insert_one(&post).await?;
        log::debug!("created post {}", post.id);
        Ok(post)
    }

    /// Applies `changes` and returns the document as it reads afterwards.
    /// `_id` and `created` are never part of the update. `changes` must set
    /// at least one field, which `UpdatePostRequest::validate` guarantees.
    pub async fn update_post(
        &self,
        id: &str,
        changes: PostChanges,
    ) -> Result<Option<BlogPost>, ApiError> {
        let object_id = parse_post_id(id)?;

        let mut set = Document::new();
        if let Some(author) = changes.author {
            let author = to_bson(&author)
                .map_err(|e| ApiError::Internal(format!("Failed to encode author: {e}")))?;
            set.insert("author", author);
        }
        if let Some(title) = changes.title {
            set.insert("title", title);
        }
        if let Some(content) = changes.content {
            set.insert("content", content);
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    pub async fn delete_post(&self, id: &str) -> Result<bool, ApiError> {
        let object_id = parse_post_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn count_posts(&self) -> Result<u64, ApiError> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    /// Bulk insert used to populate the collection with fixture data.
    pub async fn seed_posts(&self, posts: &[BlogPost]) -> Result<usize, ApiError> {
        if posts.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(posts).await?;
        log::info!("seeded {} posts", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }
}

