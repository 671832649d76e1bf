use crate::post::post_model::{BlogPostResponse, CreatePostRequest, UpdatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::ApiError;
use actix_web::{HttpResponse, web};

/// GET /posts
pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, ApiError> {
    let posts: Vec<BlogPostResponse> = post_service
        .list_posts()
        .await?
        .into_iter()
        .map(BlogPostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, ApiError> {
    let post_id = post_id.into_inner();
    let post = post_service
        .get_post(&post_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_post = body.into_inner().validate()?;
    let post = post_service.create_post(new_post).await?;

    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let post_id = post_id.into_inner();
    let changes = body.into_inner().validate(&post_id)?;

    let post = post_service
        .update_post(&post_id, changes)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, ApiError> {
    let post_id = post_id.into_inner();

    if post_service.delete_post(&post_id).await? {
        log::info!("deleted post {post_id}");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound("Post not found".into()))
    }
}
