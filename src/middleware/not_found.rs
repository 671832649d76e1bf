use crate::utils::error::service_name;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Fallback for requests that match no route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!("no route for {} {}", req.method(), req.path());

    HttpResponse::build(StatusCode::NOT_FOUND).json(json!({
        "success": false,
        "message": "Route does not exist",
        "httpStatusCode": StatusCode::NOT_FOUND.as_u16(),
        "error": "NOT_FOUND_ERROR",
        "service": service_name(),
    }))
}
