use crate::middleware::not_found::not_found;
use crate::post::post_service::PostService;
use crate::router::index::routes;
use crate::utils::error::service_name;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use serde_json::json;
use std::net::TcpListener;

#[get("/")]
async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the blog posts API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

/// Builds the HTTP server on an already bound listener. The caller drives
/// the returned future and can stop it through `Server::handle`.
pub fn run(listener: TcpListener, post_service: PostService) -> std::io::Result<Server> {
    let post_service = web::Data::new(post_service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .service(welcome)
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
