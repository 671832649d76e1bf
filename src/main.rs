use blog_posts_api::config::Config;
use blog_posts_api::database::db::connect_to_mongo;
use blog_posts_api::post::post_service::PostService;
use blog_posts_api::startup::run;
use env_logger::Env;
use log::info;
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let database = connect_to_mongo(&config)
        .await
        .map_err(std::io::Error::other)?;
    let post_service = PostService::new(&database.db);

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    info!("Starting server on http://{}", listener.local_addr()?);

    run(listener, post_service)?.await?;

    info!("Server has stopped");

    Ok(())
}
