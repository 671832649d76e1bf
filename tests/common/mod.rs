//! Test harness: a real server on an ephemeral port backed by a throwaway
//! MongoDB database, seeded before each scenario and dropped after it.

use blog_posts_api::config::Config;
use blog_posts_api::database::Database;
use blog_posts_api::fixtures::{SEED_COUNT, generate_posts};
use blog_posts_api::post::post_service::PostService;
use blog_posts_api::startup::run;
use futures_util::FutureExt;
use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::net::TcpListener;
use std::panic::AssertUnwindSafe;

#[derive(Clone)]
pub struct TestApp {
    pub address: String,
    pub http: reqwest::Client,
    pub database: Database,
    pub posts: PostService,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Starts the server, seeds `SEED_COUNT` posts, runs `scenario`, then drops
/// the database and stops the server. Teardown happens even when the
/// scenario panics; the panic is re-raised afterwards.
pub async fn run_test<F, Fut>(scenario: F)
where
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = ()>,
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut config = Config::from_env().expect("invalid test configuration");
    config.database_name = format!("blog_test_{}", uuid::Uuid::new_v4().simple());

    let database = Database::init(&config)
        .await
        .expect("failed to connect to MongoDB");
    let posts = PostService::new(&database.db);

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().expect("no local address").port();
    let server = run(listener, posts.clone()).expect("failed to build server");
    let handle = server.handle();
    tokio::spawn(server);

    let app = TestApp {
        address: format!("http://127.0.0.1:{port}"),
        http: reqwest::Client::new(),
        database: database.clone(),
        posts,
    };

    let outcome = AssertUnwindSafe(async {
        let seeded = app
            .posts
            .seed_posts(&generate_posts(SEED_COUNT))
            .await
            .expect("failed to seed posts");
        assert_eq!(seeded, SEED_COUNT);

        scenario(app.clone()).await;
    })
    .catch_unwind()
    .await;

    drop(app);
    let teardown = database.drop_database().await;
    handle.stop(true).await;

    settle(outcome, teardown, &config.database_name);
}

/// Turns the scenario result and the teardown result into the test verdict.
/// A scenario panic wins and is re-raised; the teardown error is only logged
/// then. A teardown error on an otherwise passing scenario fails the test.
fn settle<E: Display>(
    outcome: Result<(), Box<dyn Any + Send>>,
    teardown: Result<(), E>,
    database_name: &str,
) {
    match (outcome, teardown) {
        (Err(panic), Err(e)) => {
            log::error!("failed to drop {database_name}: {e}");
            std::panic::resume_unwind(panic);
        }
        (Err(panic), Ok(())) => std::panic::resume_unwind(panic),
        (Ok(()), Err(e)) => panic!("failed to drop {database_name}: {e}"),
        (Ok(()), Ok(())) => {}
    }
}

#[test]
#[should_panic(expected = "failed to drop blog_test_x: connection reset")]
fn teardown_error_fails_a_passing_scenario() {
    settle(Ok(()), Err("connection reset"), "blog_test_x");
}

#[test]
fn scenario_panic_wins_over_teardown_error() {
    let result = std::panic::catch_unwind(|| {
        settle(
            Err(Box::new("assertion failed") as Box<dyn Any + Send>),
            Err("connection reset"),
            "blog_test_x",
        )
    });

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"assertion failed"));
}

#[test]
fn clean_run_settles_quietly() {
    settle::<&str>(Ok(()), Ok(()), "blog_test_x");
}
