pub mod config;
pub mod database;
pub mod fixtures;
pub mod middleware;
pub mod post;
pub mod router;
pub mod startup;
pub mod utils;
