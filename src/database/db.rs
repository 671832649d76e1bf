use crate::config::Config;
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

#[derive(Clone)]
pub struct Database {
    pub db: mongodb::Database,
}

impl Database {
    /// Connects and pings the server so a bad URI fails at startup.
    pub async fn init(config: &Config) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        log::info!("Connected successfully to MongoDB ({})", config.database_name);

        let db = client.database(&config.database_name);
        Ok(Self { db })
    }

    /// Drops the whole database, collections included.
    pub async fn drop_database(&self) -> mongodb::error::Result<()> {
        self.db.drop().await?;
        log::info!("Dropped database {}", self.db.name());
        Ok(())
    }
}

pub async fn connect_to_mongo(config: &Config) -> mongodb::error::Result<Database> {
    Database::init(config).await.inspect_err(|e| {
        log::error!("Failed to initialize database: {e}");
    })
}
