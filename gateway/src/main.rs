#![deny(clippy::all)]
#![deny(rust_2018_idioms)]

use axum::BoxError;
use gateway::{application::EnvConfig, db::MongoStore, Application};
use primitives::util::logging::new_logger;
use slog::{error, info};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = EnvConfig::from_env()?;
    let logger = new_logger("gateway", config.env);

    let store = MongoStore::connect(&config.mongodb_url, &config.mongodb_collection).await?;

    // the server starts even if the database is unreachable,
    // every request to it will fail until it becomes reachable
    {
        let store = store.clone();
        let logger = logger.clone();

        tokio::spawn(async move {
            match store.ping().await {
                Ok(()) => {
                    info!(&logger, "Connected to MongoDB"; "database" => store.database_name())
                }
                Err(err) => {
                    error!(&logger, "MongoDB connection error"; "database" => store.database_name(), "error" => %err)
                }
            }
        });
    }

    let socket_addr = config.socket_addr();

    Application::new(store, config, logger)
        .run(socket_addr)
        .await
}
