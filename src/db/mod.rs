use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::{config::Config, errors::AppResult};

const MAX_POOL_SIZE: u32 = 10;
const SERVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the application database; cheap to clone.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings once so a bad URI fails at startup rather than on
    /// the first request.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(MAX_POOL_SIZE);
        options.connect_timeout = Some(SERVER_TIMEOUT);
        options.server_selection_timeout = Some(SERVER_TIMEOUT);

        let database = Self {
            inner: Client::with_options(options)?.database(&config.mongo_db_name),
        };
        database.ping().await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(database)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection(name)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Unique index violations come back as write error 11000.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
