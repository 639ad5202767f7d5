//! Builder for creating and configuring PlanStudio instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::{info, warn};
use tokio::task;

use super::PlanStudio;
use crate::{
    db::Database,
    error::{BeauteError, Result},
    responder::{MockResponder, PlanResponder},
    store::{DraftStore, LatestPlanStore, MemoryStorage, RecordStorage, SqliteStorage},
};

/// How long a generation may wait for the responder by default.
pub const DEFAULT_RESPONDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating and configuring PlanStudio instances.
pub struct PlanStudioBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Arc<dyn RecordStorage>>,
    responder: Option<Arc<dyn PlanResponder>>,
    mock_delay: Option<Duration>,
    timeout: Option<Duration>,
}

impl PlanStudioBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage: None,
            responder: None,
            mock_delay: None,
            timeout: Some(DEFAULT_RESPONDER_TIMEOUT),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/beaute/beaute.db` or `~/.local/share/beaute/beaute.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage instead of a SQLite file.
    pub fn with_storage(mut self, storage: impl RecordStorage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Uses the given responder instead of the mock.
    pub fn with_responder(mut self, responder: impl PlanResponder + 'static) -> Self {
        self.responder = Some(Arc::new(responder));
        self
    }

    /// Sets the artificial latency of the default mock responder.
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = Some(delay);
        self
    }

    /// Sets the responder timeout; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured studio.
    ///
    /// A database that cannot be opened does not fail the build: the studio
    /// then keeps its draft in memory only.
    ///
    /// # Errors
    ///
    /// Returns `BeauteError::Configuration` if the blocking setup task fails
    /// to join.
    pub async fn build(self) -> Result<PlanStudio> {
        let storage: Arc<dyn RecordStorage> = match self.storage {
            Some(storage) => storage,
            None => match Self::open_sqlite(self.database_path).await? {
                Ok(storage) => {
                    info!("Persisting drafts to {}", storage.path().display());
                    Arc::new(storage)
                }
                Err(e) => {
                    warn!("Drafts will not be persisted: {e}");
                    Arc::new(MemoryStorage::volatile())
                }
            },
        };

        let responder: Arc<dyn PlanResponder> = match self.responder {
            Some(responder) => responder,
            None => match self.mock_delay {
                Some(delay) => Arc::new(MockResponder::new().with_delay(delay)),
                None => Arc::new(MockResponder::new()),
            },
        };

        Ok(PlanStudio::new(
            DraftStore::new(storage.clone()),
            LatestPlanStore::new(storage),
            responder,
            self.timeout,
        ))
    }

    /// Opens (and initializes) the SQLite storage. The outer result carries
    /// join failures, the inner one storage failures.
    async fn open_sqlite(path: Option<PathBuf>) -> Result<Result<SqliteStorage>> {
        let db_path = match path {
            Some(path) => path,
            None => match Self::default_database_path() {
                Ok(path) => path,
                Err(e) => return Ok(Err(e)),
            },
        };

        task::spawn_blocking(move || {
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| BeauteError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            Database::new(&db_path)?;
            Ok(SqliteStorage::new(db_path))
        })
        .await
        .map_err(BeauteError::join)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("beaute")
            .place_data_file("beaute.db")
            .map_err(|e| BeauteError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlanStudioBuilder {
    fn default() -> Self {
        Self::new()
    }
}
