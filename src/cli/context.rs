//! Wiring between the command handlers and the core session.

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::directory::DirectoryCache;
use crate::core::enrich::RandomEnricher;
use crate::core::session::Session;
use crate::core::source;
use crate::core::storage::{MemoryStorage, Storage};
use crate::db::kv::SqliteStorage;
use crate::errors::AppResult;
use crate::models::criteria::{Criteria, parse_departments, parse_range};
use crate::ui::messages::warning;

/// Bookmark storage actually used by the CLI.
pub enum AppStorage {
    Sqlite(SqliteStorage),
    /// Fallback when the database cannot be opened: bookmarks last one run.
    Memory(MemoryStorage),
}

impl AppStorage {
    pub fn open(path: &str) -> Self {
        match SqliteStorage::open(path) {
            Ok(s) => AppStorage::Sqlite(s),
            Err(e) => {
                warning(format!(
                    "Cannot open database '{path}' ({e}); bookmarks will not be saved."
                ));
                AppStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let AppStorage::Sqlite(s) = self {
            s.audit(operation, target, message);
        }
    }
}

impl Storage for AppStorage {
    fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        match self {
            AppStorage::Sqlite(s) => s.load(key),
            AppStorage::Memory(m) => m.load(key),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> AppResult<()> {
        match self {
            AppStorage::Sqlite(s) => s.save(key, bytes),
            AppStorage::Memory(m) => m.save(key, bytes),
        }
    }
}

pub struct AppContext {
    pub session: Session<AppStorage>,
    enricher: RandomEnricher,
    source_location: String,
    cfg: Config,
}

impl AppContext {
    /// Open the bookmark storage. The directory is not fetched yet.
    pub fn new(cfg: &Config) -> Self {
        let storage = AppStorage::open(&cfg.database);
        Self {
            session: Session::new(DirectoryCache::new(cfg.page_limit), storage),
            enricher: RandomEnricher::new(cfg.seed),
            source_location: cfg.api_url.clone(),
            cfg: cfg.clone(),
        }
    }

    /// Fetch the directory unless already loaded.
    pub fn load(&mut self) -> AppResult<()> {
        let src = source::from_location(&self.source_location, self.cfg.request_timeout())?;
        self.session.load(src.as_ref(), &mut self.enricher)
    }

    /// Manual refresh / retry.
    pub fn reload(&mut self) -> AppResult<()> {
        let src = source::from_location(&self.source_location, self.cfg.request_timeout())?;
        self.session.reload(src.as_ref(), &mut self.enricher)
    }

    /// Record a user action in the internal log (no-op without a database).
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        self.session
            .preferences()
            .storage()
            .audit(operation, target, message);
    }
}

/// Build listing criteria from CLI flags.
///
/// A range with a single bound does not constrain and only warns.
pub fn criteria_from(filters: &FilterArgs) -> AppResult<Criteria> {
    let range = match &filters.range {
        Some(r) => parse_range(r)?,
        None => Vec::new(),
    };
    if !range.is_empty() && range.len() != 2 {
        warning(format!(
            "Ignoring performance range '{}': expected MIN-MAX.",
            filters.range.as_deref().unwrap_or_default()
        ));
    }

    Ok(Criteria::new()
        .with_search(filters.search.clone().unwrap_or_default())
        .with_departments(parse_departments(&filters.departments)?)
        .with_range(range))
}
