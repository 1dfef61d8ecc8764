//! One dashboard session: the live directory plus the persisted bookmarks.

use crate::core::directory::{DirectoryCache, LoadStatus};
use crate::core::enrich::Enricher;
use crate::core::filter;
use crate::core::preferences::PreferenceStore;
use crate::core::source::DirectorySource;
use crate::core::storage::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::bookmark::Bookmark;
use crate::models::criteria::Criteria;
use crate::models::employee::Employee;
use tracing::info;

pub struct Session<S: Storage> {
    directory: DirectoryCache,
    preferences: PreferenceStore<S>,
}

impl<S: Storage> Session<S> {
    pub fn new(directory: DirectoryCache, storage: S) -> Self {
        Self {
            directory,
            preferences: PreferenceStore::open(storage),
        }
    }

    pub fn directory(&self) -> &DirectoryCache {
        &self.directory
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn status(&self) -> &LoadStatus {
        self.directory.status()
    }

    pub fn employees(&self) -> &[Employee] {
        self.directory.employees()
    }

    pub fn load(
        &mut self,
        source: &dyn DirectorySource,
        enricher: &mut dyn Enricher,
    ) -> AppResult<()> {
        self.directory.load(source, enricher)
    }

    pub fn reload(
        &mut self,
        source: &dyn DirectorySource,
        enricher: &mut dyn Enricher,
    ) -> AppResult<()> {
        self.directory.reload(source, enricher)
    }

    pub fn filter(&self, criteria: &Criteria) -> Vec<&Employee> {
        filter::filter(self.directory.employees(), criteria)
    }

    pub fn employee(&self, id: i64) -> AppResult<&Employee> {
        self.directory.get(id).ok_or(AppError::EmployeeNotFound(id))
    }

    pub fn promote(&mut self, id: i64) -> AppResult<f64> {
        self.directory
            .promote(id)
            .ok_or(AppError::EmployeeNotFound(id))
    }

    pub fn is_bookmarked(&self, id: i64) -> bool {
        self.preferences.is_bookmarked(id)
    }

    /// Bookmark an employee of the loaded directory.
    pub fn add_bookmark(&mut self, id: i64) -> AppResult<bool> {
        self.employee(id)?;
        Ok(self.preferences.add_bookmark(id))
    }

    /// Remove a bookmark. Works for ids missing from the directory too.
    pub fn remove_bookmark(&mut self, id: i64) -> bool {
        self.preferences.remove_bookmark(id)
    }

    /// Flip a bookmark. Adding requires the employee to exist; removing does not.
    pub fn toggle_bookmark(&mut self, id: i64) -> AppResult<bool> {
        if self.preferences.is_bookmarked(id) {
            self.preferences.remove_bookmark(id);
            Ok(false)
        } else {
            self.add_bookmark(id)
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.preferences.bookmarks()
    }

    /// Bookmarked employees present in the directory, in bookmark order.
    pub fn bookmarked_employees(&self) -> Vec<&Employee> {
        self.preferences
            .bookmarks()
            .iter()
            .filter_map(|b| self.directory.get(b.employee_id))
            .collect()
    }

    /// Bookmarks pointing at ids absent from a loaded directory.
    ///
    /// Nothing counts as orphaned until the directory is ready.
    pub fn orphaned_bookmarks(&self) -> Vec<&Bookmark> {
        if !self.directory.is_ready() {
            return Vec::new();
        }
        self.preferences
            .bookmarks()
            .iter()
            .filter(|b| self.directory.get(b.employee_id).is_none())
            .collect()
    }

    /// Drop orphaned bookmarks. Refuses to run against an unloaded directory.
    pub fn prune_orphans(&mut self) -> AppResult<usize> {
        if !self.directory.is_ready() {
            return Err(AppError::DirectoryNotLoaded);
        }
        let directory = &self.directory;
        let dropped = self
            .preferences
            .retain(|b| directory.get(b.employee_id).is_some());
        info!(dropped, "orphaned bookmarks pruned");
        Ok(dropped)
    }
}
