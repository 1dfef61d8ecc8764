//! In-memory employee directory for the current session.

use crate::core::enrich::{Enricher, enrich_all};
use crate::core::source::DirectorySource;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

pub struct DirectoryCache {
    employees: Vec<Employee>,
    status: LoadStatus,
    page_limit: usize,
}

impl DirectoryCache {
    pub fn new(page_limit: usize) -> Self {
        Self {
            employees: Vec::new(),
            status: LoadStatus::NotLoaded,
            page_limit,
        }
    }

    /// Build a ready cache from already enriched records.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self {
            page_limit: employees.len(),
            employees,
            status: LoadStatus::Ready,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Load the directory unless it is already loading or loaded.
    pub fn load(
        &mut self,
        source: &dyn DirectorySource,
        enricher: &mut dyn Enricher,
    ) -> AppResult<()> {
        match self.status {
            LoadStatus::Loading | LoadStatus::Ready => {
                debug!(status = ?self.status, "directory load skipped");
                Ok(())
            }
            LoadStatus::NotLoaded | LoadStatus::Failed(_) => self.fetch_into(source, enricher),
        }
    }

    /// Manual refresh: refetch even when the directory is ready.
    pub fn reload(
        &mut self,
        source: &dyn DirectorySource,
        enricher: &mut dyn Enricher,
    ) -> AppResult<()> {
        if self.status == LoadStatus::Loading {
            return Ok(());
        }
        self.fetch_into(source, enricher)
    }

    fn fetch_into(
        &mut self,
        source: &dyn DirectorySource,
        enricher: &mut dyn Enricher,
    ) -> AppResult<()> {
        let previous = std::mem::replace(&mut self.status, LoadStatus::Loading);

        match source.fetch(self.page_limit) {
            Ok(users) => {
                self.employees = enrich_all(users, enricher);
                self.status = LoadStatus::Ready;
                info!(
                    count = self.employees.len(),
                    source = %source.describe(),
                    "directory loaded"
                );
                Ok(())
            }
            Err(e) => {
                warn!(source = %source.describe(), "directory fetch failed: {e}");
                // A failed refresh keeps the records of the previous load.
                self.status = match previous {
                    LoadStatus::Ready if !self.employees.is_empty() => LoadStatus::Ready,
                    _ => LoadStatus::Failed(e.to_string()),
                };
                Err(e)
            }
        }
    }

    /// Promote an employee. Returns the new score, or None if the id is unknown.
    pub fn promote(&mut self, id: i64) -> Option<f64> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .map(Employee::promote)
    }
}
