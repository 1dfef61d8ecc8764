// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EmployeeExport;
use crate::export::ExportFormat;
use crate::models::employee::Employee;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High level export of a (filtered) listing.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `employees` to `file` in the requested format.
    ///
    /// `is_bookmarked` marks the `bookmarked` column of each row.
    pub fn export<F>(
        employees: &[&Employee],
        is_bookmarked: F,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()>
    where
        F: Fn(i64) -> bool,
    {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if employees.is_empty() {
            warning("No employees match the selected filters. Nothing to export.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        let rows: Vec<EmployeeExport> = employees
            .iter()
            .map(|e| EmployeeExport::from_employee(e, is_bookmarked(e.id)))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
        }
    }
}
