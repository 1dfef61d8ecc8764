use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use serde::{Deserialize, Serialize};

/// Transient filter selection for the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub search: String,
    pub departments: Vec<Department>,
    /// Inclusive `[min, max]`. Any length other than 2 means "no constraint".
    pub performance_range: Vec<f64>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_departments(mut self, departments: Vec<Department>) -> Self {
        self.departments = departments;
        self
    }

    pub fn with_range(mut self, range: Vec<f64>) -> Self {
        self.performance_range = range;
        self
    }

    /// The range bounds, only when the range is well formed.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.performance_range.as_slice() {
            [min, max] => Some((*min, *max)),
            _ => None,
        }
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.departments.is_empty() && self.range().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Short human description of the active constraints.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "no filters".to_string();
        }
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search=\"{}\"", self.search));
        }
        if !self.departments.is_empty() {
            let names: Vec<&str> = self.departments.iter().map(|d| d.as_str()).collect();
            parts.push(format!("departments={}", names.join(",")));
        }
        if let Some((min, max)) = self.range() {
            parts.push(format!("rating={min}-{max}"));
        }
        parts.join(" ")
    }
}

/// Parse a range argument such as `4-5` or `3.5:5`.
///
/// Returns the raw bound list; a single bound yields a one-element vector,
/// which the filter treats as no constraint. Empty pieces (`4--5`, `-1-5`)
/// and non-finite bounds are rejected.
pub fn parse_range(input: &str) -> AppResult<Vec<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(['-', ':'])
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| AppError::InvalidRange(input.to_string()))
        })
        .collect()
}

/// Parse department names (case-insensitive), rejecting unknown ones.
pub fn parse_departments<S: AsRef<str>>(names: &[S]) -> AppResult<Vec<Department>> {
    let mut out = Vec::new();
    for raw in names {
        for name in raw.as_ref().split(',').filter(|n| !n.trim().is_empty()) {
            let dept = Department::from_name(name)
                .ok_or_else(|| AppError::InvalidDepartment(name.trim().to_string()))?;
            if !out.contains(&dept) {
                out.push(dept);
            }
        }
    }
    Ok(out)
}
