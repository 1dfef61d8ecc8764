//! Aggregations behind the dashboard, bookmarks and analytics views.
//! Everything here is recomputed from a snapshot on each call.

use crate::models::bookmark::Bookmark;
use crate::models::department::Department;
use crate::models::employee::Employee;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAverage {
    pub department: Department,
    pub employees: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub range: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub departments: usize,
    pub average_performance: f64,
    pub high_performers: usize,
    pub top_performers: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkStats {
    pub bookmarked: usize,
    pub average_performance: f64,
    pub high_performers: usize,
    pub orphaned: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Score bands: `[lower, upper)` except the last, which also includes 5.
const BANDS: [(&str, f64, f64); 4] = [
    ("1-2", 1.0, 2.0),
    ("2-3", 2.0, 3.0),
    ("3-4", 3.0, 4.0),
    ("4-5", 4.0, 5.0),
];

/// Number of top performers shown on the dashboard.
const TOP_PERFORMERS: usize = 3;

/// Mean score per department, in order of first appearance.
pub fn department_averages(employees: &[Employee]) -> Vec<DepartmentAverage> {
    let mut acc: Vec<(Department, f64, usize)> = Vec::new();
    for emp in employees {
        match acc.iter_mut().find(|(d, _, _)| *d == emp.department) {
            Some((_, total, count)) => {
                *total += emp.performance;
                *count += 1;
            }
            None => acc.push((emp.department, emp.performance, 1)),
        }
    }

    acc.into_iter()
        .map(|(department, total, count)| DepartmentAverage {
            department,
            employees: count,
            average_rating: total / count as f64,
        })
        .collect()
}

pub fn band_of(score: f64) -> Option<&'static str> {
    BANDS.iter().enumerate().find_map(|(i, (label, lo, hi))| {
        let last = i == BANDS.len() - 1;
        let inside = score >= *lo && (score < *hi || (last && score <= *hi));
        inside.then_some(*label)
    })
}

/// Employee count per score band. Scores outside 1..=5 are not counted.
pub fn performance_bands(employees: &[Employee]) -> Vec<BandCount> {
    BANDS
        .iter()
        .map(|(label, _, _)| BandCount {
            range: label,
            count: employees
                .iter()
                .filter(|e| band_of(e.performance) == Some(*label))
                .count(),
        })
        .collect()
}

pub fn average_performance<'a, I>(employees: I) -> f64
where
    I: IntoIterator<Item = &'a Employee>,
{
    let (total, count) = employees
        .into_iter()
        .fold((0.0, 0usize), |(t, c), e| (t + e.performance, c + 1));
    if count == 0 { 0.0 } else { total / count as f64 }
}

pub fn dashboard_stats(employees: &[Employee]) -> DashboardStats {
    let mut departments: Vec<Department> = Vec::new();
    for e in employees {
        if !departments.contains(&e.department) {
            departments.push(e.department);
        }
    }

    DashboardStats {
        total_employees: employees.len(),
        departments: departments.len(),
        average_performance: average_performance(employees),
        high_performers: employees.iter().filter(|e| e.is_high_performer()).count(),
        top_performers: employees
            .iter()
            .filter(|e| e.is_top_performer())
            .take(TOP_PERFORMERS)
            .map(|e| e.id)
            .collect(),
    }
}

/// Stats over the bookmarked employees still present in `employees`.
pub fn bookmark_stats(employees: &[Employee], bookmarks: &[Bookmark]) -> BookmarkStats {
    let present: Vec<&Employee> = bookmarks
        .iter()
        .filter_map(|b| employees.iter().find(|e| e.id == b.employee_id))
        .collect();

    BookmarkStats {
        bookmarked: present.len(),
        average_performance: average_performance(present.iter().copied()),
        high_performers: present.iter().filter(|e| e.is_high_performer()).count(),
        orphaned: bookmarks.len() - present.len(),
    }
}

/// Bookmarks added per calendar month (`YYYY-MM`), oldest first.
pub fn bookmark_trend(bookmarks: &[Bookmark]) -> Vec<MonthCount> {
    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for b in bookmarks {
        *months
            .entry(b.added_at.format("%Y-%m").to_string())
            .or_default() += 1;
    }
    months
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}
