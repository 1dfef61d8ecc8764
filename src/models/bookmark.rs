use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted marker on an employee id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub employee_id: i64,
    pub added_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            added_at: Utc::now(),
        }
    }
}
