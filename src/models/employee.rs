use crate::models::department::Department;
use serde::{Deserialize, Serialize};

/// Lowest performance score an employee can hold.
pub const MIN_PERFORMANCE: f64 = 1.0;
/// Highest performance score; promotions are capped here.
pub const MAX_PERFORMANCE: f64 = 5.0;
/// Amount added to the score by a single promotion.
pub const PROMOTION_STEP: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "address")]
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// An enriched directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub department: Department,
    pub performance: f64,
    pub address: Address,
    pub phone: String,
    pub bio: String,
    pub image: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Raise the score by one promotion step, never above the maximum.
    pub fn promote(&mut self) -> f64 {
        self.performance = (self.performance + PROMOTION_STEP).min(MAX_PERFORMANCE);
        self.performance
    }

    pub fn is_high_performer(&self) -> bool {
        self.performance >= 4.0
    }

    pub fn is_top_performer(&self) -> bool {
        self.performance >= 4.5
    }
}
