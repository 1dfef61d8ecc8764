use crate::models::employee::Employee;
use serde::Serialize;

/// Flat row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct EmployeeExport {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub department: String,
    pub performance: f64,
    pub bookmarked: bool,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl EmployeeExport {
    pub fn from_employee(e: &Employee, bookmarked: bool) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            age: e.age,
            department: e.department.as_str().to_string(),
            performance: e.performance,
            bookmarked,
            street: e.address.street.clone(),
            city: e.address.city.clone(),
            state: e.address.state.clone(),
            postal_code: e.address.postal_code.clone(),
        }
    }
}
