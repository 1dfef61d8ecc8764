use crate::models::criteria::Criteria;
use crate::models::employee::Employee;

/// Employees matching every active constraint, in directory order.
pub fn filter<'a>(employees: &'a [Employee], criteria: &Criteria) -> Vec<&'a Employee> {
    let needle = criteria.search.to_lowercase();
    employees
        .iter()
        .filter(|e| matches_search(e, &needle))
        .filter(|e| matches_department(e, criteria))
        .filter(|e| matches_range(e, criteria))
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
        employee.department.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn matches_department(employee: &Employee, criteria: &Criteria) -> bool {
    criteria.departments.is_empty() || criteria.departments.contains(&employee.department)
}

pub fn matches_range(employee: &Employee, criteria: &Criteria) -> bool {
    // Malformed ranges (not exactly two bounds) do not constrain.
    match criteria.range() {
        Some((min, max)) => employee.performance >= min && employee.performance <= max,
        None => true,
    }
}
