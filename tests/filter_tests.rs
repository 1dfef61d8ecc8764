mod common;
use common::employee;
use hrdash::core::filter::filter;
use hrdash::errors::AppError;
use hrdash::models::criteria::{Criteria, parse_departments, parse_range};
use hrdash::models::department::Department;
use hrdash::models::employee::Employee;

fn directory() -> Vec<Employee> {
    vec![
        employee(1, "Ada", "Lovelace", Department::Engineering, 4.6),
        employee(2, "Bob", "Stone", Department::Sales, 2.0),
        employee(3, "Carla", "Reyes", Department::Marketing, 3.5),
        employee(4, "Dan", "Salesky", Department::Engineering, 1.0),
        employee(5, "Eve", "Hart", Department::Hr, 5.0),
        employee(6, "Finn", "Moss", Department::Sales, 4.0),
    ]
}

fn ids(list: &[&Employee]) -> Vec<i64> {
    list.iter().map(|e| e.id).collect()
}

#[test]
fn test_example_scenario() {
    let d = vec![
        employee(1, "Alice", "A", Department::Engineering, 4.6),
        employee(2, "Bruno", "B", Department::Sales, 2.0),
    ];

    let by_dept = Criteria::new().with_departments(vec![Department::Engineering]);
    assert_eq!(ids(&filter(&d, &by_dept)), vec![1]);

    let by_range = Criteria::new().with_range(vec![4.0, 5.0]);
    assert_eq!(ids(&filter(&d, &by_range)), vec![1]);

    let by_search = Criteria::new().with_search("sales");
    assert_eq!(ids(&filter(&d, &by_search)), vec![2]);
}

#[test]
fn test_empty_criteria_returns_everything() {
    let d = directory();
    let out = filter(&d, &Criteria::default());
    assert_eq!(out.len(), d.len());
    assert!(out.iter().zip(&d).all(|(a, b)| *a == b));
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let d = directory();

    // last name
    assert_eq!(ids(&filter(&d, &Criteria::new().with_search("LOVELACE"))), vec![1]);
    // email
    assert_eq!(
        ids(&filter(&d, &Criteria::new().with_search("eve.hart@"))),
        vec![5]
    );
    // department name, plus a last name containing the same text
    assert_eq!(
        ids(&filter(&d, &Criteria::new().with_search("Sales"))),
        vec![2, 4, 6]
    );
    // department "HR"
    assert_eq!(ids(&filter(&d, &Criteria::new().with_search("hr"))), vec![5]);
}

#[test]
fn test_department_set() {
    let d = directory();
    let c = Criteria::new().with_departments(vec![Department::Sales, Department::Hr]);
    assert_eq!(ids(&filter(&d, &c)), vec![2, 5, 6]);
}

#[test]
fn test_range_is_inclusive() {
    let d = directory();
    let c = Criteria::new().with_range(vec![2.0, 4.0]);
    assert_eq!(ids(&filter(&d, &c)), vec![2, 3, 6]);

    let c = Criteria::new().with_range(vec![5.0, 5.0]);
    assert_eq!(ids(&filter(&d, &c)), vec![5]);
}

#[test]
fn test_malformed_range_is_no_constraint() {
    let d = directory();
    for bad in [vec![4.0], vec![1.0, 2.0, 3.0]] {
        let c = Criteria::new().with_range(bad);
        assert_eq!(filter(&d, &c).len(), d.len());
        assert!(c.range().is_none());
    }
}

#[test]
fn test_inverted_range_matches_nothing() {
    let d = directory();
    let c = Criteria::new().with_range(vec![5.0, 1.0]);
    assert!(filter(&d, &c).is_empty());
}

#[test]
fn test_combined_criteria_result_is_ordered_subsequence() {
    let d = directory();
    let c = Criteria::new()
        .with_search("s")
        .with_departments(vec![Department::Engineering, Department::Sales])
        .with_range(vec![1.0, 4.5]);

    let out = filter(&d, &c);
    assert_eq!(ids(&out), vec![2, 4, 6]);

    // each result satisfies all predicates independently
    for e in &out {
        let needle = "s";
        let text = format!(
            "{} {} {} {}",
            e.first_name, e.last_name, e.email, e.department
        )
        .to_lowercase();
        assert!(text.contains(needle));
        assert!(c.departments.contains(&e.department));
        assert!(e.performance >= 1.0 && e.performance <= 4.5);
    }

    // positions in the directory strictly increase
    let positions: Vec<usize> = out
        .iter()
        .map(|e| d.iter().position(|x| x.id == e.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_parse_range() {
    assert_eq!(parse_range("4-5").unwrap(), vec![4.0, 5.0]);
    assert_eq!(parse_range("3.5:5").unwrap(), vec![3.5, 5.0]);
    assert_eq!(parse_range(" 4 ").unwrap(), vec![4.0]);
    assert!(parse_range("").unwrap().is_empty());
    assert!(parse_range("a-b").is_err());
}

#[test]
fn test_parse_range_rejects_stray_separators_and_non_finite() {
    for bad in ["-1-5", "4--5", "4-", ":5", "nan-5", "4-inf", "NaN"] {
        assert!(
            matches!(parse_range(bad), Err(AppError::InvalidRange(_))),
            "{bad} should be rejected"
        );
    }
    assert_eq!(parse_range(" 2 - 4 ").unwrap(), vec![2.0, 4.0]);
}

#[test]
fn test_parse_departments() {
    let depts = parse_departments(&["sales,hr", "Sales", "ENGINEERING"]).unwrap();
    assert_eq!(
        depts,
        vec![Department::Sales, Department::Hr, Department::Engineering]
    );
    assert!(parse_departments(&["Astronauts"]).is_err());
}

#[test]
fn test_criteria_describe_and_clear() {
    let mut c = Criteria::new()
        .with_search("ada")
        .with_departments(vec![Department::Hr])
        .with_range(vec![4.0, 5.0]);
    assert!(!c.is_empty());
    let text = c.describe();
    assert!(text.contains("search=\"ada\""));
    assert!(text.contains("departments=HR"));
    assert!(text.contains("rating=4-5"));

    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.describe(), "no filters");
}
