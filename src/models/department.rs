use serde::{Deserialize, Serialize};
use std::fmt;

/// Departments an employee can be assigned to during enrichment.
///
/// The declaration order is the assignment cycle: the n-th listed user gets
/// `ALL[n % ALL.len()]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
    Design,
    Product,
    Support,
    Legal,
}

impl Department {
    pub const ALL: [Department; 10] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Operations,
        Department::Design,
        Department::Product,
        Department::Support,
        Department::Legal,
    ];

    /// Department for the record at `index` in a fetched page.
    pub fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::Design => "Design",
            Department::Product => "Product",
            Department::Support => "Support",
            Department::Legal => "Legal",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
