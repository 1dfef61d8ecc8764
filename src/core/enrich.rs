//! Turns listing items into dashboard employees by adding the synthetic
//! department and performance fields and filling missing contact data.

use crate::core::source::RemoteUser;
use crate::models::department::Department;
use crate::models::employee::{Address, Employee};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_STREET: &str = "123 Main St";
const DEFAULT_CITY: &str = "New York";
const DEFAULT_STATE: &str = "NY";
const DEFAULT_POSTAL_CODE: &str = "10001";
const DEFAULT_PHONE: &str = "+1-555-0123";

/// Source of the synthetic fields.
pub trait Enricher {
    /// Department for the record at `index` in the page.
    fn department(&mut self, index: usize) -> Department {
        Department::cycle(index)
    }

    /// Initial performance score for the record at `index`.
    fn performance(&mut self, index: usize, user: &RemoteUser) -> f64;
}

/// Uniform integer scores in 1..=5, reproducible when seeded.
pub struct RandomEnricher {
    rng: StdRng,
}

impl RandomEnricher {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Enricher for RandomEnricher {
    fn performance(&mut self, _index: usize, _user: &RemoteUser) -> f64 {
        f64::from(self.rng.gen_range(1u8..=5))
    }
}

pub fn enrich_all(users: Vec<RemoteUser>, enricher: &mut dyn Enricher) -> Vec<Employee> {
    users
        .into_iter()
        .enumerate()
        .map(|(index, user)| enrich_one(index, user, enricher))
        .collect()
}

fn enrich_one(index: usize, user: RemoteUser, enricher: &mut dyn Enricher) -> Employee {
    let department = enricher.department(index);
    let performance = enricher.performance(index, &user);
    let address = user.address.unwrap_or_default();

    Employee {
        id: user.id,
        bio: placeholder_bio(user.age),
        image: non_empty(user.image)
            .unwrap_or_else(|| format!("https://i.pravatar.cc/150?u={}", user.id)),
        phone: non_empty(user.phone).unwrap_or_else(|| DEFAULT_PHONE.to_string()),
        address: Address {
            street: non_empty(address.address).unwrap_or_else(|| DEFAULT_STREET.to_string()),
            city: non_empty(address.city).unwrap_or_else(|| DEFAULT_CITY.to_string()),
            state: non_empty(address.state).unwrap_or_else(|| DEFAULT_STATE.to_string()),
            postal_code: non_empty(address.postal_code)
                .unwrap_or_else(|| DEFAULT_POSTAL_CODE.to_string()),
        },
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        age: user.age,
        department,
        performance,
    }
}

fn placeholder_bio(age: u32) -> String {
    format!(
        "Experienced professional with {} years in the industry. \
         Passionate about delivering high-quality results and driving innovation.",
        age.saturating_sub(20)
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
