#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hrdash::core::enrich::Enricher;
use hrdash::core::source::{DirectorySource, RemoteUser};
use hrdash::errors::{AppError, AppResult};
use hrdash::models::department::Department;
use hrdash::models::employee::{Address, Employee};
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hrd() -> Command {
    cargo_bin_cmd!("hrdash")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdash_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Absolute path of a file under tests/fixtures.
pub fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

/// `hrdash --db <db> --source <fixture> --seed 42 <args...>`
pub fn hrd_with(db_path: &str, source: &str, args: &[&str]) -> Command {
    let mut cmd = hrd();
    cmd.args(["--db", db_path, "--source", source, "--seed", "42"])
        .args(args)
        .env("RUST_LOG", "off");
    cmd
}

/// Minimal enriched employee for library tests.
pub fn employee(id: i64, first: &str, last: &str, dept: Department, perf: f64) -> Employee {
    Employee {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        age: 30,
        department: dept,
        performance: perf,
        address: Address {
            street: "1 Test Way".to_string(),
            city: "Testville".to_string(),
            state: "TS".to_string(),
            postal_code: "00000".to_string(),
        },
        phone: "+1-555-0000".to_string(),
        bio: String::new(),
        image: String::new(),
    }
}

pub fn remote_user(id: i64, first: &str, age: u32) -> RemoteUser {
    RemoteUser {
        id,
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        age,
        ..Default::default()
    }
}

/// In-memory source that counts calls and can be switched to fail.
pub struct StaticSource {
    pub users: RefCell<Vec<RemoteUser>>,
    pub fail: Cell<bool>,
    pub calls: Cell<usize>,
    pub last_limit: Cell<usize>,
}

impl StaticSource {
    pub fn new(users: Vec<RemoteUser>) -> Self {
        Self {
            users: RefCell::new(users),
            fail: Cell::new(false),
            calls: Cell::new(0),
            last_limit: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        let s = Self::new(Vec::new());
        s.fail.set(true);
        s
    }
}

impl DirectorySource for StaticSource {
    fn fetch(&self, limit: usize) -> AppResult<Vec<RemoteUser>> {
        self.calls.set(self.calls.get() + 1);
        self.last_limit.set(limit);
        if self.fail.get() {
            return Err(AppError::Fetch { status: 503 });
        }
        Ok(self.users.borrow().iter().take(limit).cloned().collect())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Scores taken in order from a fixed list (cycled).
pub struct FixedScores(pub Vec<f64>);

impl Enricher for FixedScores {
    fn performance(&mut self, index: usize, _user: &RemoteUser) -> f64 {
        self.0[index % self.0.len()]
    }
}
