//! hrdash main entrypoint.

use hrdash::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if e.is_fetch_failure() {
            eprintln!("Check your connection or the configured source, then run the command again.");
        }
        std::process::exit(1);
    }
}
