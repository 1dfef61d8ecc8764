/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Performance color:
/// \>= 4 → green
/// \>= 3 → yellow
/// below → red
pub fn color_for_performance(score: f64) -> &'static str {
    if score >= 4.0 {
        GREEN
    } else if score >= 3.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn colorize_performance(score: f64) -> String {
    format!("{}{:.1}{RESET}", color_for_performance(score), score)
}

pub fn color_for_project_status(status: &str) -> &'static str {
    match status {
        "active" => GREEN,
        "completed" => BLUE,
        "pending" => YELLOW,
        _ => RESET,
    }
}

pub fn color_for_feedback(kind: &str) -> &'static str {
    match kind {
        "positive" => GREEN,
        "constructive" => YELLOW,
        "neutral" => CYAN,
        _ => RESET,
    }
}
