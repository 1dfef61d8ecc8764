//! Formatting utilities used for CLI and export outputs.

use crate::models::employee::MAX_PERFORMANCE;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Printable width, ignoring color codes and counting wide glyphs twice.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{s}", " ".repeat(width - w))
    }
}

/// Star rating, e.g. `★★★½☆` for 3.5.
pub fn stars(score: f64) -> String {
    let max = MAX_PERFORMANCE as usize;
    let clamped = score.clamp(0.0, MAX_PERFORMANCE);
    let full = clamped.floor() as usize;
    let half = clamped - clamped.floor() >= 0.5;
    let empty = max - full - usize::from(half);

    format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    )
}

/// Text bar proportional to `count / max`, at most `width` cells.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).min(width);
    "█".repeat(cells)
}
