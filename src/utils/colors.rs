/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown for empty cells.
pub const EMPTY_CELL: &str = "--:--";

/// Returns GREY when the field is empty (None, "" or "--:--"),
/// and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != EMPTY_CELL => RESET,
        _ => GREY,
    }
}

/// Grey out placeholders, leave real values untouched.
///
/// Example:
/// `colorize_optional("--:--")` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str) -> String {
    let color = color_for_optional_field(Some(value));
    if color == GREY {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Highlight a total.
pub fn colorize_total(value: &str) -> String {
    format!("{BOLD}{GREEN}{value}{RESET}")
}
