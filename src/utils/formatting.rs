//! Formatting utilities used for report and table output.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (not chars), left aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Pad to `width` terminal columns, right aligned.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Trip durations are whole seconds in most files; drop the ".0" then.
pub fn format_duration_secs(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as i64)
    } else {
        format!("{:.1}", secs)
    }
}

pub fn separator() -> String {
    "-".repeat(40)
}
