//! Token-template date formatting.

use chrono::{DateTime, Datelike, Local, Timelike};

use super::DateValue;

/// Default template: `YYYY-MM-DD HH:mm:ss`.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Rendered in place of anything that cannot be resolved as a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a date-like value through a token template.
///
/// Recognized tokens: `YYYY MM M DD D HH H mm m ss s`. Doubled tokens are
/// zero-padded, single ones are not. Anything else in the template passes
/// through untouched, so `YYYY年MM月DD日` works as-is.
pub fn format_date(value: impl Into<DateValue>, template: &str) -> String {
    match value.into().resolve() {
        Some(dt) => render(&dt, template),
        None => INVALID_DATE.to_string(),
    }
}

/// [`format_date`] with the default template.
pub fn format_date_default(value: impl Into<DateValue>) -> String {
    format_date(value, DEFAULT_FORMAT)
}

/// Single greedy left-to-right pass; `YY` or `YYY` stay literal because
/// only the four-letter year token exists.
fn render(dt: &DateTime<Local>, template: &str) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        match c {
            'Y' if run >= 4 => {
                out.push_str(&dt.year().to_string());
                i += 4;
            }
            'M' => i += push_component(&mut out, dt.month(), run),
            'D' => i += push_component(&mut out, dt.day(), run),
            'H' => i += push_component(&mut out, dt.hour(), run),
            'm' => i += push_component(&mut out, dt.minute(), run),
            's' => i += push_component(&mut out, dt.second(), run),
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn push_component(out: &mut String, value: u32, run: usize) -> usize {
    if run >= 2 {
        out.push_str(&format!("{:02}", value));
        2
    } else {
        out.push_str(&value.to_string());
        1
    }
}
