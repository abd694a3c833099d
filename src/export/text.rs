//! Plain-text summary of the week, for messengers.

use crate::config::Config;
use crate::core::calculator::format_expense;
use crate::core::form::AppState;
use crate::utils::time::format_minutes;

pub const WHATSAPP_BASE: &str = "https://wa.me/?text=";

/// Build the message body.
///
/// Only rows with a start, end, tour or expense are listed.
pub fn text_summary(state: &AppState, cfg: &Config) -> String {
    let report = &state.report;
    let mut text = String::from("Wochenbericht\n");

    if !report.reporter_name.is_empty() {
        text.push_str(&format!("Name: {}\n", report.reporter_name));
    }
    if !report.period_start.is_empty() || !report.period_end.is_empty() {
        text.push_str(&format!(
            "Zeitraum: {} - {}\n",
            report.period_start, report.period_end
        ));
    }
    text.push_str(&format!("KW: {}\n", report.week_number));
    text.push('\n');

    for (day, row) in report.days.iter().zip(&state.totals.rows) {
        if !day.has_content() {
            continue;
        }
        text.push_str(&format!(
            "{}: {} - {}, Pause {} Min, Std {}, Tour {}, Spesen {}\n",
            day.day.label(),
            or_default(&day.start, "-"),
            or_default(&day.end, "-"),
            or_default(&day.pause, "0"),
            or_default(&row.duration_text, "00:00"),
            or_default(&day.tour, "-"),
            or_default(&day.expense, "0"),
        ));
    }

    text.push_str(&format!(
        "\nGesamtstunden: {}",
        format_minutes(state.totals.total_minutes)
    ));
    text.push_str(&format!(
        "\nSpesen gesamt: {}",
        format_expense(state.totals.total_expense, &cfg.currency)
    ));

    text
}

/// Deep link opening WhatsApp with `text` pre-filled.
pub fn whatsapp_link(text: &str) -> String {
    format!("{WHATSAPP_BASE}{}", urlencoding::encode(text))
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
