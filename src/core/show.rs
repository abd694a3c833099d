use crate::config::Config;
use crate::core::calculator::format_expense;
use crate::core::form::AppState;
use crate::export::snapshot::COLUMNS;
use crate::utils::colors::{CYAN, EMPTY_CELL, RESET, YELLOW, colorize_optional, colorize_total};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

pub struct ShowLogic;

impl ShowLogic {
    /// Terminal rendering of the whole form.
    pub fn render(state: &AppState, cfg: &Config, color: bool) -> String {
        let report = &state.report;
        let mut out = String::new();

        let label = |l: &str| {
            if color {
                format!("{CYAN}{l}:{RESET}")
            } else {
                format!("{l}:")
            }
        };

        out.push_str(&format!(
            "{} {}\n",
            label("Name"),
            report.reporter_name
        ));
        out.push_str(&format!(
            "{} {} - {}\n",
            label("Zeitraum"),
            report.period_start,
            report.period_end
        ));
        let kw = report.week_number.to_string();
        out.push_str(&format!(
            "{} {}\n\n",
            label("KW"),
            if color {
                format!("{YELLOW}{kw}{RESET}")
            } else {
                kw
            }
        ));

        let mut table = Table::new(&COLUMNS);
        for (day, row) in report.days.iter().zip(&state.totals.rows) {
            let duration = if row.duration_text.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                row.duration_text.clone()
            };
            let duration = if color {
                colorize_optional(&duration)
            } else {
                duration
            };

            table.add_row(vec![
                day.day.label().to_string(),
                day.start.clone(),
                day.pause.clone(),
                day.end.clone(),
                duration,
                day.tour.clone(),
                day.expense.clone(),
            ]);
        }
        out.push_str(&table.render());

        let hours = format_minutes(state.totals.total_minutes);
        let expense = format_expense(state.totals.total_expense, &cfg.currency);
        let (hours, expense) = if color {
            (colorize_total(&hours), colorize_total(&expense))
        } else {
            (hours, expense)
        };

        out.push_str(&format!("\n{} {}\n", label("Gesamtstunden"), hours));
        out.push_str(&format!("{} {}\n", label("Spesen gesamt"), expense));

        let signed = if report.signature.is_some() {
            "yes"
        } else {
            "no"
        };
        out.push_str(&format!("{} {}\n", label("Unterschrift"), signed));

        out
    }
}
