// src/export/snapshot.rs

use crate::config::Config;
use crate::core::calculator::format_expense;
use crate::core::form::AppState;
use crate::signature::{Raster, png};
use crate::ui::messages::warning;
use crate::utils::time::format_minutes;

pub const TITLE: &str = "Wochenbericht";

/// Column headers of the day table.
pub const COLUMNS: [&str; 7] = ["Tag", "Beginn", "Pause", "Ende", "Std.", "Tour", "Spesen"];

/// Flat, render-ready view of the current form.
///
/// This is what a document renderer gets to see: plain strings laid out as
/// on the paper form, plus the signature pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSnapshot {
    pub title: String,
    pub header: Vec<(String, String)>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<(String, String)>,
    pub signature: Option<Raster>,
}

impl ReportSnapshot {
    pub fn capture(state: &AppState, cfg: &Config) -> Self {
        let report = &state.report;

        let period = if report.period_start.is_empty() && report.period_end.is_empty() {
            String::new()
        } else {
            format!("{} - {}", report.period_start, report.period_end)
        };

        let header = vec![
            ("Name".to_string(), report.reporter_name.clone()),
            ("Zeitraum".to_string(), period),
            ("KW".to_string(), report.week_number.to_string()),
        ];

        let rows = report
            .days
            .iter()
            .zip(&state.totals.rows)
            .map(|(d, r)| {
                vec![
                    d.day.label().to_string(),
                    d.start.clone(),
                    d.pause.clone(),
                    d.end.clone(),
                    r.duration_text.clone(),
                    d.tour.clone(),
                    d.expense.clone(),
                ]
            })
            .collect();

        let totals = vec![
            (
                "Gesamtstunden".to_string(),
                format_minutes(state.totals.total_minutes),
            ),
            (
                "Spesen gesamt".to_string(),
                format_expense(state.totals.total_expense, &cfg.currency),
            ),
        ];

        let signature = report
            .signature
            .as_deref()
            .and_then(|bytes| match png::decode(bytes) {
                Ok(r) => Some(r),
                Err(e) => {
                    warning(format!("Signature not rendered: {e}"));
                    None
                }
            });

        Self {
            title: TITLE.to_string(),
            header,
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            totals,
            signature,
        }
    }
}
