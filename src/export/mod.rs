// src/export/mod.rs

mod fs_utils;
pub mod logic;
pub mod pdf;
pub mod share;
pub mod snapshot;
pub mod text;

pub use logic::ExportLogic;
pub use snapshot::ReportSnapshot;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Turns a flattened report into shareable document bytes.
pub trait DocumentRenderer {
    fn render(&self, snapshot: &ReportSnapshot) -> AppResult<Vec<u8>>;
}

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }
}
