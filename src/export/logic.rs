// src/export/logic.rs

use crate::config::Config;
use crate::core::form::AppState;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm_overwrite;
use crate::export::pdf::PdfRenderer;
use crate::export::share::{CommandShare, PDF_FILENAME, ShareOutcome, ShareTarget, export_and_share};
use crate::export::snapshot::ReportSnapshot;
use crate::export::text::text_summary;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::PersistedRecord;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Output path: the given file, or `<export_dir>/wochenbericht.<ext>`.
    pub fn resolve_path(cfg: &Config, file: Option<&str>, format: &ExportFormat) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => {
                let name = match format {
                    ExportFormat::Pdf => PDF_FILENAME.to_string(),
                    other => format!("wochenbericht.{}", other.as_str()),
                };
                expand_tilde(&cfg.export_dir).join(name)
            }
        }
    }

    pub fn export(
        state: &AppState,
        cfg: &Config,
        format: ExportFormat,
        path: &Path,
        force: bool,
        share: bool,
    ) -> AppResult<()> {
        confirm_overwrite(path, force)?;

        match format {
            ExportFormat::Pdf => Self::export_pdf(state, cfg, path, share),
            ExportFormat::Json => Self::export_json(state, path),
        }
    }

    fn export_pdf(state: &AppState, cfg: &Config, path: &Path, share: bool) -> AppResult<()> {
        info(format!("Exporting to PDF: {}", path.display()));

        let snapshot = ReportSnapshot::capture(state, cfg);
        let target = cfg
            .share_command
            .as_deref()
            .filter(|_| share)
            .map(CommandShare::new);

        let outcome = export_and_share(
            &snapshot,
            &PdfRenderer,
            target.as_ref().map(|t| t as &dyn ShareTarget),
            Some(text_summary(state, cfg)),
            path,
        )?;

        notify_export_success("PDF", outcome.path());

        match outcome {
            ShareOutcome::Shared(_) => info("PDF handed to the share command."),
            ShareOutcome::SavedOnly(_) => {
                info("PDF saved. Open it and send it manually (e.g. via WhatsApp).")
            }
            ShareOutcome::ShareFailed { reason, .. } => {
                warning(format!("Sharing cancelled or not possible: {reason}"))
            }
        }

        Ok(())
    }

    fn export_json(state: &AppState, path: &Path) -> AppResult<()> {
        info(format!("Exporting to JSON: {}", path.display()));

        let record = PersistedRecord::from_report(&state.report);
        let json = serde_json::to_string_pretty(&record)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;

        notify_export_success("JSON", path);
        Ok(())
    }
}
