// src/export/share.rs

use crate::errors::{AppError, AppResult};
use crate::export::DocumentRenderer;
use crate::export::snapshot::ReportSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const PDF_FILENAME: &str = "wochenbericht.pdf";
pub const PDF_MIME: &str = "application/pdf";
pub const SHARE_TITLE: &str = "Wochenbericht";

/// What is handed to the platform share mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub title: String,
    pub text: Option<String>,
}

impl SharePayload {
    pub fn pdf(bytes: Vec<u8>, text: Option<String>) -> Self {
        Self {
            filename: PDF_FILENAME.to_string(),
            mime: PDF_MIME,
            bytes,
            title: SHARE_TITLE.to_string(),
            text,
        }
    }
}

/// Platform share mechanism.
pub trait ShareTarget {
    fn can_share(&self, payload: &SharePayload) -> bool;

    /// `saved_at` is the local copy already written for the payload.
    fn share(&self, payload: &SharePayload, saved_at: &Path) -> AppResult<()>;
}

/// Shares by running an external program with the saved file as argument.
#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
}

impl CommandShare {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ShareTarget for CommandShare {
    fn can_share(&self, _payload: &SharePayload) -> bool {
        !self.program.trim().is_empty()
    }

    fn share(&self, _payload: &SharePayload, saved_at: &Path) -> AppResult<()> {
        let mut parts = self.program.split_whitespace();
        let exe = parts
            .next()
            .ok_or_else(|| AppError::Share("empty share command".into()))?;

        let status = Command::new(exe)
            .args(parts)
            .arg(saved_at)
            .status()
            .map_err(|e| AppError::Share(format!("cannot run '{exe}': {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Share(format!("'{exe}' exited with {status}")))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// Saved locally and handed to the share target.
    Shared(PathBuf),
    /// Saved locally; no share mechanism available.
    SavedOnly(PathBuf),
    /// Saved locally; sharing was attempted and failed (or was cancelled).
    ShareFailed { path: PathBuf, reason: String },
}

impl ShareOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ShareOutcome::Shared(p) | ShareOutcome::SavedOnly(p) => p,
            ShareOutcome::ShareFailed { path, .. } => path,
        }
    }
}

/// Render the snapshot, save it to `out`, then offer it to `target`.
///
/// The local file is always written first. Only rendering or saving errors
/// are returned; a share failure is reported through the outcome.
pub fn export_and_share(
    snapshot: &ReportSnapshot,
    renderer: &dyn DocumentRenderer,
    target: Option<&dyn ShareTarget>,
    text: Option<String>,
    out: &Path,
) -> AppResult<ShareOutcome> {
    let bytes = renderer.render(snapshot)?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, &bytes)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", out.display())))?;

    let payload = SharePayload::pdf(bytes, text);

    let outcome = match target {
        Some(t) if t.can_share(&payload) => match t.share(&payload, out) {
            Ok(()) => ShareOutcome::Shared(out.to_path_buf()),
            Err(e) => ShareOutcome::ShareFailed {
                path: out.to_path_buf(),
                reason: e.to_string(),
            },
        },
        _ => ShareOutcome::SavedOnly(out.to_path_buf()),
    };

    Ok(outcome)
}
