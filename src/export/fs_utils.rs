// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Answers that allow replacing an earlier export (English or German).
const YES: [&str; 4] = ["y", "yes", "j", "ja"];

/// Make sure an earlier export of the report is only replaced on purpose.
///
/// Nothing to ask when the target is new or `force` is set. Otherwise the
/// user is asked on stdin; anything but yes/ja keeps the old file.
pub(crate) fn confirm_overwrite(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!(
        "An exported report already exists at '{}'.",
        path.display()
    ));
    print!("Replace it with the current week? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if YES.contains(&answer.trim().to_lowercase().as_str()) {
        info("Previous export will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "kept the existing file {}, nothing exported",
            path.display()
        )))
    }
}
