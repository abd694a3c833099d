use crate::config::Config;
use crate::core::form::{FormEvent, FormSession, SaveStatus};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::signature::SignaturePad;
use crate::signature::script::{PadCommand, apply};
use crate::ui::messages::{info, success, warning};

pub struct SignLogic;

impl SignLogic {
    /// Pad for the current report: the saved signature if it fits the
    /// configured surface, a blank one otherwise.
    pub fn pad_for(session: &FormSession<DbPool>, cfg: &Config) -> SignaturePad {
        let blank = SignaturePad::new(cfg.signature_width, cfg.signature_height, cfg.pixel_ratio);

        let Some(png) = session.report().signature.as_deref() else {
            return blank;
        };

        match SignaturePad::from_png(png, cfg.pixel_ratio) {
            Ok(pad) if pad.raster().width() == blank.raster().width()
                && pad.raster().height() == blank.raster().height() =>
            {
                pad
            }
            Ok(_) => {
                warning("Signature surface size changed, starting from a blank pad.");
                blank
            }
            Err(e) => {
                warning(format!("Saved signature unreadable ({e}), starting from a blank pad."));
                blank
            }
        }
    }

    /// Replay pointer input on the pad and store the result.
    ///
    /// A blank pad removes the signature from the report.
    pub fn apply(
        session: &mut FormSession<DbPool>,
        cfg: &Config,
        commands: &[PadCommand],
    ) -> AppResult<SaveStatus> {
        let mut pad = Self::pad_for(session, cfg);
        apply(&mut pad, commands);

        let (png, message) = if pad.is_blank() {
            (None, "signature cleared".to_string())
        } else {
            let png = pad.to_png()?;
            let msg = format!(
                "{}x{} px signature stored",
                pad.raster().width(),
                pad.raster().height()
            );
            (Some(png), msg)
        };

        let cleared = png.is_none();
        let status = session.dispatch(FormEvent::SetSignature(png));

        if status == SaveStatus::Saved {
            audit(session.persistence().store(), "sign", "signature", &message);
            if cleared {
                info("Signature cleared.");
            } else {
                success("Signature saved.");
            }
        }

        Ok(status)
    }
}
