use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use wochenbericht::config::Config;
use wochenbericht::core::form::{AppState, FormEvent, reduce};
use wochenbericht::errors::{AppError, AppResult};
use wochenbericht::export::pdf::{PAGE_WIDTH_PT, PdfRenderer, scale_to_width};
use wochenbericht::export::share::{
    PDF_FILENAME, PDF_MIME, ShareOutcome, SharePayload, ShareTarget, export_and_share,
};
use wochenbericht::export::snapshot::{COLUMNS, ReportSnapshot};
use wochenbericht::export::text::{text_summary, whatsapp_link};
use wochenbericht::export::DocumentRenderer;
use wochenbericht::models::{FieldId, WeeklyReport};
use wochenbericht::signature::{Point, PointerEvent, SignaturePad};

mod common;
use common::temp_out;

fn filled_state() -> AppState {
    let mut state = AppState::new(WeeklyReport::empty(43));
    let edits = [
        (FieldId::Name, "Max Mustermann"),
        (FieldId::From, "19.10.2026"),
        (FieldId::To, "24.10.2026"),
        (FieldId::Start(0), "08:00"),
        (FieldId::Pause(0), "30"),
        (FieldId::End(0), "16:30"),
        (FieldId::Tour(0), "A12"),
        (FieldId::Expense(0), "12,50"),
        (FieldId::Expense(2), "7,50"),
    ];
    for (id, value) in edits {
        state = reduce(state, FormEvent::SetField(id, value.to_string()));
    }
    state
}

fn with_signature(state: AppState) -> AppState {
    let mut pad = SignaturePad::new(300.0, 100.0, 2.0);
    pad.handle(PointerEvent::Down(Point::new(20.0, 60.0)));
    pad.handle(PointerEvent::Move(Point::new(120.0, 30.0)));
    pad.handle(PointerEvent::Move(Point::new(220.0, 70.0)));
    pad.handle(PointerEvent::Up);
    reduce(state, FormEvent::SetSignature(Some(pad.to_png().unwrap())))
}

/// Records every share call and answers with a fixed result.
struct MockShare {
    available: bool,
    fail: bool,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl MockShare {
    fn new(available: bool, fail: bool) -> Self {
        Self {
            available,
            fail,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ShareTarget for MockShare {
    fn can_share(&self, payload: &SharePayload) -> bool {
        self.available && payload.mime == PDF_MIME
    }

    fn share(&self, payload: &SharePayload, saved_at: &Path) -> AppResult<()> {
        // the local copy must exist before sharing
        assert!(saved_at.exists());
        self.calls
            .borrow_mut()
            .push((payload.filename.clone(), saved_at.to_path_buf()));
        if self.fail {
            Err(AppError::Share("user cancelled".into()))
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_snapshot_layout() {
    let snap = ReportSnapshot::capture(&filled_state(), &Config::default());

    assert_eq!(snap.columns, COLUMNS);
    assert_eq!(snap.rows.len(), 6);
    assert_eq!(
        snap.rows[0],
        vec!["Montag", "08:00", "30", "16:30", "08:00", "A12", "12,50"]
    );
    assert_eq!(snap.rows[1][4], "");
    assert!(snap.header.contains(&("KW".to_string(), "43".to_string())));
    assert!(snap.totals.contains(&("Spesen gesamt".to_string(), "20,00 €".to_string())));
    assert!(snap.signature.is_none());
}

#[test]
fn test_pdf_render() {
    let state = with_signature(filled_state());
    let snap = ReportSnapshot::capture(&state, &Config::default());
    assert!(snap.signature.is_some());

    let bytes = PdfRenderer.render(&snap).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Image"));
    assert!(text.contains("Helvetica"));
}

#[test]
fn test_scale_to_width() {
    let (w, h) = scale_to_width(600.0, 200.0, 300.0);
    assert_eq!(w, 300.0);
    assert_eq!(h, 100.0);

    let (w, h) = scale_to_width(1190.56, 1683.78, PAGE_WIDTH_PT);
    assert!((w - PAGE_WIDTH_PT).abs() < 0.01);
    assert!((h - 841.89).abs() < 0.01);
}

#[test]
fn test_export_saves_when_share_unavailable() {
    let out = temp_out("export_share_unavailable", "pdf");
    let snap = ReportSnapshot::capture(&filled_state(), &Config::default());

    let outcome = export_and_share(&snap, &PdfRenderer, None, None, Path::new(&out)).unwrap();

    assert_eq!(outcome, ShareOutcome::SavedOnly(PathBuf::from(&out)));
    assert!(fs::read(&out).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_export_shares_pdf() {
    let out = temp_out("export_share_ok", "pdf");
    let snap = ReportSnapshot::capture(&filled_state(), &Config::default());
    let target = MockShare::new(true, false);

    let outcome = export_and_share(
        &snap,
        &PdfRenderer,
        Some(&target),
        Some("hello".into()),
        Path::new(&out),
    )
    .unwrap();

    assert_eq!(outcome, ShareOutcome::Shared(PathBuf::from(&out)));
    let calls = target.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, PDF_FILENAME);
}

#[test]
fn test_export_keeps_file_when_share_fails() {
    let out = temp_out("export_share_fail", "pdf");
    let snap = ReportSnapshot::capture(&filled_state(), &Config::default());
    let target = MockShare::new(true, true);

    let outcome =
        export_and_share(&snap, &PdfRenderer, Some(&target), None, Path::new(&out)).unwrap();

    match outcome {
        ShareOutcome::ShareFailed { path, reason } => {
            assert_eq!(path, PathBuf::from(&out));
            assert!(reason.contains("user cancelled"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(Path::new(&out).exists());
}

#[test]
fn test_export_skips_target_that_cannot_share() {
    let out = temp_out("export_share_cannot", "pdf");
    let snap = ReportSnapshot::capture(&filled_state(), &Config::default());
    let target = MockShare::new(false, false);

    let outcome =
        export_and_share(&snap, &PdfRenderer, Some(&target), None, Path::new(&out)).unwrap();

    assert!(matches!(outcome, ShareOutcome::SavedOnly(_)));
    assert!(target.calls.borrow().is_empty());
}

#[test]
fn test_text_summary() {
    let text = text_summary(&filled_state(), &Config::default());

    assert!(text.starts_with("Wochenbericht\n"));
    assert!(text.contains("Name: Max Mustermann\n"));
    assert!(text.contains("Zeitraum: 19.10.2026 - 24.10.2026\n"));
    assert!(text.contains("KW: 43\n"));
    assert!(text.contains(
        "Montag: 08:00 - 16:30, Pause 30 Min, Std 08:00, Tour A12, Spesen 12,50\n"
    ));
    assert!(text.contains("Mittwoch: - - -, Pause 0 Min, Std 00:00, Tour -, Spesen 7,50\n"));
    // rows without content are left out
    assert!(!text.contains("Dienstag"));
    assert!(text.ends_with("Gesamtstunden: 08:00\nSpesen gesamt: 20,00 €"));
}

#[test]
fn test_whatsapp_link() {
    let link = whatsapp_link("KW: 43\nSpesen 7,50 €");
    assert_eq!(
        link,
        "https://wa.me/?text=KW%3A%2043%0ASpesen%207%2C50%20%E2%82%AC"
    );
}
