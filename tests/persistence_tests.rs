use chrono::NaiveDate;
use wochenbericht::core::form::{FormEvent, FormSession, SaveStatus};
use wochenbericht::errors::{AppError, AppResult};
use wochenbericht::models::{FieldId, WeeklyReport};
use wochenbericht::signature::{Point, PointerEvent, SignaturePad};
use wochenbericht::store::{
    KvStore, LoadOutcome, MemoryStore, PersistedRecord, Persistence, STORAGE_KEY,
};
use wochenbericht::utils::date::iso_week;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
}

/// Serves reads and writes, but refuses to delete anything.
struct LockedStore {
    inner: MemoryStore,
}

impl KvStore for LockedStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Storage("locked".into()))
    }
}

fn locked_with(raw: &str) -> LockedStore {
    let mut inner = MemoryStore::new();
    inner.set(STORAGE_KEY, raw).unwrap();
    LockedStore { inner }
}

fn signed_png() -> Vec<u8> {
    let mut pad = SignaturePad::new(60.0, 20.0, 2.0);
    pad.handle(PointerEvent::Down(Point::new(5.0, 5.0)));
    pad.handle(PointerEvent::Move(Point::new(40.0, 15.0)));
    pad.handle(PointerEvent::Up);
    pad.to_png().unwrap()
}

#[test]
fn test_fresh_store_gives_empty_report_for_current_week() {
    let mut p = Persistence::new(MemoryStore::new());
    let outcome = p.load(today()).unwrap();

    assert!(matches!(outcome, LoadOutcome::Fresh(_)));
    assert_eq!(outcome.report().week_number, iso_week(today()));
    assert_eq!(outcome.report().days.len(), 6);
}

#[test]
fn test_save_and_restore_same_week() {
    let mut report = WeeklyReport::empty(iso_week(today()));
    report.set_field(FieldId::Name, "Max Mustermann");
    report.set_field(FieldId::Start(0), "08:00");
    report.set_field(FieldId::Expense(2), "12,50");
    report.signature = Some(signed_png());

    let mut p = Persistence::new(MemoryStore::new());
    p.save(&report).unwrap();

    let outcome = p.load(today()).unwrap();
    assert!(matches!(outcome, LoadOutcome::Restored(_)));
    assert_eq!(outcome.into_report(), report);
}

#[test]
fn test_record_is_single_json_entry() {
    let mut report = WeeklyReport::empty(7);
    report.set_field(FieldId::Tour(1), "Nord");

    let mut store = MemoryStore::new();
    Persistence::new(&mut store).save(&report).unwrap();

    assert_eq!(store.len(), 1);
    let raw = store.get(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["weekNumber"], 7);
    assert_eq!(json["fields"]["tour-1"], "Nord");
    assert!(json.get("signature").is_none());
}

#[test]
fn test_other_week_is_purged() {
    let previous = iso_week(today()) - 1;
    let mut report = WeeklyReport::empty(previous);
    report.set_field(FieldId::Name, "Max");

    let mut store = MemoryStore::new();
    Persistence::new(&mut store).save(&report).unwrap();

    let outcome = Persistence::new(&mut store).load(today()).unwrap();
    match outcome {
        LoadOutcome::RolledOver {
            previous_week,
            report,
        } => {
            assert_eq!(previous_week, previous);
            assert_eq!(report, WeeklyReport::empty(iso_week(today())));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(store.is_empty());
}

#[test]
fn test_corrupt_record_is_discarded() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "{not json").unwrap();

    let outcome = Persistence::new(&mut store).load(today()).unwrap();

    assert!(matches!(outcome, LoadOutcome::Discarded(_)));
    assert_eq!(outcome.report().week_number, iso_week(today()));
    assert!(store.is_empty());
}

#[test]
fn test_broken_signature_keeps_fields() {
    let json = format!(
        r#"{{"weekNumber":{},"fields":{{"name":"Max","unknown-9":"x"}},"signature":"data:image/png;base64,AAAA"}}"#,
        iso_week(today())
    );
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, &json).unwrap();

    let outcome = Persistence::new(&mut store).load(today()).unwrap();
    let report = outcome.into_report();

    assert_eq!(report.reporter_name, "Max");
    assert_eq!(report.signature, None);
}

#[test]
fn test_record_maps_every_field() {
    let mut report = WeeklyReport::empty(3);
    report.set_field(FieldId::End(5), "14:00");

    let record = PersistedRecord::from_report(&report);
    assert_eq!(record.fields.len(), FieldId::all().len());

    let (back, signature) = record.to_report();
    assert_eq!(back, report);
    assert!(signature.is_none());
}

#[test]
fn test_session_saves_every_event() {
    let mut store = MemoryStore::new();
    {
        let mut session = FormSession::open(&mut store, today()).unwrap();
        let status = session.dispatch(FormEvent::SetField(FieldId::Start(0), "08:00".into()));
        assert_eq!(status, SaveStatus::Saved);
        session.dispatch(FormEvent::SetField(FieldId::End(0), "12:00".into()));
        assert_eq!(session.totals().total_minutes, 240);
    }

    let session = FormSession::open(&mut store, today()).unwrap();
    assert!(matches!(session.load_outcome(), LoadOutcome::Restored(_)));
    assert_eq!(session.report().field(FieldId::End(0)), "12:00");
    assert_eq!(session.totals().rows[0].duration_text, "04:00");
}

#[test]
fn test_failed_save_keeps_state() {
    let mut session = FormSession::open(MemoryStore::read_only(), today()).unwrap();

    let status = session.dispatch(FormEvent::SetField(FieldId::Name, "Erika".into()));

    assert!(matches!(status, SaveStatus::Unsaved(_)));
    assert_eq!(session.report().reporter_name, "Erika");
}

#[test]
fn test_reset_clears_signature_and_keeps_week() {
    let mut store = MemoryStore::new();
    let mut session = FormSession::open(&mut store, today()).unwrap();
    session.dispatch(FormEvent::SetSignature(Some(signed_png())));
    session.dispatch(FormEvent::SetField(FieldId::Tour(0), "A1".into()));

    session.dispatch(FormEvent::Reset);

    assert_eq!(session.report(), &WeeklyReport::empty(iso_week(today())));
}

#[test]
fn test_corrupt_record_loads_even_if_purge_fails() {
    let mut p = Persistence::new(locked_with("{not json"));

    let outcome = p.load(today()).unwrap();

    assert!(matches!(outcome, LoadOutcome::Discarded(_)));
    assert_eq!(outcome.report().week_number, iso_week(today()));
}

#[test]
fn test_stale_week_loads_even_if_purge_fails() {
    let previous = iso_week(today()) - 1;
    let raw = serde_json::to_string(&PersistedRecord::from_report(&WeeklyReport::empty(previous)))
        .unwrap();
    let mut p = Persistence::new(locked_with(&raw));

    let outcome = p.load(today()).unwrap();

    match outcome {
        LoadOutcome::RolledOver {
            previous_week,
            report,
        } => {
            assert_eq!(previous_week, previous);
            assert_eq!(report, WeeklyReport::empty(iso_week(today())));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_session_opens_on_locked_store_and_keeps_saving() {
    let mut session = FormSession::open(locked_with("garbage"), today()).unwrap();

    assert!(matches!(session.load_outcome(), LoadOutcome::Discarded(_)));
    // writes still go through, the new record replaces the garbage
    let status = session.dispatch(FormEvent::SetField(FieldId::Name, "Max".into()));
    assert_eq!(status, SaveStatus::Saved);
}
