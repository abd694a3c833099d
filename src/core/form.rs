//! Form state and its update path.
//!
//! Every user input is a [`FormEvent`]; [`reduce`] applies it and recomputes
//! the totals, [`FormSession`] additionally mirrors the result into storage.

use crate::core::calculator::compute_totals;
use crate::errors::AppResult;
use crate::models::{ComputedTotals, FieldId, WeeklyReport};
use crate::store::{KvStore, LoadOutcome, Persistence};
use crate::ui::messages::warning;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SetField(FieldId, String),
    /// PNG bytes of the signature; `None` removes it.
    SetSignature(Option<Vec<u8>>),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub report: WeeklyReport,
    pub totals: ComputedTotals,
}

impl AppState {
    pub fn new(report: WeeklyReport) -> Self {
        let totals = compute_totals(&report);
        Self { report, totals }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(WeeklyReport::empty(0))
    }
}

/// Apply one event and recompute all totals.
pub fn reduce(mut state: AppState, event: FormEvent) -> AppState {
    match event {
        FormEvent::SetField(id, value) => state.report.set_field(id, value),
        FormEvent::SetSignature(png) => state.report.signature = png,
        FormEvent::Reset => state.report.clear(),
    }
    state.totals = compute_totals(&state.report);
    state
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved,
    /// The write failed; the in-memory state is still valid.
    Unsaved(String),
}

/// A loaded form bound to its storage.
pub struct FormSession<S: KvStore> {
    state: AppState,
    persistence: Persistence<S>,
    outcome: LoadOutcome,
}

impl<S: KvStore> FormSession<S> {
    /// Load the report for the week containing `today` (rollover applied).
    pub fn open(store: S, today: NaiveDate) -> AppResult<Self> {
        let mut persistence = Persistence::new(store);
        let outcome = persistence.load(today)?;
        let state = AppState::new(outcome.report().clone());

        Ok(Self {
            state,
            persistence,
            outcome,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn report(&self) -> &WeeklyReport {
        &self.state.report
    }

    pub fn totals(&self) -> &ComputedTotals {
        &self.state.totals
    }

    /// How the report was obtained at `open` time.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Reduce, then save. A failing save never loses the in-memory edit.
    pub fn dispatch(&mut self, event: FormEvent) -> SaveStatus {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
        self.save()
    }

    pub fn save(&mut self) -> SaveStatus {
        match self.persistence.save(&self.state.report) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warning(format!("Report kept in memory only, saving failed: {e}"));
                SaveStatus::Unsaved(e.to_string())
            }
        }
    }
}
