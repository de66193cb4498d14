//! Debounced title search with a "pick, don't type" gate.
//!
//! [`SearchSelectController`] is a plain state machine: the view feeds it user
//! events, a [`Scheduler`] delivers its deferred jobs back through
//! [`SearchSelectController::fire`], and the driver performs the network half
//! of each [`Lookup`] before handing the outcome to
//! [`SearchSelectController::complete_search`]. [`use_search_select_provider`]
//! wires all of that to Dioxus signals and tasks.

pub mod client;
pub mod scheduler;
pub mod session;

use dioxus::prelude::*;
use futures_util::StreamExt;
use shared_types::{
    Candidate, SelectionError, SurfaceView, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE,
};
use std::collections::HashMap;
use std::time::Duration;

pub use client::{run_lookup, HttpTitleSearch, LookupOutcome, TitleSearch};
pub use scheduler::{Deferred, DeferredHandle, DeferredTask, DioxusScheduler, Scheduler};
pub use session::{SearchSession, SessionId};

use session::Pending;

/// Timing and length thresholds of the search surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTuning {
    /// Quiet period after the last keystroke before a lookup is issued.
    pub debounce: Duration,
    /// Delay between blur or pick and the surface disappearing, so a click on
    /// a row lands before the row is gone.
    pub hide_delay: Duration,
    /// Minimum trimmed length, in characters, worth searching for.
    pub min_query_chars: usize,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            hide_delay: Duration::from_millis(200),
            min_query_chars: 2,
        }
    }
}

/// A lookup the controller has issued and is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub session: SessionId,
    pub seq: u64,
    pub query: String,
}

/// Owns every [`SearchSession`] and the rules that move them.
pub struct SearchSelectController<H> {
    tuning: SearchTuning,
    sessions: HashMap<SessionId, SearchSession<H>>,
    next_ticket: u64,
}

impl<H: DeferredHandle> Default for SearchSelectController<H> {
    fn default() -> Self {
        Self::new(SearchTuning::default())
    }
}

impl<H: DeferredHandle> SearchSelectController<H> {
    pub fn new(tuning: SearchTuning) -> Self {
        Self {
            tuning,
            sessions: HashMap::new(),
            next_ticket: 0,
        }
    }

    pub fn session(&self, id: SessionId) -> Option<&SearchSession<H>> {
        self.sessions.get(&id)
    }

    fn session_mut(&mut self, id: SessionId) -> &mut SearchSession<H> {
        self.sessions.entry(id).or_default()
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Current text of the session's input (empty for an untouched surface).
    pub fn input(&self, id: SessionId) -> &str {
        self.session(id).map(|s| s.input()).unwrap_or_default()
    }

    pub fn confirmed(&self, id: SessionId) -> Option<&Candidate> {
        self.session(id).and_then(|s| s.confirmed())
    }

    pub fn last_results(&self, id: SessionId) -> &[Candidate] {
        self.session(id).map(|s| s.last_results()).unwrap_or_default()
    }

    /// What the view should draw for `id`.
    pub fn surface(&self, id: SessionId) -> SurfaceView {
        self.session(id)
            .map(|s| s.surface().clone())
            .unwrap_or_default()
    }

    /// React to every mutation of the session's input.
    ///
    /// Short input hides the surface at once and drops any lookup still in
    /// flight. Anything longer (re)starts the quiet period; only the last
    /// pause issues a lookup.
    pub fn on_input_changed<S>(&mut self, scheduler: &S, id: SessionId, raw: &str)
    where
        S: Scheduler<Handle = H>,
    {
        let SearchTuning {
            debounce,
            min_query_chars,
            ..
        } = self.tuning;
        let ticket = self.issue_ticket();
        let session = self.session_mut(id);

        session.input = raw.to_string();
        session.confirmed = None;
        session.cancel_search();

        let query = raw.trim();
        if query.chars().count() < min_query_chars {
            if query.is_empty() {
                session.last_results.clear();
            }
            session.invalidate_lookups();
            session.hide();
            return;
        }

        let handle = scheduler.schedule(
            debounce,
            Deferred::Search {
                session: id,
                ticket,
                query: query.to_string(),
            },
        );
        session.pending_search = Some(Pending { ticket, handle });
    }

    /// Run a job delivered by the scheduler. Returns the lookup to perform
    /// when a search fires; jobs that were superseded are ignored.
    pub fn fire(&mut self, job: Deferred) -> Option<Lookup> {
        let id = job.session();
        let session = self.sessions.get_mut(&id)?;

        match job {
            Deferred::Search { ticket, query, .. } => {
                if session.pending_search.as_ref().map(|p| p.ticket) != Some(ticket) {
                    tracing::debug!(session = %id, ticket, "Ignoring superseded search");
                    return None;
                }
                session.pending_search = None;
                Some(self.execute_search(id, &query))
            }
            Deferred::Hide { ticket, .. } => {
                if session.pending_hide.as_ref().map(|p| p.ticket) != Some(ticket) {
                    tracing::debug!(session = %id, ticket, "Ignoring superseded hide");
                    return None;
                }
                session.pending_hide = None;
                session.hide();
                None
            }
        }
    }

    /// Issue a lookup for `query`. Every earlier lookup of the session becomes
    /// stale and the confirmed selection is dropped.
    pub fn execute_search(&mut self, id: SessionId, query: &str) -> Lookup {
        let session = self.session_mut(id);
        session.invalidate_lookups();
        session.confirmed = None;
        Lookup {
            session: id,
            seq: session.seq,
            query: query.to_string(),
        }
    }

    /// Apply the outcome of `lookup`. Returns `false`, leaving the session
    /// untouched, when a newer lookup has been issued since.
    pub fn complete_search(&mut self, lookup: &Lookup, outcome: LookupOutcome) -> bool {
        let Some(session) = self.sessions.get_mut(&lookup.session) else {
            return false;
        };
        if lookup.seq != session.seq {
            tracing::debug!(
                session = %lookup.session,
                seq = lookup.seq,
                current = session.seq,
                "Discarding stale lookup"
            );
            return false;
        }

        match outcome {
            LookupOutcome::Found(candidates) if !candidates.is_empty() => {
                session.surface = SurfaceView::results(candidates.clone());
                session.last_results = candidates;
            }
            LookupOutcome::Found(_) | LookupOutcome::NoResults => {
                session.last_results.clear();
                session.surface = SurfaceView::message(NO_RESULTS_MESSAGE);
            }
            LookupOutcome::Failed(_) => {
                session.last_results.clear();
                session.surface = SurfaceView::message(SEARCH_FAILED_MESSAGE);
            }
        }
        true
    }

    /// Confirm the candidate titled `title` from the latest results. A title
    /// that is not among them (a click on an outdated row) changes nothing.
    /// A pick also drops the pending search and any lookup still in flight.
    ///
    /// Titles are the only identity: with duplicates the first one wins.
    pub fn select_candidate<S>(&mut self, scheduler: &S, id: SessionId, title: &str) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        let hide_delay = self.tuning.hide_delay;
        let ticket = self.issue_ticket();
        let Some(session) = self.sessions.get_mut(&id) else {
            return false;
        };
        let Some(candidate) = session
            .last_results
            .iter()
            .find(|c| c.title == title)
            .cloned()
        else {
            tracing::debug!(session = %id, title, "Pick of a title not in the latest results");
            return false;
        };

        session.cancel_search();
        session.invalidate_lookups();
        session.input = candidate.title.clone();
        session.confirmed = Some(candidate);
        schedule_hide(session, scheduler, id, ticket, hide_delay);
        true
    }

    pub fn on_input_blurred<S>(&mut self, scheduler: &S, id: SessionId)
    where
        S: Scheduler<Handle = H>,
    {
        let hide_delay = self.tuning.hide_delay;
        let ticket = self.issue_ticket();
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        schedule_hide(session, scheduler, id, ticket, hide_delay);
    }

    /// Cancel a hide still waiting from a blur and bring the latest results
    /// back if the input still warrants them.
    pub fn on_input_focused(&mut self, id: SessionId) {
        let min_query_chars = self.tuning.min_query_chars;
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.cancel_hide();

        if session.input.trim().chars().count() >= min_query_chars
            && !session.last_results.is_empty()
        {
            session.surface = SurfaceView::results(session.last_results.clone());
        }
    }

    /// The gate every submit goes through before contacting the backend.
    pub fn validate_for_submit(
        &self,
        id: SessionId,
        current_input: &str,
    ) -> Result<Candidate, SelectionError> {
        let text = current_input.trim();
        if text.is_empty() {
            return Err(SelectionError::EmptyInput);
        }
        let confirmed = self.confirmed(id).ok_or(SelectionError::NoSelection)?;
        if confirmed.title != text {
            return Err(SelectionError::SelectionMismatch);
        }
        Ok(confirmed.clone())
    }

    /// Cancel timers, forget results and selection, clear the input.
    pub fn reset(&mut self, id: SessionId) {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.clear();
        }
    }
}

fn schedule_hide<H, S>(
    session: &mut SearchSession<H>,
    scheduler: &S,
    id: SessionId,
    ticket: u64,
    delay: Duration,
) where
    H: DeferredHandle,
    S: Scheduler<Handle = H>,
{
    session.cancel_hide();
    let handle = scheduler.schedule(delay, Deferred::Hide { session: id, ticket });
    session.pending_hide = Some(Pending { ticket, handle });
}

// ---------------------------------------------------------------------------
// Dioxus wiring
// ---------------------------------------------------------------------------

/// Search-select state shared with every route through context.
#[derive(Clone, Copy)]
pub struct SearchSelect {
    pub controller: Signal<SearchSelectController<DeferredTask>>,
    scheduler: DioxusScheduler,
}

impl SearchSelect {
    pub fn input(&self, id: SessionId) -> String {
        self.controller.read().input(id).to_string()
    }

    pub fn surface(&self, id: SessionId) -> SurfaceView {
        self.controller.read().surface(id)
    }

    pub fn input_changed(&self, id: SessionId, text: &str) {
        let mut controller = self.controller;
        controller
            .write()
            .on_input_changed(&self.scheduler, id, text);
    }

    pub fn candidate_clicked(&self, id: SessionId, title: &str) {
        let mut controller = self.controller;
        controller
            .write()
            .select_candidate(&self.scheduler, id, title);
    }

    pub fn input_blurred(&self, id: SessionId) {
        let mut controller = self.controller;
        controller.write().on_input_blurred(&self.scheduler, id);
    }

    pub fn input_focused(&self, id: SessionId) {
        let mut controller = self.controller;
        controller.write().on_input_focused(id);
    }

    pub fn reset(&self, id: SessionId) {
        let mut controller = self.controller;
        controller.write().reset(id);
    }
}

/// Create the controller, its driver coroutine and the context. Call once,
/// from the root component.
pub fn use_search_select_provider() -> SearchSelect {
    let controller = use_signal(SearchSelectController::<DeferredTask>::default);

    let driver = use_coroutine(move |mut jobs: UnboundedReceiver<Deferred>| {
        let mut controller = controller;
        let client = HttpTitleSearch::from_env();
        async move {
            while let Some(job) = jobs.next().await {
                let lookup = controller.write().fire(job);
                let Some(lookup) = lookup else {
                    continue;
                };
                let client = client.clone();
                spawn(async move {
                    let outcome = run_lookup(&client, &lookup).await;
                    controller.write().complete_search(&lookup, outcome);
                });
            }
        }
    });

    use_context_provider(|| SearchSelect {
        controller,
        scheduler: DioxusScheduler::new(driver),
    })
}

/// Hook to access the search-select context.
pub fn use_search_select() -> SearchSelect {
    use_context::<SearchSelect>()
}
