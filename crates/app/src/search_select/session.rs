use serde::{Deserialize, Serialize};
use shared_types::{Candidate, SurfaceView};
use std::fmt;

use super::scheduler::DeferredHandle;

/// The search surfaces hosted by the client. Each one owns an independent
/// [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionId {
    /// "Add to watchlist" form on the dashboard.
    Dashboard,
    /// "Recommend to a friend" form.
    Recommend,
}

impl SessionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionId::Dashboard => "dashboard",
            SessionId::Recommend => "recommend",
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled job together with the ticket it was issued under.
pub(crate) struct Pending<H> {
    pub(crate) ticket: u64,
    pub(crate) handle: H,
}

/// State of one search surface.
///
/// `confirmed` is only ever set from `last_results`, and any edit of `input`
/// clears it.
pub struct SearchSession<H> {
    pub(crate) input: String,
    pub(crate) last_results: Vec<Candidate>,
    pub(crate) confirmed: Option<Candidate>,
    pub(crate) surface: SurfaceView,
    /// Sequence number of the newest lookup issued for this session.
    pub(crate) seq: u64,
    pub(crate) pending_search: Option<Pending<H>>,
    pub(crate) pending_hide: Option<Pending<H>>,
}

impl<H> Default for SearchSession<H> {
    fn default() -> Self {
        Self {
            input: String::new(),
            last_results: Vec::new(),
            confirmed: None,
            surface: SurfaceView::hidden(),
            seq: 0,
            pending_search: None,
            pending_hide: None,
        }
    }
}

impl<H: DeferredHandle> SearchSession<H> {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn last_results(&self) -> &[Candidate] {
        &self.last_results
    }

    pub fn confirmed(&self) -> Option<&Candidate> {
        self.confirmed.as_ref()
    }

    pub fn surface(&self) -> &SurfaceView {
        &self.surface
    }

    pub(crate) fn cancel_search(&mut self) {
        if let Some(mut pending) = self.pending_search.take() {
            pending.handle.cancel();
        }
    }

    pub(crate) fn cancel_hide(&mut self) {
        if let Some(mut pending) = self.pending_hide.take() {
            pending.handle.cancel();
        }
    }

    pub(crate) fn hide(&mut self) {
        self.surface = SurfaceView::hidden();
    }

    /// Drop every lookup issued so far; their completions become stale.
    pub(crate) fn invalidate_lookups(&mut self) {
        self.seq += 1;
    }

    /// Back to the freshly created state. The sequence number keeps counting
    /// so lookups issued before the reset stay stale.
    pub(crate) fn clear(&mut self) {
        self.cancel_search();
        self.cancel_hide();
        self.invalidate_lookups();
        self.input.clear();
        self.last_results.clear();
        self.confirmed = None;
        self.hide();
    }
}
