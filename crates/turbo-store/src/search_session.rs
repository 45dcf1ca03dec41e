//! Search-as-you-type session.
//!
//! ```text
//! Idle -> Typing -> Searching -> Results | Empty | Error
//!           ^                        |
//!           +------------------------+
//! ```
//!
//! Typing restarts the debounce window. A settled query identical to the
//! previous one returns the session to its last settled phase without a new
//! request.

use crate::action::Action;
use crate::debounce::QueryDebouncer;
use crate::state::SearchState;
use std::time::Duration;
use tokio::time::Instant;
use turbo_commerce::search::normalize_query;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Typing { query: String },
    Searching { query: String },
    Results { query: String, count: usize },
    Empty { query: String },
    Error { query: String, message: String },
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    phase: SearchPhase,
    settled: SearchPhase,
    debouncer: QueryDebouncer,
}

impl SearchSession {
    pub fn new(window: Duration) -> Self {
        Self {
            phase: SearchPhase::Idle,
            settled: SearchPhase::Idle,
            debouncer: QueryDebouncer::new(window),
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// When the typed query settles, if the user is typing.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The user typed `raw`.
    pub fn input(&mut self, raw: &str, now: Instant) {
        self.debouncer.push(raw, now);
        self.phase = SearchPhase::Typing {
            query: normalize_query(raw),
        };
    }

    /// Advance the clock. Returns the action to dispatch once the typed query
    /// has settled and differs from the last one searched.
    pub fn poll(&mut self, now: Instant) -> Option<Action> {
        if !matches!(self.phase, SearchPhase::Typing { .. }) {
            return None;
        }

        match self.debouncer.poll(now) {
            Some(query) => {
                self.phase = SearchPhase::Searching {
                    query: query.clone(),
                };
                Some(Action::SetQuery(query))
            }
            None => {
                if self.debouncer.deadline().is_none() {
                    self.phase = self.settled.clone();
                }
                None
            }
        }
    }

    /// Take the outcome of the pending search from the store.
    pub fn observe(&mut self, state: &SearchState) {
        let SearchPhase::Searching { query } = &self.phase else {
            return;
        };
        if state.loading {
            return;
        }

        let query = query.clone();
        self.phase = match &state.error {
            Some(message) => SearchPhase::Error {
                query,
                message: message.clone(),
            },
            None if state.results.is_empty() => SearchPhase::Empty { query },
            None => SearchPhase::Results {
                query,
                count: state.results.len(),
            },
        };
        self.settled = self.phase.clone();
    }
}
