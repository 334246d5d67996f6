//! Event detail aggregation state.
//!
//! The combined event+hotel bundle is fetched per event id. A user clicking
//! through events quickly can have several fetches in flight at once; each
//! `begin` hands out a ticket and `finish` applies a result only while its
//! ticket is still current, so the displayed bundle always corresponds to
//! the most recently *requested* id, never merely the most recently
//! resolved one. The transport is not cancelled — discarding the result is
//! what matters.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::ApiError;
use crate::net::types::EventDetailBundle;

/// Where the detail view currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailPhase {
    /// Nothing requested (modal closed).
    #[default]
    Idle,
    /// A fetch is in flight; nothing from an earlier id is shown.
    Loading,
    /// The bundle for the most recently requested id.
    Ready(EventDetailBundle),
    /// The most recent request failed or found nothing.
    Failed,
}

/// Ticketed fetch state for the detail modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    ticket: u64,
    pub phase: DetailPhase,
}

impl DetailState {
    /// Start a new request: drop any previous bundle, enter `Loading`, and
    /// return the ticket the eventual result must present.
    pub fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.phase = DetailPhase::Loading;
        self.ticket
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when
    /// the ticket is stale — a newer request or a reset has superseded it.
    pub fn finish(
        &mut self,
        ticket: u64,
        outcome: Result<EventDetailBundle, ApiError>,
    ) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.phase = match outcome {
            Ok(bundle) => DetailPhase::Ready(bundle),
            Err(_) => DetailPhase::Failed,
        };
        true
    }

    /// Close the view. Also invalidates any in-flight ticket so a late
    /// response cannot reopen stale content.
    pub fn reset(&mut self) {
        self.ticket += 1;
        self.phase = DetailPhase::Idle;
    }
}
