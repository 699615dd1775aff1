//! Fetch Sequencing
//!
//! Requests are never cancelled; instead each list fetch takes a ticket and
//! only the response holding the latest ticket may replace the visible page.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: AtomicU64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::Relaxed).wrapping_add(1))
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}
