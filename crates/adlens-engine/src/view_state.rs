//! View state for one dashboard session.
//!
//! Holds the loaded collection plus the filter and sort selection, and keeps
//! the visible sequence in sync. Every mutation funnels through
//! [`compute_visible`], so the visible records are always
//! `all -> filter(status) -> sort(key, direction)`.

use adlens_types::{CampaignRecord, SortDirection, SortKey, StatusFilter};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::aggregate::{AggregateResult, aggregate};
use crate::filter::filter_by_status;
use crate::insights::{InsightsReport, build_insights};
use crate::sort::sort_records;

/// Records are shared between the full and the visible sequence
pub type SharedRecord = Arc<CampaignRecord>;

/// Filter first, then sort.
pub fn compute_visible<R>(
    all: &[R],
    status_filter: StatusFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
) -> Vec<R>
where
    R: Borrow<CampaignRecord> + Clone,
{
    let filtered = filter_by_status(all, status_filter);
    sort_records(&filtered, sort_key, sort_direction)
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No collection yet (initial load or reload in flight)
    Loading,
    Loaded(Vec<SharedRecord>),
    /// The last load failed; carries a user-facing message
    Failed(String),
}

/// Token issued by [`ViewState::begin_load`].
///
/// Only the most recently issued ticket may complete a load; results carrying
/// an older ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ViewState {
    load_state: LoadState,
    status_filter: StatusFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
    visible: Vec<SharedRecord>,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::with_selection(
            StatusFilter::default(),
            SortKey::default(),
            SortDirection::default(),
        )
    }

    /// Start with an explicit filter/sort selection (e.g. from configuration).
    pub fn with_selection(
        status_filter: StatusFilter,
        sort_key: SortKey,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            load_state: LoadState::Loading,
            status_filter,
            sort_key,
            sort_direction,
            visible: Vec::new(),
            generation: 0,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Full collection in canonical (fetch) order; empty unless loaded.
    pub fn all_records(&self) -> &[SharedRecord] {
        match &self.load_state {
            LoadState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn visible_records(&self) -> &[SharedRecord] {
        &self.visible
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Enter the loading state and issue a ticket for the pending read.
    ///
    /// Issuing a new ticket invalidates every earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.visible.clear();
        LoadTicket(self.generation)
    }

    /// Complete the load identified by `ticket`.
    ///
    /// Returns `false` (state untouched) when a newer load has been started
    /// since the ticket was issued.
    pub fn finish_load<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<CampaignRecord>, E>,
    ) -> bool
    where
        E: fmt::Display,
    {
        if ticket.0 != self.generation {
            tracing::warn!(
                ticket = ticket.0,
                current = self.generation,
                "discarding result of superseded load"
            );
            return false;
        }

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "campaigns loaded");
                self.load_state = LoadState::Loaded(records.into_iter().map(Arc::new).collect());
                self.recompute();
            }
            Err(err) => {
                tracing::warn!(error = %err, "campaign load failed");
                self.load_state = LoadState::Failed(err.to_string());
                self.visible.clear();
            }
        }
        true
    }

    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.status_filter = status_filter;
        self.recompute();
    }

    /// Advance the filter through All -> Active -> Paused -> All.
    pub fn cycle_status_filter(&mut self) -> StatusFilter {
        self.set_status_filter(self.status_filter.next());
        self.status_filter
    }

    /// Select a sort column.
    ///
    /// Selecting the current key again flips the direction; a different key
    /// starts ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        if key == self.sort_key {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
        self.recompute();
    }

    /// Totals over the full collection (summary cards).
    pub fn summary(&self) -> AggregateResult {
        aggregate(self.all_records())
    }

    /// Insights over the full collection, regardless of the active filter.
    pub fn insights(&self) -> InsightsReport {
        build_insights(self.all_records())
    }

    fn recompute(&mut self) {
        self.visible = match &self.load_state {
            LoadState::Loaded(records) => compute_visible(
                records,
                self.status_filter,
                self.sort_key,
                self.sort_direction,
            ),
            _ => Vec::new(),
        };
        tracing::debug!(
            filter = %self.status_filter,
            key = %self.sort_key,
            direction = %self.sort_direction,
            visible = self.visible.len(),
            "recomputed visible campaigns"
        );
    }
}
