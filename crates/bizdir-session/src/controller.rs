//! Session state: one controller owns the record store and the live
//! criteria, recomputes the result view on every change, and signals the
//! rendering collaborator through a refresh channel.

use std::time::Duration;

use bizdir_core::engine;
use bizdir_core::store::RecordStore;
use bizdir_core::types::{Criteria, SortKey};
use bizdir_core::view::ResultView;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::debounce::Debouncer;

/// Signal that a new result view is ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh;

/// Rendering collaborator: receives the ordered result view after a
/// recomputation. The view borrows the controller's store, so sinks
/// render it on the spot rather than keeping it.
pub trait ResultSink {
    fn render(&mut self, view: &ResultView<'_>);
}

/// Owns the store and the single criteria instance for one UI session.
///
/// Every mutator updates the criteria and emits a [`Refresh`] on the
/// channel returned by [`SessionController::new`]; search-text changes
/// are debounced first, everything else refreshes immediately. The
/// embedding loop responds to a refresh by rendering [`results`].
///
/// [`results`]: SessionController::results
pub struct SessionController {
    store: RecordStore,
    criteria: Criteria,
    debouncer: Debouncer,
    refresh_tx: UnboundedSender<Refresh>,
}

impl SessionController {
    pub fn new(
        store: RecordStore,
        debounce_window: Duration,
    ) -> (Self, UnboundedReceiver<Refresh>) {
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel();
        let controller = Self {
            store,
            criteria: Criteria::default(),
            debouncer: Debouncer::new(debounce_window),
            refresh_tx,
        };
        (controller, refresh_rx)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Recomputes the result view for the current criteria.
    pub fn results(&self) -> ResultView<'_> {
        engine::apply(self.store.records(), &self.criteria)
    }

    /// Live search input: the criteria pick up the normalized text at
    /// once, but the refresh waits until the input stream has been quiet
    /// for the debounce window. Must be called from within a tokio
    /// runtime.
    pub fn on_search_input(&mut self, input: &str) {
        self.criteria.set_search_text(input);
        tracing::debug!(search = %self.criteria.search_text, "search input, refresh debounced");
        let tx = self.refresh_tx.clone();
        self.debouncer.schedule(move || {
            let _ = tx.send(Refresh);
        });
    }

    /// Adds the category to the multi-select, or removes it if already
    /// selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.criteria.categories.remove(category) {
            self.criteria.categories.insert(category.to_string());
        }
        self.refresh_now();
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.criteria.location = location;
        self.refresh_now();
    }

    pub fn set_size(&mut self, size: Option<String>) {
        self.criteria.size = size;
        self.refresh_now();
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.criteria.min_rating = min_rating;
        self.refresh_now();
    }

    pub fn set_premium_only(&mut self, premium_only: bool) {
        self.criteria.premium_only = premium_only;
        self.refresh_now();
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.criteria.sort_key = sort_key;
        self.refresh_now();
    }

    /// Re-applies the current criteria unchanged (the "apply filters"
    /// action).
    pub fn apply_filters(&mut self) {
        self.refresh_now();
    }

    /// Resets every criterion to its default and refreshes (the "clear
    /// filters" action).
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.refresh_now();
    }

    /// Renders the current view into `sink` and returns its count.
    pub fn render_into(&self, sink: &mut dyn ResultSink) -> usize {
        let view = self.results();
        sink.render(&view);
        view.count()
    }

    /// A pending debounced search refresh is superseded: the immediate
    /// refresh already sees the latest normalized text.
    fn refresh_now(&mut self) {
        self.debouncer.cancel();
        let _ = self.refresh_tx.send(Refresh);
    }
}
