// src/listing.rs
//! Listing view state.
//!
//! Every fetch is stamped with a generation. Only the newest generation may
//! write results, so a late answer for a superseded intent is dropped instead
//! of clobbering the current one. New data and the page reset land together.

use std::sync::{Arc, Mutex};

use metrics::counter;
use tokio::task::JoinHandle;

use crate::gateway::{FetchError, RecipeGateway};
use crate::intent::QueryIntent;
use crate::model::RecipeSummary;
use crate::pagination::{clamp_page, paginate, total_pages, Page, PAGE_SIZE};

/// Proof that a fetch was started for a given generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    intent: QueryIntent,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn intent(&self) -> &QueryIntent {
        &self.intent
    }
}

#[derive(Debug, Clone)]
pub struct ListingState {
    intent: QueryIntent,
    generation: u64,
    recipes: Vec<RecipeSummary>,
    error: Option<FetchError>,
    loading: bool,
    page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            intent: QueryIntent::All,
            generation: 0,
            recipes: Vec::new(),
            error: None,
            loading: false,
            page: 1,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `intent`. Any ticket handed out earlier becomes stale.
    pub fn begin(&mut self, intent: QueryIntent) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.intent = intent.clone();
        FetchTicket {
            generation: self.generation,
            intent,
        }
    }

    /// Commit a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<RecipeSummary>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            counter!("listing_stale_discarded_total").increment(1);
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale listing result"
            );
            return false;
        }
        match result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(e) => {
                self.recipes.clear();
                self.error = Some(e);
            }
        }
        self.page = 1;
        self.loading = false;
        true
    }

    /// Clear the loading flag if `generation` is still current.
    pub fn finish(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, total_pages(self.recipes.len(), PAGE_SIZE));
    }

    pub fn current_page(&self) -> Page<'_, RecipeSummary> {
        paginate(&self.recipes, self.page)
    }

    pub fn intent(&self) -> &QueryIntent {
        &self.intent
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

/// Clears `loading` when dropped, whether the fetch finished, failed or was
/// aborted.
pub struct LoadingGuard {
    state: Arc<Mutex<ListingState>>,
    generation: u64,
}

impl LoadingGuard {
    pub fn new(state: Arc<Mutex<ListingState>>, generation: u64) -> Self {
        Self { state, generation }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // never panic in drop; a poisoned lock still holds usable state
        let mut s = match self.state.lock() {
            Ok(g) => g,
            Err(poison) => poison.into_inner(),
        };
        s.finish(self.generation);
    }
}

/// Long-lived listing view that follows navigation. Each `navigate` aborts
/// the fetch still running for the previous intent.
pub struct ListingController {
    gateway: RecipeGateway,
    state: Arc<Mutex<ListingState>>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl ListingController {
    pub fn new(gateway: RecipeGateway) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(ListingState::new())),
            inflight: Mutex::new(None),
        }
    }

    /// Switch to `intent`: bump the generation, cancel the superseded fetch,
    /// start a new one.
    ///
    /// `inflight` is held across begin, spawn and swap so handle order always
    /// follows generation order.
    pub fn navigate(&self, intent: QueryIntent) -> FetchTicket {
        let mut inflight = self
            .inflight
            .lock()
            .expect("listing inflight mutex poisoned");

        let ticket = self
            .state
            .lock()
            .expect("listing state mutex poisoned")
            .begin(intent);

        // built before spawn: an abort ahead of the first poll still drops it
        let guard = LoadingGuard::new(Arc::clone(&self.state), ticket.generation);
        let gateway = self.gateway.clone();
        let state = Arc::clone(&self.state);
        let task_ticket = ticket.clone();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            let result = gateway.fetch_recipes(&task_ticket.intent).await;
            state
                .lock()
                .expect("listing state mutex poisoned")
                .complete(&task_ticket, result);
        });

        if let Some(prev) = inflight.replace(handle) {
            prev.abort();
        }
        ticket
    }

    /// Wait for the current fetch (if any) to finish or be cancelled.
    pub async fn settle(&self) {
        let handle = self
            .inflight
            .lock()
            .expect("listing inflight mutex poisoned")
            .take();
        if let Some(h) = handle {
            if let Err(e) = h.await {
                if !e.is_cancelled() {
                    tracing::warn!(error = ?e, "listing fetch task failed");
                }
            }
        }
    }

    pub fn set_page(&self, page: usize) {
        self.state
            .lock()
            .expect("listing state mutex poisoned")
            .set_page(page);
    }

    pub fn snapshot(&self) -> ListingState {
        self.state
            .lock()
            .expect("listing state mutex poisoned")
            .clone()
    }
}
