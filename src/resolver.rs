//! Concurrent food resolution: bounded fan-out over the nutrition lookup.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::lookup::NutritionLookup;
use crate::models::FoodCandidate;
use crate::optimizer::constants::MAX_CONCURRENT_LOOKUPS;

/// Resolves unique food names to candidates, each name exactly once.
///
/// Fan-out/fan-in: one task per name, at most `max_concurrent` in flight,
/// full join before returning. A failed or empty lookup records `None` for
/// that name — one unavailable food never aborts a batch.
pub struct FoodResolver {
    lookup: Arc<dyn NutritionLookup>,
    max_concurrent: usize,
}

impl FoodResolver {
    pub fn new(lookup: Arc<dyn NutritionLookup>) -> Self {
        Self {
            lookup,
            max_concurrent: MAX_CONCURRENT_LOOKUPS,
        }
    }

    /// Override the concurrency ceiling (clamped to at least 1).
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Resolve every name in `names` to `Some(candidate)` or `None`.
    ///
    /// The returned map has exactly one entry per input name. Results are
    /// collected from task return values at the join, so there is no shared
    /// mutable map to lock.
    pub async fn resolve_all(
        &self,
        names: &HashSet<String>,
    ) -> HashMap<String, Option<FoodCandidate>> {
        debug!(count = names.len(), "resolving unique food names");

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));

        let tasks = names.iter().cloned().map(|name| {
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                // Closing the semaphore is the only acquire failure mode and
                // it never closes, so a failed permit just means no lookup.
                let Ok(_permit) = semaphore.acquire().await else {
                    return (name, None);
                };

                let candidate = match lookup.search(&name).await {
                    Ok(page) => {
                        if page.foods.is_empty() {
                            warn!(food = %name, "lookup returned no candidates");
                        }
                        page.foods.into_iter().next()
                    }
                    Err(err) => {
                        warn!(food = %name, error = %err, "lookup failed");
                        None
                    }
                };
                (name, candidate)
            })
        });

        let mut resolved = HashMap::with_capacity(names.len());
        for joined in join_all(tasks).await {
            match joined {
                Ok((name, candidate)) => {
                    resolved.insert(name, candidate);
                }
                Err(err) => warn!(error = %err, "resolver task panicked"),
            }
        }

        // A panicked task loses its name; keep the one-entry-per-name
        // guarantee by backfilling absences.
        for name in names {
            resolved.entry(name.clone()).or_insert(None);
        }

        resolved
    }
}
