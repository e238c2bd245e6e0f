//! Per-route search state: persisted so a page can rehydrate the header
//! search box, broadcast so an already-mounted page reacts immediately.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::{AppEvent, EventBus};
use crate::store::{keys, StorageBackend, StoreAdapter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub term: String,
    pub filters: Vec<String>,
}

/// Rehydrate the stored search state for `route`; absent keys mean an empty
/// search.
pub fn get<S: StorageBackend>(store: &StoreAdapter<S>, route: &str) -> SearchState {
    SearchState {
        term: store.load(&keys::search(route)).unwrap_or_default(),
        filters: store.load(&keys::filters(route)).unwrap_or_default(),
    }
}

/// Persist `term` and `filters` for `route` and broadcast the change. The
/// event carries the route so only the matching page reacts.
pub fn set<S: StorageBackend>(
    store: &mut StoreAdapter<S>,
    bus: &EventBus,
    route: &str,
    term: String,
    filters: Vec<String>,
) -> Result<SearchState> {
    store.save(&keys::search(route), &term)?;
    store.save(&keys::filters(route), &filters)?;

    bus.publish(&AppEvent::SearchUpdated {
        route: route.to_string(),
        term: term.clone(),
        filters: filters.clone(),
    });

    Ok(SearchState { term, filters })
}

/// Drop the stored search state for `route` (used when leaving a
/// search-enabled route) and broadcast the now-empty search.
pub fn clear<S: StorageBackend>(store: &mut StoreAdapter<S>, bus: &EventBus, route: &str) {
    store.remove(&keys::search(route));
    store.remove(&keys::filters(route));

    bus.publish(&AppEvent::SearchUpdated {
        route: route.to_string(),
        term: String::new(),
        filters: Vec::new(),
    });
}
