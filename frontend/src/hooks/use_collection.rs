use std::future::Future;
use std::rc::Rc;

use shared::Keyed;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiError;
use crate::services::logging::Logger;

/// Lifecycle of one remote read: every list screen renders exactly these
/// three states, and an empty ready list is not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Pending,
    Failed(String),
    Ready,
}

/// Replace the entry whose key matches the server-returned entity. A miss
/// leaves the collection untouched.
pub fn replace_by_key<T: Keyed + Clone>(items: &[T], entity: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.key() == entity.key() {
                entity.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the entry with the given key, keeping everything else in order.
pub fn remove_by_key<T: Keyed + Clone>(items: &[T], key: i64) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.key() != key)
        .cloned()
        .collect()
}

/// The view collection of one screen: a remotely fetched list plus the
/// reconciliation entry points mutations need. Fetched wholesale on load,
/// patched in place on confirmed mutations, never assumed consistent with
/// the server between loads.
pub struct UseCollectionHandle<T: Keyed + Clone + 'static> {
    items: UseStateHandle<Vec<T>>,
    status: UseStateHandle<FetchStatus>,
    load: Callback<()>,
}

impl<T: Keyed + Clone + 'static> UseCollectionHandle<T> {
    pub fn items(&self) -> Vec<T> {
        (*self.items).clone()
    }

    pub fn status(&self) -> FetchStatus {
        (*self.status).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Refetch and replace the whole collection.
    pub fn load(&self) {
        self.load.emit(());
    }

    /// Append a server-created entity (with its server-assigned id).
    pub fn insert(&self, entity: T) {
        let mut items = (*self.items).clone();
        items.push(entity);
        self.items.set(items);
    }

    /// Swap in the server-returned replacement for an updated entity.
    pub fn replace(&self, entity: T) {
        self.items.set(replace_by_key(&self.items, entity));
    }

    /// Remove a deleted entity by key.
    pub fn remove(&self, key: i64) {
        self.items.set(remove_by_key(&self.items, key));
    }

    /// Replace the collection wholesale with an externally fetched result,
    /// e.g. a search issued by a sibling component.
    pub fn set_all(&self, items: Vec<T>) {
        self.items.set(items);
        self.status.set(FetchStatus::Ready);
    }

    pub fn set_failed(&self, message: String) {
        self.status.set(FetchStatus::Failed(message));
    }
}

impl<T: Keyed + Clone + 'static> Clone for UseCollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: self.status.clone(),
            load: self.load.clone(),
        }
    }
}

/// Generic remote-collection controller. `fetch` produces the full list;
/// `load` drives it through `Pending` to `Ready` or `Failed`, and
/// `on_unauthorized` fires (in addition to the failed status) when the
/// backend rejects the credential, so the caller can apply the session
/// expiry policy.
#[hook]
pub fn use_collection<T, F, Fut>(fetch: F, on_unauthorized: Callback<()>) -> UseCollectionHandle<T>
where
    T: Keyed + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let items = use_state(Vec::<T>::new);
    let status = use_state(|| FetchStatus::Pending);
    let fetch = Rc::new(fetch);

    let load = {
        let items = items.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let items = items.clone();
            let status = status.clone();
            let fetch = fetch.clone();
            let on_unauthorized = on_unauthorized.clone();

            spawn_local(async move {
                status.set(FetchStatus::Pending);
                match fetch().await {
                    Ok(data) => {
                        items.set(data);
                        status.set(FetchStatus::Ready);
                    }
                    Err(e) => {
                        Logger::error("collection", &format!("fetch failed: {}", e));
                        if e.is_unauthorized() {
                            on_unauthorized.emit(());
                        }
                        status.set(FetchStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    UseCollectionHandle {
        items,
        status,
        load,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
    }

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, label: "a" },
            Row { id: 2, label: "b" },
            Row { id: 3, label: "c" },
        ]
    }

    #[test]
    fn replace_swaps_exactly_the_matching_key() {
        let replaced = replace_by_key(&rows(), Row { id: 2, label: "B" });
        assert_eq!(replaced.len(), 3);
        assert_eq!(replaced[1], Row { id: 2, label: "B" });
        assert_eq!(replaced[0].label, "a");
        assert_eq!(replaced[2].label, "c");
    }

    #[test]
    fn replace_with_unknown_key_changes_nothing() {
        let replaced = replace_by_key(&rows(), Row { id: 99, label: "x" });
        assert_eq!(replaced, rows());
    }

    #[test]
    fn remove_drops_exactly_the_matching_key() {
        let remaining = remove_by_key(&rows(), 1);
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|row| row.id != 1));
    }

    #[test]
    fn remove_with_unknown_key_changes_nothing() {
        assert_eq!(remove_by_key(&rows(), 42), rows());
    }

    #[test]
    fn remove_preserves_order() {
        let remaining = remove_by_key(&rows(), 2);
        let ids: Vec<i64> = remaining.iter().map(Keyed::key).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
