//! # Record Mutation Pipeline
//!
//! [`Collection`] is the sole authorized path for create/update/delete on a
//! record list. It owns the in-memory list, and that same list is what the
//! view-model reads — there is no second cached copy to go stale.
//!
//! Every successful mutation re-persists the entire list synchronously: no
//! partial writes, no transactions, last writer wins.

use crate::error::{Result, ShopdeskError};
use crate::model::Record;
use crate::store::{StorageBackend, StoreAdapter};

pub struct Collection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Hydrate from the store; absent or malformed stored data falls back to
    /// the seed list.
    pub fn load<S: StorageBackend>(store: &StoreAdapter<S>) -> Self {
        let records = store.load::<Vec<R>>(R::STORE_KEY).unwrap_or_else(R::seed);
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Validate, assign `max(existing ids) + 1`, append, persist.
    pub fn create<S: StorageBackend>(
        &mut self,
        store: &mut StoreAdapter<S>,
        mut draft: R,
    ) -> Result<&R> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(ShopdeskError::validation(errors));
        }

        draft.set_id(self.next_id());
        self.records.push(draft);
        self.persist(store)?;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Replace the record with the same id in place, preserving list order.
    ///
    /// Fails with `NotFound` for an unknown id and with `Validation` (every
    /// violated field listed) for a bad record; the list is untouched on any
    /// failure.
    pub fn update<S: StorageBackend>(
        &mut self,
        store: &mut StoreAdapter<S>,
        updated: R,
    ) -> Result<&R> {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == updated.id())
            .ok_or_else(|| ShopdeskError::not_found(R::ENTITY, updated.id()))?;

        let errors = updated.validate();
        if !errors.is_empty() {
            return Err(ShopdeskError::validation(errors));
        }

        self.records[position] = updated;
        self.persist(store)?;
        Ok(&self.records[position])
    }

    /// Remove by id and persist. Returns the removed record so the caller can
    /// reconcile any selection state holding its id.
    pub fn delete<S: StorageBackend>(
        &mut self,
        store: &mut StoreAdapter<S>,
        id: u64,
    ) -> Result<R> {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| ShopdeskError::not_found(R::ENTITY, id))?;

        let removed = self.records.remove(position);
        self.persist(store)?;
        Ok(removed)
    }

    fn persist<S: StorageBackend>(&self, store: &mut StoreAdapter<S>) -> Result<()> {
        store.save(R::STORE_KEY, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use crate::store::memory::MemoryBackend;

    fn store() -> StoreAdapter<MemoryBackend> {
        StoreAdapter::new(MemoryBackend::new())
    }

    fn draft(name: &str) -> Customer {
        Customer::new(0, name, "x@y.example", "555-0000", "Somewhere", 10.0, 1)
    }

    #[test]
    fn load_falls_back_to_seed_when_store_is_empty() {
        let store = store();
        let customers: Collection<Customer> = Collection::load(&store);
        assert_eq!(customers.records(), crate::seed::customers().as_slice());
    }

    #[test]
    fn create_assigns_next_id_after_the_maximum() {
        let mut store = store();
        store
            .save("customers", &vec![draft("A").with_id(1), draft("B").with_id(3)])
            .unwrap();

        let mut customers: Collection<Customer> = Collection::load(&store);
        let created = customers.create(&mut store, draft("X")).unwrap();
        assert_eq!(created.id, 4);
    }

    #[test]
    fn create_on_empty_list_starts_at_one() {
        let mut store = store();
        store.save("customers", &Vec::<Customer>::new()).unwrap();

        let mut customers: Collection<Customer> = Collection::load(&store);
        let created = customers.create(&mut store, draft("First")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn create_persists_the_whole_list() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let before = customers.len();
        customers.create(&mut store, draft("New")).unwrap();

        let reloaded: Collection<Customer> = Collection::load(&store);
        assert_eq!(reloaded.len(), before + 1);
        assert_eq!(reloaded.records().last().unwrap().name, "New");
    }

    #[test]
    fn create_rejects_invalid_drafts() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let before = customers.records().to_vec();

        let mut bad = draft("");
        bad.purchases = -1.0;
        let err = customers.create(&mut store, bad).unwrap_err();
        match err {
            ShopdeskError::Validation { errors } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(customers.records(), before.as_slice());
    }

    #[test]
    fn update_replaces_in_place_preserving_order() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let ids_before: Vec<u64> = customers.records().iter().map(|c| c.id).collect();

        let mut edited = customers.get(3).unwrap().clone();
        edited.name = "Renamed".to_string();
        customers.update(&mut store, edited).unwrap();

        let ids_after: Vec<u64> = customers.records().iter().map(|c| c.id).collect();
        assert_eq!(ids_before, ids_after);
        assert_eq!(customers.get(3).unwrap().name, "Renamed");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let err = customers.update(&mut store, draft("Ghost").with_id(9999)).unwrap_err();
        assert!(matches!(err, ShopdeskError::NotFound { id: 9999, .. }));
    }

    #[test]
    fn update_with_negative_purchases_names_the_field_and_changes_nothing() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let before = customers.records().to_vec();

        let mut edited = customers.get(1).unwrap().clone();
        edited.purchases = -5.0;
        let err = customers.update(&mut store, edited).unwrap_err();
        match err {
            ShopdeskError::Validation { errors } => {
                assert!(errors.iter().any(|e| e.contains("purchases")));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(customers.records(), before.as_slice());
    }

    #[test]
    fn delete_returns_the_removed_record() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let removed = customers.delete(&mut store, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert!(customers.get(2).is_none());
    }

    #[test]
    fn create_then_delete_restores_the_original_list() {
        let mut store = store();
        let mut customers: Collection<Customer> = Collection::load(&store);
        let before = customers.records().to_vec();

        let created_id = customers.create(&mut store, draft("Temp")).unwrap().id;
        customers.delete(&mut store, created_id).unwrap();

        assert_eq!(customers.records(), before.as_slice());

        let reloaded: Collection<Customer> = Collection::load(&store);
        assert_eq!(reloaded.records(), before.as_slice());
    }

    impl Customer {
        fn with_id(mut self, id: u64) -> Self {
            self.id = id;
            self
        }
    }
}
