//! Ordered record collection with a monotonic identifier counter.

use crate::domain::{Recipe, RecordId, User};

/// Records that expose their stored identifier.
pub(crate) trait Keyed {
    fn key(&self) -> RecordId;
}

impl Keyed for Recipe {
    fn key(&self) -> RecordId {
        self.id()
    }
}

impl Keyed for User {
    fn key(&self) -> RecordId {
        self.id()
    }
}

/// Insertion-ordered records plus the next identifier to hand out.
///
/// ## Invariants
/// - `next_id` is greater than every identifier ever stored, so removed
///   identifiers are never reissued.
#[derive(Debug)]
pub(crate) struct RecordCollection<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Keyed + Clone> RecordCollection<T> {
    /// Adopt `records` in their given order.
    pub(crate) fn new(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(Keyed::key)
            .max()
            .map_or(RecordId::new(1), RecordId::next);
        Self { records, next_id }
    }

    pub(crate) fn records(&self) -> &[T] {
        &self.records
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.key() == id)
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.key() == id)
    }

    /// Build a record under the next identifier and append it.
    pub(crate) fn push_with(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id = id.next();
        let record = build(id);
        self.records.push(record.clone());
        record
    }

    /// Remove the first record with `id`, keeping the others in order.
    pub(crate) fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|record| record.key() == id)?;
        Some(self.records.remove(index))
    }
}
