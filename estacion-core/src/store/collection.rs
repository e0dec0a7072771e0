//! Id-keyed record collections.

use serde::{Deserialize, Serialize};

/// A record with a store-assigned integer id.
pub trait Record {
    /// Human-readable record kind, used in messages.
    const KIND: &'static str;

    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

/// A partial update that can be merged over a record.
pub trait Patch<T> {
    fn apply(self, record: &mut T);
}

/// Records ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Collection { records }
    }

    /// `max(existing ids, 0) + 1`. Ids of deleted records can come back.
    pub fn next_id(&self) -> u32 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Assign the next id and insert at the head. Returns the id.
    pub fn add(&mut self, mut record: T) -> u32 {
        let id = self.next_id();
        record.set_id(id);
        self.records.insert(0, record);
        id
    }

    /// Merge `patch` over the record with `id`. Returns false when there is none.
    pub fn update<P: Patch<T>>(&mut self, id: u32, patch: P) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                patch.apply(record);
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false when there is none.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.records.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
