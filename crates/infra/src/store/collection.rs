//! Ordered, id-assigning record collection.

use school_core::Entity;

/// Records of one type in insertion order, with a sequential id counter.
///
/// Ids are never reused while the collection lives; [`Collection::clear`]
/// restarts the counter at 1.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Collection<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.next_id = 1;
    }
}

impl<R> Collection<R>
where
    R: Entity,
    R::Id: From<u64>,
{
    /// Identifier the next inserted record must carry.
    pub fn peek_id(&self) -> R::Id {
        R::Id::from(self.next_id)
    }

    /// Append a record built with [`Collection::peek_id`] and advance the counter.
    pub fn push(&mut self, record: R) {
        debug_assert_eq!(record.id(), self.peek_id());
        self.records.push(record);
        self.next_id += 1;
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: R::Id) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Removes and returns the record, keeping the order of the rest.
    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Whether any record other than `except` satisfies `pred`.
    pub fn any_other(&self, except: Option<R::Id>, pred: impl Fn(&R) -> bool) -> bool {
        self.records
            .iter()
            .filter(|r| Some(r.id()) != except)
            .any(pred)
    }
}
