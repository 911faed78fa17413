//! Ordered in-memory collection of one entity kind.

use crate::domain::{Entity, EntityId};

/// Entities of one kind in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub const fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a new entity under a freshly generated id.
    pub fn create(&mut self, new: T::New) -> T::Id {
        let id = T::Id::generate();
        self.items.push(T::create(id.clone(), new));
        id
    }

    /// Merge `update` onto the entity with `id`.
    ///
    /// Returns `false` (and changes nothing) when no entity has that id.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the entity with `id`. Returns `false` when absent.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
