//! Ordered registry of the items rendered by the select.

use crate::item::{ItemId, SelectItem};
use crate::selection::ValueComparer;

/// Result of registering an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// Whether the item was appended (false for a duplicate value).
    pub added: bool,
    /// Whether the item holds the select's current value in single mode.
    pub is_current: bool,
}

/// Items in render order, unique by value.
#[derive(Debug, Clone)]
pub struct ItemRegistry<T> {
    items: Vec<SelectItem<T>>,
    comparer: ValueComparer<T>,
}

impl<T: Clone> ItemRegistry<T> {
    pub fn new(comparer: ValueComparer<T>) -> Self {
        Self {
            items: Vec::new(),
            comparer,
        }
    }

    /// Swap the comparer, dropping later items whose value now collides.
    pub fn set_comparer(&mut self, comparer: ValueComparer<T>) {
        let items = std::mem::take(&mut self.items);
        self.comparer = comparer;
        for item in items {
            self.add(item);
        }
    }

    /// Append an item unless an item with an equal value exists.
    pub fn add(&mut self, item: SelectItem<T>) -> bool {
        if self.contains_value(item.value()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given identity.
    pub fn remove(&mut self, id: ItemId) -> Option<SelectItem<T>> {
        let index = self.index_of(id)?;
        Some(self.items.remove(index))
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn item_at(&self, index: usize) -> Option<&SelectItem<T>> {
        self.items.get(index)
    }

    pub fn get(&self, id: ItemId) -> Option<&SelectItem<T>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up the item holding a value.
    pub fn find_value(&self, value: &T) -> Option<&SelectItem<T>> {
        self.items
            .iter()
            .find(|item| self.comparer.equals(item.value(), value))
    }

    pub fn contains_value(&self, value: &T) -> bool {
        self.find_value(value).is_some()
    }

    /// Change the disabled flag of an item. Returns true if it changed.
    pub fn set_disabled(&mut self, id: ItemId, disabled: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) if item.is_disabled() != disabled => {
                item.set_disabled(disabled);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SelectItem<T>] {
        &self.items
    }

    /// Items that can be highlighted or selected.
    pub fn enabled(&self) -> impl Iterator<Item = &SelectItem<T>> {
        self.items.iter().filter(|item| !item.is_disabled())
    }
}
