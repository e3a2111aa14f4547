//! Selection mode, value comparison and the selection set.

use std::fmt;
use std::sync::Arc;

/// Selection mode of a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one value is selected; committing replaces it.
    #[default]
    Single,
    /// Any number of values; committing toggles membership.
    Multi,
}

/// Equality used to match values against each other.
///
/// Cloning is cheap. The default compares with `PartialEq`.
pub struct ValueComparer<T> {
    eq: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
}

impl<T> ValueComparer<T> {
    pub fn new(eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Self { eq: Arc::new(eq) }
    }

    pub fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }
}

impl<T: PartialEq + 'static> Default for ValueComparer<T> {
    fn default() -> Self {
        Self::new(|a: &T, b: &T| a == b)
    }
}

impl<T> Clone for ValueComparer<T> {
    fn clone(&self) -> Self {
        Self {
            eq: Arc::clone(&self.eq),
        }
    }
}

impl<T> fmt::Debug for ValueComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueComparer")
    }
}

/// Set of selected values under a [`ValueComparer`].
///
/// Keeps insertion order; the canonical display order is decided by the
/// registry, not by this set.
#[derive(Debug, Clone)]
pub struct SelectionSet<T> {
    values: Vec<T>,
    comparer: ValueComparer<T>,
}

impl<T: Clone> SelectionSet<T> {
    pub fn new(comparer: ValueComparer<T>) -> Self {
        Self {
            values: Vec::new(),
            comparer,
        }
    }

    pub fn comparer(&self) -> &ValueComparer<T> {
        &self.comparer
    }

    /// Swap the comparer, collapsing values that became equal.
    pub fn set_comparer(&mut self, comparer: ValueComparer<T>) {
        let values = std::mem::take(&mut self.values);
        self.comparer = comparer;
        for value in values {
            self.insert(value);
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.iter().any(|v| self.comparer.equals(v, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Selected values in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Insert a value. Returns true if it was not present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Remove a value. Returns true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.values.len();
        let comparer = self.comparer.clone();
        self.values.retain(|v| !comparer.equals(v, value));
        self.values.len() != before
    }

    /// Toggle membership. Returns true if the value is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.values.push(value);
            true
        }
    }

    /// Make `value` the only selected value. Returns true if the set changed.
    pub fn replace_with(&mut self, value: T) -> bool {
        if self.values.len() == 1 && self.contains(&value) {
            return false;
        }
        self.values.clear();
        self.values.push(value);
        true
    }

    /// Empty the set. Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    /// Whether this set holds exactly the given values (order ignored).
    pub fn set_equals(&self, values: &[T]) -> bool {
        let mut other = SelectionSet::new(self.comparer.clone());
        for value in values {
            other.insert(value.clone());
        }
        other.len() == self.len() && other.values.iter().all(|v| self.contains(v))
    }

    /// Replace the whole set. Duplicates collapse. Returns true if the set changed.
    pub fn assign(&mut self, values: impl IntoIterator<Item = T>) -> bool {
        let mut next = SelectionSet::new(self.comparer.clone());
        for value in values {
            next.insert(value);
        }
        if self.set_equals(&next.values) {
            return false;
        }
        self.values = next.values;
        true
    }

    /// Keep only the first value. Returns true if anything was dropped.
    pub fn truncate_to_single(&mut self) -> bool {
        let changed = self.values.len() > 1;
        self.values.truncate(1);
        changed
    }
}
