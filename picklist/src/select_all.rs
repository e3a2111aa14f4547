//! Tri-state "select all" aggregate.

use crate::registry::ItemRegistry;
use crate::selection::SelectionSet;

/// Coverage of the selection over the enabled items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectAllState {
    /// Nothing is selected.
    #[default]
    None,
    /// Every enabled item is selected.
    All,
    /// Something is selected, but not every enabled item.
    Partial,
}

impl SelectAllState {
    /// Derive the aggregate.
    ///
    /// Disabled items are left out of the comparison on both sides: a selected
    /// item that later becomes disabled stays selected, and the remaining
    /// enabled items alone decide between `All` and `Partial`.
    pub fn compute<T: Clone>(registry: &ItemRegistry<T>, selection: &SelectionSet<T>) -> Self {
        if selection.is_empty() {
            return Self::None;
        }
        let mut enabled = registry.enabled().peekable();
        if enabled.peek().is_none() {
            return Self::Partial;
        }
        if enabled.all(|item| selection.contains(item.value())) {
            Self::All
        } else {
            Self::Partial
        }
    }

    /// Whether the next click selects everything (true) or clears (false).
    ///
    /// A partial selection behaves like an empty one.
    pub fn toggle_selects_all(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// The checkbox value a tri-state checkbox would show.
    pub fn checked(&self) -> Option<bool> {
        match self {
            Self::All => Some(true),
            Self::None => Some(false),
            Self::Partial => None,
        }
    }
}

/// Values of every enabled item, in registry order.
pub fn enabled_values<T: Clone>(registry: &ItemRegistry<T>) -> Vec<T> {
    registry
        .enabled()
        .map(|item| item.value().clone())
        .collect()
}
