//! Selectable items.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Identity of one rendered item slot.
///
/// Allocated once per item slot and kept across renders, so it survives value
/// and label changes of the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Allocate a fresh, process-unique identity.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_item_{}", self.0)
    }
}

/// One selectable entry of a select list.
///
/// # Example
///
/// ```
/// use picklist::SelectItem;
///
/// let item = SelectItem::new("de").label("Germany");
/// assert_eq!(item.value(), &"de");
/// assert!(!item.is_disabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem<T> {
    id: ItemId,
    value: T,
    disabled: bool,
    label: Option<String>,
}

impl<T> SelectItem<T> {
    /// Create an enabled item with a fresh identity.
    pub fn new(value: T) -> Self {
        Self {
            id: ItemId::new(),
            value,
            disabled: false,
            label: None,
        }
    }

    /// Mark the item as disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the text rendered for this item in the list.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The explicit label, if one was given.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
