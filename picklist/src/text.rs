//! Display text derivation.

use std::fmt;
use std::sync::Arc;

use crate::registry::ItemRegistry;
use crate::selection::SelectionSet;

/// Converts a value to the text shown for it.
pub type Converter<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Builds the multi-selection text from the converted selected values.
pub type TextAggregator = Arc<dyn Fn(&[Option<String>]) -> String + Send + Sync>;

/// Rules for turning a selection into display text.
pub struct TextFormat<T> {
    pub converter: Converter<T>,
    pub aggregator: Option<TextAggregator>,
    pub delimiter: String,
}

impl<T> TextFormat<T> {
    pub fn convert(&self, value: &T) -> Option<String> {
        (self.converter)(value)
    }

    /// Text for a single-selection value.
    pub fn single(&self, value: Option<&T>) -> Option<String> {
        value.and_then(|v| self.convert(v))
    }

    /// Text for a multi-selection, given values already in display order.
    ///
    /// The aggregator, when present, is always used verbatim, even for an
    /// empty selection. Without one, an empty selection has no text.
    pub fn multi(&self, ordered: &[T]) -> Option<String> {
        let converted: Vec<Option<String>> = ordered.iter().map(|v| self.convert(v)).collect();
        if let Some(aggregate) = &self.aggregator {
            return Some(aggregate(&converted));
        }
        if converted.is_empty() {
            return None;
        }
        let parts: Vec<&str> = converted
            .iter()
            .map(|text| text.as_deref().unwrap_or_default())
            .collect();
        Some(parts.join(&self.delimiter))
    }

    /// Whether `value`'s text starts with `prefix`, ignoring case.
    pub fn starts_with_ignore_case(&self, value: &T, prefix: char) -> bool {
        let Some(text) = self.convert(value) else {
            return false;
        };
        let prefix: String = prefix.to_lowercase().collect();
        text.to_lowercase().starts_with(&prefix)
    }
}

impl<T> Clone for TextFormat<T> {
    fn clone(&self) -> Self {
        Self {
            converter: Arc::clone(&self.converter),
            aggregator: self.aggregator.clone(),
            delimiter: self.delimiter.clone(),
        }
    }
}

impl<T> fmt::Debug for TextFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFormat")
            .field("aggregator", &self.aggregator.is_some())
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}

/// Selected values in registry order, followed by selected values that no
/// rendered item holds (in the order they were selected).
pub fn display_order<T: Clone>(registry: &ItemRegistry<T>, selection: &SelectionSet<T>) -> Vec<T> {
    let mut ordered: Vec<T> = registry
        .items()
        .iter()
        .filter(|item| selection.contains(item.value()))
        .map(|item| item.value().clone())
        .collect();
    ordered.extend(
        selection
            .values()
            .iter()
            .filter(|value| !registry.contains_value(value))
            .cloned(),
    );
    ordered
}
