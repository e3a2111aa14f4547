//! Select configuration.

use std::fmt::Display;
use std::sync::Arc;

use crate::menu::Icons;
use crate::selection::{SelectionMode, ValueComparer};
use crate::text::TextFormat;

/// Configuration of one select instance.
///
/// # Example
///
/// ```
/// use picklist::{SelectConfig, SelectionMode};
///
/// let config = SelectConfig::<String>::default()
///     .multi_selection()
///     .select_all(true)
///     .delimiter(" | ");
/// assert_eq!(config.mode, SelectionMode::Multi);
/// ```
#[derive(Debug, Clone)]
pub struct SelectConfig<T> {
    pub mode: SelectionMode,

    /// Offer a "select all" entry. Only honoured in multi-selection mode.
    pub select_all: bool,

    /// Label of the "select all" entry.
    pub select_all_text: String,

    pub text: TextFormat<T>,

    pub comparer: ValueComparer<T>,

    /// Disabled selects ignore menu transitions, selection and key input.
    pub disabled: bool,

    /// Read-only selects behave like disabled ones for interaction.
    pub read_only: bool,

    /// Hide a current value that no rendered item holds.
    pub strict: bool,

    /// Show a clear button.
    pub clearable: bool,

    pub icons: Icons,
}

impl<T: Display + PartialEq + 'static> Default for SelectConfig<T> {
    fn default() -> Self {
        Self::with_converter(|value: &T| Some(value.to_string()))
    }
}

impl<T: PartialEq + 'static> SelectConfig<T> {
    /// Config for value types without a `Display` impl.
    pub fn with_converter(converter: impl Fn(&T) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            mode: SelectionMode::Single,
            select_all: false,
            select_all_text: "Select all".into(),
            text: TextFormat {
                converter: Arc::new(converter),
                aggregator: None,
                delimiter: ", ".into(),
            },
            comparer: ValueComparer::default(),
            disabled: false,
            read_only: false,
            strict: false,
            clearable: false,
            icons: Icons::default(),
        }
    }
}

impl<T> SelectConfig<T> {
    /// Allow selecting any number of values.
    pub fn multi_selection(mut self) -> Self {
        self.mode = SelectionMode::Multi;
        self
    }

    pub fn select_all(mut self, enabled: bool) -> Self {
        self.select_all = enabled;
        self
    }

    pub fn select_all_text(mut self, text: impl Into<String>) -> Self {
        self.select_all_text = text.into();
        self
    }

    /// Separator between values of a multi-selection text.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.text.delimiter = delimiter.into();
        self
    }

    /// How values are turned into text.
    pub fn to_string_func(
        mut self,
        converter: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.text.converter = Arc::new(converter);
        self
    }

    /// Custom multi-selection text, replacing the delimiter join.
    pub fn multi_selection_text(
        mut self,
        aggregator: impl Fn(&[Option<String>]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.text.aggregator = Some(Arc::new(aggregator));
        self
    }

    pub fn comparer(mut self, eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        self.comparer = ValueComparer::new(eq);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    /// Whether the tri-state "select all" entry is active.
    pub fn select_all_active(&self) -> bool {
        self.select_all && self.mode == SelectionMode::Multi
    }

    /// Whether interaction is currently refused.
    pub fn is_locked(&self) -> bool {
        self.disabled || self.read_only
    }
}
