//! Committing values to the selection.

use crate::events::SelectEvent;
use crate::select_all::{SelectAllState, enabled_values};
use crate::selection::{SelectionMode, ValueComparer};

use super::Select;

impl<T: Clone + Send + Sync + 'static> Select<T> {
    /// Commit a value chosen by the user.
    ///
    /// Single selection closes the menu and replaces the selection; choosing
    /// the current value again changes nothing. Multi selection toggles the
    /// value and keeps the menu open. Either way the item holding the value is
    /// highlighted once the next render has completed.
    pub async fn select_value(&self, value: T) {
        if self.is_locked() {
            log::debug!("Select {}: select_value refused (locked)", self.id());
            return;
        }

        if self.mode() == SelectionMode::Single {
            self.close_menu(false).await;
            if !self.commit_single(value.clone()) {
                self.request_render();
                return;
            }
        } else {
            self.toggle_multi(value.clone());
        }

        self.highlight_value(value).await;
    }

    /// Commit the value of the item at `index`.
    ///
    /// An index outside the registry closes the menu in single mode and is
    /// ignored in multi mode.
    pub async fn select_index(&self, index: usize) {
        if self.is_locked() {
            return;
        }
        match self.item_at(index) {
            Some(item) => self.select_value(item.value().clone()).await,
            None => {
                log::trace!("Select {}: select_index {} out of range", self.id(), index);
                if self.mode() == SelectionMode::Single {
                    self.close_menu(true).await;
                }
            }
        }
    }

    /// Make `value` the only selected value. Returns false if it already was.
    pub(super) fn commit_single(&self, value: T) -> bool {
        let mut events = Vec::new();
        let changed = self.write(|inner| {
            let unchanged = inner
                .value
                .as_ref()
                .is_some_and(|current| inner.values_equal(current, &value))
                && inner.selection.len() == 1;
            if unchanged {
                return false;
            }
            inner.selection.replace_with(value.clone());
            inner.set_value(Some(value.clone()), &mut events);
            inner.refresh_text(&mut events);
            events.push(SelectEvent::SelectionChanged(vec![value]));
            true
        });
        if changed {
            log::debug!("Select {}: committed single value", self.id());
        }
        self.emit_all(events);
        changed
    }

    fn toggle_multi(&self, value: T) {
        let mut events = Vec::new();
        self.write(|inner| {
            let selected = inner.selection.toggle(value);
            log::debug!(
                "Select {}: multi toggle, selected={} count={}",
                self.id(),
                selected,
                inner.selection.len()
            );
            inner.refresh_text(&mut events);
            inner.refresh_select_all();
            events.push(SelectEvent::SelectionChanged(inner.ordered_selection()));
        });
        self.emit_all(events);
    }

    /// Highlight the item holding `value` after the next render.
    pub(super) async fn highlight_value(&self, value: T) {
        self.wait_for_next_render().await;
        let id = self.read(|inner| inner.registry.find_value(&value).map(|item| item.id()));
        self.write(|inner| inner.highlighted = id);
        self.request_render();
    }

    /// Clear the selection, the value and the text.
    pub fn clear(&self) {
        if self.is_locked() {
            log::debug!("Select {}: clear refused (locked)", self.id());
            return;
        }
        self.clear_selection();
    }

    fn clear_selection(&self) {
        let mut events = Vec::new();
        self.write(|inner| {
            let changed = inner.selection.clear();
            inner.set_value(None, &mut events);
            if inner.text.is_some() {
                inner.text = None;
                events.push(SelectEvent::TextChanged(None));
            }
            inner.refresh_select_all();
            if changed {
                events.push(SelectEvent::SelectionChanged(Vec::new()));
            }
        });
        self.emit_all(events);
        self.request_render();
    }

    /// Handle a click on the clear button.
    pub fn clear_button_click(&self) {
        if self.is_locked() {
            return;
        }
        self.clear_selection();
        self.emit(SelectEvent::ClearButtonClicked);
    }

    // -------------------------------------------------------------------------
    // Select all
    // -------------------------------------------------------------------------

    /// Toggle between "everything enabled selected" and "nothing selected".
    ///
    /// A partial selection counts as nothing selected, so the click selects all.
    /// Only meaningful in multi-selection mode.
    pub fn toggle_select_all(&self) {
        if self.is_locked() || self.mode() != SelectionMode::Multi {
            return;
        }
        let state = self.read(|inner| SelectAllState::compute(&inner.registry, &inner.selection));
        if state.toggle_selects_all() {
            self.select_all_items();
        } else {
            self.clear_selection();
        }
    }

    /// Select exactly the enabled items.
    pub fn select_all_items(&self) {
        if self.is_locked() || self.mode() != SelectionMode::Multi {
            return;
        }
        let mut events = Vec::new();
        self.write(|inner| {
            let values = enabled_values(&inner.registry);
            let changed = inner.selection.assign(values);
            inner.refresh_text(&mut events);
            inner.refresh_select_all();
            if changed {
                events.push(SelectEvent::SelectionChanged(inner.ordered_selection()));
            }
        });
        self.emit_all(events);
        self.request_render();
    }

    // -------------------------------------------------------------------------
    // Bindings from the owner
    // -------------------------------------------------------------------------

    /// Replace the selection from outside (two-way binding).
    ///
    /// Ignored when the given values equal the current selection. In single
    /// mode only the first value is kept and becomes the current value.
    pub fn set_selected_values(&self, values: impl IntoIterator<Item = T>) {
        let mut values: Vec<T> = values.into_iter().collect();
        let mut events = Vec::new();
        self.write(|inner| {
            if !inner.is_multi() {
                values.truncate(1);
            }
            if !inner.selection.assign(values) {
                return;
            }
            if !inner.is_multi() {
                let first = inner.selection.first().cloned();
                inner.set_value(first, &mut events);
            }
            inner.refresh_text(&mut events);
            inner.refresh_select_all();
            events.push(SelectEvent::SelectionChanged(inner.ordered_selection()));
        });
        self.emit_all(events);
    }

    /// Set the current value from outside (two-way binding).
    ///
    /// In single mode the selection follows the value. In multi mode the value
    /// is independent of the selection.
    pub fn set_value(&self, value: Option<T>) {
        let mut events = Vec::new();
        self.write(|inner| {
            inner.set_value(value.clone(), &mut events);
            if inner.is_multi() {
                return;
            }
            if inner.selection.assign(value) {
                events.push(SelectEvent::SelectionChanged(inner.ordered_selection()));
            }
            inner.refresh_text(&mut events);
        });
        self.emit_all(events);
    }

    /// Change the value comparer, re-deduplicating items and selection.
    pub fn set_comparer(&self, eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static) {
        let comparer = ValueComparer::new(eq);
        let mut events = Vec::new();
        self.write(|inner| {
            inner.config.comparer = comparer.clone();
            inner.registry.set_comparer(comparer.clone());
            if inner
                .highlighted
                .is_some_and(|id| inner.registry.index_of(id).is_none())
            {
                inner.highlighted = None;
            }
            inner.selection.set_comparer(comparer);
            inner.refresh_text(&mut events);
            inner.refresh_select_all();
        });
        self.emit_all(events);
    }

    /// Switch between single and multi selection.
    ///
    /// Switching to single keeps only the first selected value.
    pub fn set_multi_selection(&self, multi: bool) {
        let mode = if multi {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        };
        let mut events = Vec::new();
        self.write(|inner| {
            if inner.config.mode == mode {
                return;
            }
            inner.config.mode = mode;
            if !multi {
                let truncated = inner.selection.truncate_to_single();
                let first = inner.selection.first().cloned();
                inner.set_value(first, &mut events);
                if truncated {
                    events.push(SelectEvent::SelectionChanged(inner.ordered_selection()));
                }
            }
            inner.refresh_text(&mut events);
            inner.refresh_select_all();
        });
        self.emit_all(events);
    }
}
