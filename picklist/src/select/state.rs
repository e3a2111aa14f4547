//! Select controller state, registry access and queries.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::barrier::{RenderBarrier, RenderWait};
use crate::config::SelectConfig;
use crate::events::{self, EventSink, SelectEvent, SelectEvents};
use crate::host::Collaborators;
use crate::item::{ItemId, SelectItem};
use crate::menu::MenuState;
use crate::registry::{ItemRegistry, RegisterOutcome};
use crate::select_all::SelectAllState;
use crate::selection::{SelectionMode, SelectionSet};
use crate::text::display_order;

/// Unique identifier for a Select instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Internal state for a Select.
#[derive(Debug)]
pub(super) struct SelectInner<T> {
    pub config: SelectConfig<T>,
    pub registry: ItemRegistry<T>,
    pub selection: SelectionSet<T>,
    /// Current value (always the singleton of `selection` in single mode)
    pub value: Option<T>,
    /// Display text derived from the selection
    pub text: Option<String>,
    /// Keyboard-focused item
    pub highlighted: Option<ItemId>,
    /// Cached tri-state, maintained while select-all is active
    pub select_all: SelectAllState,
    pub menu: MenuState,
    /// Whether the key-interception keymap is installed
    pub subscribed: bool,
}

impl<T: Clone> SelectInner<T> {
    fn new(config: SelectConfig<T>) -> Self {
        Self {
            registry: ItemRegistry::new(config.comparer.clone()),
            selection: SelectionSet::new(config.comparer.clone()),
            config,
            value: None,
            text: None,
            highlighted: None,
            select_all: SelectAllState::None,
            menu: MenuState::Closed,
            subscribed: false,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.config.mode == SelectionMode::Multi
    }

    pub fn values_equal(&self, a: &T, b: &T) -> bool {
        self.config.comparer.equals(a, b)
    }

    /// Selected values in display order.
    pub fn ordered_selection(&self) -> Vec<T> {
        display_order(&self.registry, &self.selection)
    }

    pub fn refresh_select_all(&mut self) {
        if self.config.select_all_active() {
            self.select_all = SelectAllState::compute(&self.registry, &self.selection);
        }
    }

    fn derive_text(&self) -> Option<String> {
        if self.is_multi() {
            self.config.text.multi(&self.ordered_selection())
        } else {
            self.config.text.single(self.value.as_ref())
        }
    }

    /// Re-derive the display text, queueing a notification if it changed.
    pub fn refresh_text(&mut self, events: &mut Vec<SelectEvent<T>>) {
        let text = self.derive_text();
        if text != self.text {
            self.text = text.clone();
            events.push(SelectEvent::TextChanged(text));
        }
    }

    /// Set the current value, queueing a notification if it changed.
    pub fn set_value(&mut self, value: Option<T>, events: &mut Vec<SelectEvent<T>>) {
        let same = match (&self.value, &value) {
            (Some(a), Some(b)) => self.values_equal(a, b),
            (None, None) => true,
            _ => false,
        };
        if !same {
            self.value = value.clone();
            events.push(SelectEvent::ValueChanged(value));
        }
    }

    /// Registry index of the highlighted item.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted.and_then(|id| self.registry.index_of(id))
    }
}

/// A select controller.
///
/// `Select<T>` is a cheap handle: clones share the same state, so the host can
/// keep one clone for rendering and registration while another runs a
/// keyboard-triggered operation that is waiting for the next render.
///
/// # Example
///
/// ```ignore
/// let (render_tx, mut render_rx) = picklist::wakeup::channel();
/// let (select, mut events) = Select::new(
///     SelectConfig::<String>::default(),
///     Collaborators::new(Arc::new(render_tx)),
/// );
///
/// // Render loop: register what was rendered, then report completion.
/// let renderer = select.clone();
/// tokio::spawn(async move {
///     while render_rx.recv().await.is_some() {
///         render_rx.drain();
///         renderer.render_complete();
///     }
/// });
///
/// select.register(SelectItem::new("apple".to_string()));
/// select.open_menu().await;
/// ```
pub struct Select<T> {
    id: SelectId,
    pub(super) inner: Arc<RwLock<SelectInner<T>>>,
    pub(super) barrier: RenderBarrier,
    pub(super) host: Collaborators,
    pub(super) events: EventSink<T>,
}

impl<T> Clone for Select<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            barrier: self.barrier.clone(),
            host: self.host.clone(),
            events: self.events.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<T: Clone + Send + Sync + 'static> Select<T> {
    /// Create a select and the receiver for its notifications.
    pub fn new(config: SelectConfig<T>, host: Collaborators) -> (Self, SelectEvents<T>) {
        let (sink, events) = events::channel();
        let select = Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner::new(config))),
            barrier: RenderBarrier::new(),
            host,
            events: sink,
        };
        (select, events)
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string (used as the key-interception element id).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub(super) fn read<R>(&self, f: impl FnOnce(&SelectInner<T>) -> R) -> R {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    pub(super) fn write<R>(&self, f: impl FnOnce(&mut SelectInner<T>) -> R) -> R {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    pub(super) fn emit_all(&self, events: Vec<SelectEvent<T>>) {
        for event in events {
            self.events.emit(event);
        }
    }

    pub(super) fn emit(&self, event: SelectEvent<T>) {
        self.events.emit(event);
    }

    /// Whether interaction is refused (disabled or read-only).
    pub(super) fn is_locked(&self) -> bool {
        self.read(|inner| inner.config.is_locked())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub(super) fn request_render(&self) {
        self.host.render.request_render();
    }

    /// Wait until the host reports its next render as complete.
    ///
    /// Concurrent callers share a single pending render.
    pub fn wait_for_next_render(&self) -> RenderWait {
        self.barrier.wait_for_next_render(self.host.render.as_ref())
    }

    /// Called by the host after every render.
    pub fn render_complete(&self) {
        self.write(|inner| inner.refresh_select_all());
        if self.barrier.complete() {
            log::trace!("Select {}: render complete, barrier released", self.id);
        }
    }

    // -------------------------------------------------------------------------
    // Item registry
    // -------------------------------------------------------------------------

    /// Register an item rendered by the host.
    ///
    /// Duplicate values are ignored (`added == false`).
    pub fn register(&self, item: SelectItem<T>) -> RegisterOutcome {
        let mut events = Vec::new();
        let outcome = self.write(|inner| {
            let is_current = !inner.is_multi()
                && inner
                    .value
                    .as_ref()
                    .is_some_and(|value| inner.values_equal(value, item.value()));
            let added = inner.registry.add(item);
            if added {
                inner.refresh_select_all();
                if inner.is_multi() {
                    inner.refresh_text(&mut events);
                }
            }
            RegisterOutcome { added, is_current }
        });
        if !outcome.added {
            log::trace!("Select {}: duplicate value not registered", self.id);
        }
        self.emit_all(events);
        outcome
    }

    /// Remove an item by identity. No-op if it is not registered.
    pub fn unregister(&self, id: ItemId) {
        let mut events = Vec::new();
        self.write(|inner| {
            if inner.registry.remove(id).is_none() {
                return;
            }
            if inner.highlighted == Some(id) {
                inner.highlighted = None;
            }
            inner.refresh_select_all();
            if inner.is_multi() {
                inner.refresh_text(&mut events);
            }
        });
        self.emit_all(events);
    }

    /// Change the disabled flag of a registered item.
    ///
    /// Selection is left untouched; a selected item that becomes disabled stays
    /// selected.
    pub fn set_item_disabled(&self, id: ItemId, disabled: bool) {
        self.write(|inner| {
            if inner.registry.set_disabled(id, disabled) {
                inner.refresh_select_all();
            }
        });
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.read(|inner| inner.registry.index_of(id))
    }

    pub fn item_at(&self, index: usize) -> Option<SelectItem<T>> {
        self.read(|inner| inner.registry.item_at(index).cloned())
    }

    /// Snapshot of the registered items, in render order.
    pub fn items(&self) -> Vec<SelectItem<T>> {
        self.read(|inner| inner.registry.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.read(|inner| inner.registry.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> SelectionMode {
        self.read(|inner| inner.config.mode)
    }

    /// Selected values in display order.
    pub fn selected_values(&self) -> Vec<T> {
        self.read(|inner| inner.ordered_selection())
    }

    /// Whether the value is currently selected.
    pub fn is_selected(&self, value: &T) -> bool {
        self.read(|inner| inner.selection.contains(value))
    }

    /// The current value.
    pub fn value(&self) -> Option<T> {
        self.read(|inner| inner.value.clone())
    }

    /// The derived display text.
    pub fn text(&self) -> Option<String> {
        self.read(|inner| inner.text.clone())
    }

    /// Text shown in the input.
    ///
    /// In strict single-selection mode a value that no rendered item holds
    /// is not shown.
    pub fn input_text(&self) -> Option<String> {
        self.read(|inner| {
            if inner.config.strict && !inner.is_multi() {
                let in_list = inner
                    .value
                    .as_ref()
                    .is_some_and(|value| inner.registry.contains_value(value));
                if !in_list {
                    return None;
                }
            }
            inner.text.clone()
        })
    }

    /// Whether the current value is held by a rendered item.
    pub fn is_value_in_list(&self) -> bool {
        self.read(|inner| {
            inner
                .value
                .as_ref()
                .is_some_and(|value| inner.registry.contains_value(value))
        })
    }

    /// Whether anything is selected (multi) or a value is set (single).
    pub fn has_value(&self) -> bool {
        self.read(|inner| {
            if inner.is_multi() {
                !inner.selection.is_empty()
            } else {
                inner.value.is_some()
            }
        })
    }

    pub fn highlighted(&self) -> Option<ItemId> {
        self.read(|inner| inner.highlighted)
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.read(|inner| inner.highlighted_index())
    }

    /// The tri-state aggregate, recomputed from the current state.
    pub fn select_all_state(&self) -> SelectAllState {
        self.read(|inner| SelectAllState::compute(&inner.registry, &inner.selection))
    }

    /// The cached tri-state shown by the "select all" entry, if it is active.
    pub fn select_all_checkbox(&self) -> Option<SelectAllState> {
        self.read(|inner| inner.config.select_all_active().then_some(inner.select_all))
    }

    pub fn select_all_text(&self) -> String {
        self.read(|inner| inner.config.select_all_text.clone())
    }

    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.menu.is_open())
    }

    /// The adornment icon for the current menu state.
    pub fn icon(&self) -> String {
        self.read(|inner| inner.config.icons.current(inner.menu).to_string())
    }

    /// Whether the clear button should be shown.
    pub fn shows_clear_button(&self) -> bool {
        self.read(|inner| {
            inner.config.clearable
                && !inner.config.is_locked()
                && (!inner.selection.is_empty() || inner.value.is_some())
        })
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|inner| inner.config.disabled)
    }

    pub fn is_read_only(&self) -> bool {
        self.read(|inner| inner.config.read_only)
    }

    /// Converted text of a value, as used for display and type-ahead.
    pub fn convert(&self, value: &T) -> Option<String> {
        self.read(|inner| inner.config.text.convert(value))
    }
}
