//! Menu open/close transitions.

use crate::events::SelectEvent;
use crate::menu::MenuState;
use crate::navigation;
use crate::selection::SelectionMode;

use super::Select;

impl<T: Clone + Send + Sync + 'static> Select<T> {
    /// Open the menu and restore the highlight.
    ///
    /// Single selection highlights the item holding the current value, multi
    /// selection the first enabled item. The highlighted item is scrolled into
    /// view.
    pub async fn open_menu(&self) {
        if self.is_locked() {
            log::debug!("Select {}: open refused (locked)", self.id());
            return;
        }
        log::debug!("Select {}: opening menu", self.id());
        self.write(|inner| inner.menu = MenuState::Open);
        self.request_render();

        self.wait_for_next_render().await;
        self.highlight_selected_value().await;
        if let Some(id) = self.highlighted() {
            self.scroll_to(id).await;
        }

        self.update_escape_rule(true).await;
        self.emit(SelectEvent::Opened);
    }

    async fn highlight_selected_value(&self) {
        if self.mode() == SelectionMode::Multi {
            let first = self.read(|inner| {
                navigation::first_enabled(&inner.registry)
                    .and_then(|index| inner.registry.item_at(index))
                    .map(|item| item.id())
            });
            self.write(|inner| inner.highlighted = first);
            self.request_render();
            return;
        }

        match self.value() {
            Some(value) => self.highlight_value(value).await,
            None => self.write(|inner| inner.highlighted = None),
        }
    }

    /// Close the menu.
    ///
    /// With `focus_again` the select gives up focus and immediately asks for
    /// it back, which the owner observes as [`SelectEvent::Blurred`].
    pub async fn close_menu(&self, focus_again: bool) {
        if self.is_locked() {
            log::debug!("Select {}: close refused (locked)", self.id());
            return;
        }
        self.close_menu_unchecked(focus_again).await;
    }

    async fn close_menu_unchecked(&self, focus_again: bool) {
        log::debug!("Select {}: closing menu (focus_again={})", self.id(), focus_again);
        self.write(|inner| inner.menu = MenuState::Closed);

        if focus_again {
            self.request_render();
            self.emit(SelectEvent::Blurred);
            self.focus_input().await;
            self.request_render();
        } else {
            self.request_render();
        }

        self.update_escape_rule(false).await;
        self.emit(SelectEvent::Closed);
    }

    /// Open a closed menu, or close an open one and take focus back.
    pub async fn toggle_menu(&self) {
        if self.is_locked() {
            return;
        }
        if self.is_open() {
            self.close_menu(true).await;
        } else {
            self.open_menu().await;
        }
    }

    /// The input lost focus. While the menu is open focus is taken back so
    /// keys keep reaching the select.
    pub async fn focus_out(&self) {
        if self.is_open() {
            self.focus_input().await;
        }
    }

    async fn focus_input(&self) {
        if let Err(e) = self.host.focus.focus().await {
            log::warn!("Select {}: failed to focus input: {}", self.id(), e);
        }
    }

    /// Enable or disable the select. Disabling an open select closes it.
    pub async fn set_disabled(&self, disabled: bool) {
        self.write(|inner| inner.config.disabled = disabled);
        self.close_if_locked().await;
    }

    /// Toggle read-only. Making an open select read-only closes it.
    pub async fn set_read_only(&self, read_only: bool) {
        self.write(|inner| inner.config.read_only = read_only);
        self.close_if_locked().await;
    }

    async fn close_if_locked(&self) {
        if self.is_locked() && self.is_open() {
            self.close_menu_unchecked(false).await;
        } else {
            self.request_render();
        }
    }
}
