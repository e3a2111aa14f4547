//! Key handling and the key-interception keymap.

use crate::events::{EventResult, SelectEvent};
use crate::intercept::{KeyCondition, KeyInterceptorOptions, KeyPattern, KeyRule};
use crate::keys::{Key, KeyCombo};
use crate::selection::SelectionMode;

use super::Select;

/// Keymap installed by [`Select::attach`].
pub fn default_keymap() -> KeyInterceptorOptions {
    let prevented = |key| {
        KeyRule::new(KeyPattern::Exact(key))
            .prevent_down(KeyCondition::NoModifiers)
            .subscribe()
    };
    KeyInterceptorOptions::new(vec![
        prevented(Key::Space),
        prevented(Key::Up),
        prevented(Key::Down),
        prevented(Key::Home),
        prevented(Key::End),
        prevented(Key::Enter),
        escape_rule(false),
        KeyRule::new(KeyPattern::CharIgnoreCase('a'))
            .prevent_down(KeyCondition::Ctrl)
            .subscribe(),
        KeyRule::new(KeyPattern::Any).subscribe(),
    ])
}

/// Escape stops propagating only while the menu is open, so an open menu
/// swallows the key that closes it.
pub fn escape_rule(open: bool) -> KeyRule {
    let stop = if open {
        KeyCondition::NoModifiers
    } else {
        KeyCondition::Never
    };
    KeyRule::new(KeyPattern::Exact(Key::Escape))
        .stop_down(stop)
        .subscribe()
}

impl<T: Clone + Send + Sync + 'static> Select<T> {
    /// Install the keymap with the host's key interceptor. Idempotent.
    pub async fn attach(&self) {
        let first = self.write(|inner| !std::mem::replace(&mut inner.subscribed, true));
        if !first {
            return;
        }
        if let Err(e) = self
            .host
            .keys
            .subscribe(&self.id_string(), default_keymap())
            .await
        {
            log::warn!("Select {}: failed to subscribe keys: {}", self.id(), e);
        }
    }

    /// Release the keymap.
    pub async fn dispose(&self) {
        let subscribed = self.write(|inner| std::mem::replace(&mut inner.subscribed, false));
        if !subscribed {
            return;
        }
        if let Err(e) = self.host.keys.unsubscribe(&self.id_string()).await {
            log::warn!("Select {}: failed to unsubscribe keys: {}", self.id(), e);
        }
    }

    pub(super) async fn update_escape_rule(&self, open: bool) {
        if !self.read(|inner| inner.subscribed) {
            return;
        }
        if let Err(e) = self
            .host
            .keys
            .update_key(&self.id_string(), escape_rule(open))
            .await
        {
            log::warn!("Select {}: failed to update escape rule: {}", self.id(), e);
        }
    }

    /// Route a key-down to the select.
    pub async fn handle_key_down(&self, combo: KeyCombo) -> EventResult {
        if self.is_locked() {
            log::debug!("Select {}: key {:?} refused (locked)", self.id(), combo.key);
            return EventResult::Ignored;
        }

        let open = self.is_open();
        let alt = combo.modifiers.alt;

        if open && let Some(c) = combo.type_ahead() {
            self.select_first_matching(c).await;
            return EventResult::Consumed;
        }

        match combo.key {
            Key::Tab => self.close_menu(false).await,
            Key::Up if alt => self.close_menu(true).await,
            Key::Up if !open => self.open_menu().await,
            Key::Up => self.select_previous().await,
            Key::Down if alt || !open => self.open_menu().await,
            Key::Down => self.select_next().await,
            Key::Space => self.toggle_menu().await,
            Key::Escape => self.close_menu(true).await,
            Key::Home => self.select_first().await,
            Key::End => self.select_last().await,
            Key::Enter if !open => self.open_menu().await,
            Key::Enter => match self.highlighted_index() {
                Some(index) => self.select_index(index).await,
                None if self.mode() == SelectionMode::Single => self.close_menu(true).await,
                None => {}
            },
            Key::Char(c)
                if combo.modifiers.ctrl
                    && c.eq_ignore_ascii_case(&'a')
                    && self.mode() == SelectionMode::Multi =>
            {
                self.toggle_select_all();
                self.wait_for_next_render().await;
            }
            _ => {
                self.emit(SelectEvent::KeyDown(combo));
                return EventResult::Ignored;
            }
        }

        self.emit(SelectEvent::KeyDown(combo));
        EventResult::Consumed
    }

    /// Route a key-up to the select.
    pub fn handle_key_up(&self, combo: KeyCombo) {
        self.emit(SelectEvent::KeyUp(combo));
    }
}
