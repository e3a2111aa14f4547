//! Terminal implementation of the select's collaborators.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::{debug, trace};
use picklist::HostError;
use picklist::host::{FocusHandle, RenderHost, ScrollManager};
use picklist::intercept::{KeyInterceptor, KeyInterceptorOptions, KeyRule};
use picklist::item::ItemId;
use picklist::keys::KeyCombo;
use picklist::wakeup::WakeupSender;

/// Rows of the list that are currently rendered and how far they are scrolled.
#[derive(Debug, Default)]
struct Viewport {
    rows: Vec<ItemId>,
    offset: usize,
    height: usize,
}

/// Scrolling, focus and key interception for the terminal demo.
#[derive(Debug)]
pub struct TerminalHost {
    wakeup: WakeupSender,
    viewport: Mutex<Viewport>,
    keymaps: Mutex<HashMap<String, KeyInterceptorOptions>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TerminalHost {
    pub fn new(wakeup: WakeupSender) -> Self {
        Self {
            wakeup,
            viewport: Mutex::new(Viewport::default()),
            keymaps: Mutex::new(HashMap::new()),
        }
    }

    /// Record the item rows laid out by the last render.
    pub fn set_rows(&self, rows: Vec<ItemId>, height: usize) {
        let mut viewport = lock(&self.viewport);
        viewport.rows = rows;
        viewport.height = height.max(1);
        let max_offset = viewport.rows.len().saturating_sub(viewport.height);
        viewport.offset = viewport.offset.min(max_offset);
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        lock(&self.viewport).offset
    }

    /// Whether a key-down for `element_id` stops propagating to the app.
    pub fn stops(&self, element_id: &str, combo: &KeyCombo) -> bool {
        lock(&self.keymaps)
            .get(element_id)
            .and_then(|keymap| keymap.rule_for(&combo.key))
            .is_some_and(|rule| rule.stops(combo))
    }

    /// Whether `element_id` asked for key-up events of this key.
    pub fn wants_key_up(&self, element_id: &str, combo: &KeyCombo) -> bool {
        lock(&self.keymaps)
            .get(element_id)
            .and_then(|keymap| keymap.rule_for(&combo.key))
            .is_some_and(|rule| rule.subscribe_up)
    }
}

impl RenderHost for TerminalHost {
    fn request_render(&self) {
        self.wakeup.send();
    }
}

#[async_trait]
impl ScrollManager for TerminalHost {
    async fn scroll_into_view(&self, item: &ItemId) -> Result<(), HostError> {
        {
            let mut viewport = lock(&self.viewport);
            let index = viewport
                .rows
                .iter()
                .position(|id| id == item)
                .ok_or_else(|| HostError::ElementNotFound(item.to_string()))?;
            if index < viewport.offset {
                viewport.offset = index;
            } else if index >= viewport.offset + viewport.height {
                viewport.offset = index + 1 - viewport.height;
            }
            trace!("Scrolled {} into view, offset={}", item, viewport.offset);
        }
        self.wakeup.send();
        Ok(())
    }
}

#[async_trait]
impl FocusHandle for TerminalHost {
    async fn focus(&self) -> Result<(), HostError> {
        // The select is the only focusable element, so focus never leaves it.
        trace!("Focus requested");
        self.wakeup.send();
        Ok(())
    }
}

#[async_trait]
impl KeyInterceptor for TerminalHost {
    async fn subscribe(
        &self,
        element_id: &str,
        options: KeyInterceptorOptions,
    ) -> Result<(), HostError> {
        debug!("Key interception subscribed for {}", element_id);
        lock(&self.keymaps).insert(element_id.to_string(), options);
        Ok(())
    }

    async fn update_key(&self, element_id: &str, rule: KeyRule) -> Result<(), HostError> {
        let mut keymaps = lock(&self.keymaps);
        let keymap = keymaps
            .get_mut(element_id)
            .ok_or_else(|| HostError::NotSubscribed(element_id.to_string()))?;
        keymap.update(rule);
        Ok(())
    }

    async fn unsubscribe(&self, element_id: &str) -> Result<(), HostError> {
        debug!("Key interception released for {}", element_id);
        lock(&self.keymaps)
            .remove(element_id)
            .map(|_| ())
            .ok_or_else(|| HostError::NotSubscribed(element_id.to_string()))
    }
}
