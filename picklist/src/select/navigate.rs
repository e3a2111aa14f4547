//! Keyboard navigation over the rendered items.

use crate::item::ItemId;
use crate::navigation::{self, Direction};
use crate::selection::SelectionMode;

use super::Select;

impl<T: Clone + Send + Sync + 'static> Select<T> {
    /// Move the highlight to the next enabled item.
    pub async fn select_next(&self) {
        self.step(Direction::Forward).await;
    }

    /// Move the highlight to the previous enabled item.
    pub async fn select_previous(&self) {
        self.step(Direction::Backward).await;
    }

    /// Move the highlight one enabled item in `direction`, clamping at the ends.
    pub async fn step(&self, direction: Direction) {
        if self.is_locked() {
            return;
        }
        let target =
            self.read(|inner| navigation::step_from(&inner.registry, inner.highlighted, direction));
        self.move_to(target).await;
    }

    /// Highlight the next enabled item whose text starts with `c`.
    pub async fn select_first_matching(&self, c: char) {
        if self.is_locked() {
            return;
        }
        let target = self.read(|inner| {
            navigation::first_matching(&inner.registry, inner.highlighted, c, &inner.config.text)
        });
        self.move_to(target).await;
    }

    /// Highlight the first enabled item.
    pub async fn select_first(&self) {
        if self.is_locked() {
            return;
        }
        let target = self.read(|inner| navigation::first_enabled(&inner.registry));
        self.move_to(target).await;
    }

    /// Highlight the last enabled item.
    pub async fn select_last(&self) {
        if self.is_locked() {
            return;
        }
        let target = self.read(|inner| navigation::last_enabled(&inner.registry));
        self.move_to(target).await;
    }

    async fn move_to(&self, index: Option<usize>) {
        let Some(index) = index else {
            log::trace!("Select {}: no eligible item to navigate to", self.id());
            return;
        };
        let Some(item) = self.item_at(index) else {
            return;
        };

        if self.mode() == SelectionMode::Single {
            self.commit_single(item.value().clone());
        }
        self.write(|inner| inner.highlighted = Some(item.id()));
        self.request_render();

        self.wait_for_next_render().await;
        self.scroll_to(item.id()).await;
    }

    pub(super) async fn scroll_to(&self, id: ItemId) {
        if let Err(e) = self.host.scroll.scroll_into_view(&id).await {
            log::warn!("Select {}: failed to scroll {} into view: {}", self.id(), id, e);
        }
    }
}
