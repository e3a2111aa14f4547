//! Keyboard navigation over the item registry.
//!
//! Every function here is pure: it takes the registry and the current
//! highlight and returns the index of the item to highlight next, or `None`
//! when nothing eligible exists. Disabled items are never returned.

use crate::item::ItemId;
use crate::registry::ItemRegistry;
use crate::text::TextFormat;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Next enabled item from `current` in `direction`.
///
/// Clamps at both ends instead of wrapping, so stepping past the last item
/// lands on the last item again. With no highlight, both directions start
/// from the first item.
pub fn step_from<T: Clone>(
    registry: &ItemRegistry<T>,
    current: Option<ItemId>,
    direction: Direction,
) -> Option<usize> {
    let count = registry.len();
    if count == 0 {
        return None;
    }
    let last = count as isize - 1;

    let mut index = current
        .and_then(|id| registry.index_of(id))
        .map(|i| i as isize)
        .unwrap_or(-1);
    if direction == Direction::Backward && index < 0 {
        index = 0;
    }

    for _ in 0..count {
        index = (index + direction.delta()).clamp(0, last);
        let i = index as usize;
        if registry.item_at(i).is_some_and(|item| !item.is_disabled()) {
            return Some(i);
        }
    }
    None
}

/// First enabled item.
pub fn first_enabled<T: Clone>(registry: &ItemRegistry<T>) -> Option<usize> {
    registry.items().iter().position(|item| !item.is_disabled())
}

/// Last enabled item.
pub fn last_enabled<T: Clone>(registry: &ItemRegistry<T>) -> Option<usize> {
    registry.items().iter().rposition(|item| !item.is_disabled())
}

/// First enabled item whose text starts with `prefix`, ignoring case.
///
/// If the highlighted item already matches, the search continues after it and
/// wraps around, so pressing the same letter repeatedly cycles through every
/// item starting with it.
pub fn first_matching<T: Clone>(
    registry: &ItemRegistry<T>,
    current: Option<ItemId>,
    prefix: char,
    format: &TextFormat<T>,
) -> Option<usize> {
    let matches: Vec<usize> = registry
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_disabled())
        .filter(|(_, item)| format.starts_with_ignore_case(item.value(), prefix))
        .map(|(i, _)| i)
        .collect();

    let current_index = current.and_then(|id| registry.index_of(id));
    match current_index {
        Some(at) if matches.contains(&at) => matches
            .iter()
            .copied()
            .find(|&i| i > at)
            .or_else(|| matches.first().copied()),
        _ => matches.first().copied(),
    }
}
