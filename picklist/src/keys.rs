//! Key combinations delivered to the select controller.
//!
//! Only the keys the select reacts to, or forwards, are modelled. Anything
//! else is the host's business and never reaches the select.

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    /// Alt+Up closes the menu, Alt+Down opens it.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Keys the select understands.
///
/// `Left`, `Right` and `Backspace` are not handled by the dispatcher. They
/// are still reported as key-down notifications and come back as
/// [`EventResult::Ignored`](crate::EventResult::Ignored) so the host can act
/// on them, for example Backspace as the clear button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable characters drive type-ahead while the menu is open.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

impl Key {
    /// The printable character this key produces, if any.
    ///
    /// Space is not considered printable for type-ahead purposes.
    pub fn printable(&self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_whitespace() && !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

/// A key with the modifiers held while it was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// The character to jump to, if this combo is a type-ahead keystroke.
    ///
    /// Any held modifier turns the key into a shortcut instead, so Ctrl+A
    /// toggles select-all rather than jumping to "a".
    pub fn type_ahead(&self) -> Option<char> {
        if self.modifiers.any() {
            return None;
        }
        self.key.printable()
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}
