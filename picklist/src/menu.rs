//! Menu open/closed state and its adornment icon.

/// State of the dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Icons shown next to the select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    /// Shown while the menu is closed.
    pub open: String,
    /// Shown while the menu is open.
    pub close: String,
    /// Overrides both when set.
    pub adornment: Option<String>,
    /// Shown by the clear button.
    pub clear: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            open: "▼".into(),
            close: "▲".into(),
            adornment: None,
            clear: "✕".into(),
        }
    }
}

impl Icons {
    /// The icon to show for the given menu state.
    pub fn current(&self, state: MenuState) -> &str {
        if let Some(adornment) = self.adornment.as_deref()
            && !adornment.trim().is_empty()
        {
            return adornment;
        }
        match state {
            MenuState::Closed => &self.open,
            MenuState::Open => &self.close,
        }
    }
}
