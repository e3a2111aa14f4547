//! Key-interception contract.
//!
//! The host decides, per key, whether a key-down keeps its default behaviour and
//! whether it keeps propagating to ancestors of the select. The controller only
//! describes the rules; delivering the key events themselves is the host's job
//! (it calls [`Select::handle_key_down`](crate::Select::handle_key_down) and
//! [`Select::handle_key_up`](crate::Select::handle_key_up)).

use async_trait::async_trait;

use crate::error::HostError;
use crate::keys::{Key, KeyCombo, Modifiers};

/// Modifier condition under which a rule applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyCondition {
    /// Never applies.
    #[default]
    Never,
    /// Applies only when no modifier is held.
    NoModifiers,
    /// Applies only when ctrl is held.
    Ctrl,
    /// Applies regardless of modifiers.
    Any,
}

impl KeyCondition {
    /// Check whether the condition holds for the given modifiers.
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        match self {
            Self::Never => false,
            Self::NoModifiers => !modifiers.any(),
            Self::Ctrl => modifiers.ctrl,
            Self::Any => true,
        }
    }
}

/// Which keys a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// One specific key.
    Exact(Key),
    /// A character key, compared case-insensitively.
    CharIgnoreCase(char),
    /// Any key.
    Any,
}

impl KeyPattern {
    /// Check whether the pattern covers the key.
    pub fn covers(&self, key: &Key) -> bool {
        match (self, key) {
            (Self::Any, _) => true,
            (Self::Exact(expected), actual) => expected == actual,
            (Self::CharIgnoreCase(expected), Key::Char(actual)) => {
                expected.eq_ignore_ascii_case(actual)
            }
            _ => false,
        }
    }
}

/// Interception rule for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRule {
    pub pattern: KeyPattern,
    /// Suppress the host's default behaviour on key-down.
    pub prevent_down: KeyCondition,
    /// Stop the key-down from propagating past the select.
    pub stop_down: KeyCondition,
    /// Deliver key-down events to the controller.
    pub subscribe_down: bool,
    /// Deliver key-up events to the controller.
    pub subscribe_up: bool,
}

impl KeyRule {
    /// A rule covering `pattern` that intercepts nothing yet.
    pub const fn new(pattern: KeyPattern) -> Self {
        Self {
            pattern,
            prevent_down: KeyCondition::Never,
            stop_down: KeyCondition::Never,
            subscribe_down: false,
            subscribe_up: false,
        }
    }

    pub const fn prevent_down(mut self, condition: KeyCondition) -> Self {
        self.prevent_down = condition;
        self
    }

    pub const fn stop_down(mut self, condition: KeyCondition) -> Self {
        self.stop_down = condition;
        self
    }

    pub const fn subscribe(mut self) -> Self {
        self.subscribe_down = true;
        self.subscribe_up = true;
        self
    }

    /// Whether the default behaviour of this key-down should be suppressed.
    pub fn prevents(&self, combo: &KeyCombo) -> bool {
        self.pattern.covers(&combo.key) && self.prevent_down.matches(&combo.modifiers)
    }

    /// Whether this key-down should stop propagating.
    pub fn stops(&self, combo: &KeyCombo) -> bool {
        self.pattern.covers(&combo.key) && self.stop_down.matches(&combo.modifiers)
    }
}

/// A keymap registered for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInterceptorOptions {
    pub rules: Vec<KeyRule>,
}

impl KeyInterceptorOptions {
    pub fn new(rules: Vec<KeyRule>) -> Self {
        Self { rules }
    }

    /// Replace the rule covering the same pattern, or append it.
    pub fn update(&mut self, rule: KeyRule) {
        match self.rules.iter_mut().find(|r| r.pattern == rule.pattern) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// First rule whose pattern covers the key.
    pub fn rule_for(&self, key: &Key) -> Option<&KeyRule> {
        self.rules.iter().find(|r| r.pattern.covers(key))
    }
}

/// Host-side key interception service.
#[async_trait]
pub trait KeyInterceptor: Send + Sync {
    /// Install the keymap for an element.
    async fn subscribe(
        &self,
        element_id: &str,
        options: KeyInterceptorOptions,
    ) -> Result<(), HostError>;

    /// Replace one rule of an existing subscription.
    async fn update_key(&self, element_id: &str, rule: KeyRule) -> Result<(), HostError>;

    /// Release the subscription for an element.
    async fn unsubscribe(&self, element_id: &str) -> Result<(), HostError>;
}
