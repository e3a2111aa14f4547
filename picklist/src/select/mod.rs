//! Select controller - a dropdown select with single and multi selection.
//!
//! The controller owns the selection, the highlight and the menu state. The
//! host renders the items, registers them with [`Select::register`] and reports
//! every finished render with [`Select::render_complete`]. Operations that need
//! the rendered items to be current (committing, navigating, opening the menu)
//! wait for that report before continuing.

mod commit;
mod keyboard;
mod menu;
mod navigate;
mod state;

pub use keyboard::{default_keymap, escape_rule};
pub use state::{Select, SelectId};
