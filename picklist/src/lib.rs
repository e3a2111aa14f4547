pub mod barrier;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod intercept;
pub mod item;
pub mod keys;
pub mod menu;
pub mod navigation;
pub mod registry;
pub mod select;
pub mod select_all;
pub mod selection;
pub mod text;
pub mod wakeup;

pub use config::SelectConfig;
pub use error::HostError;
pub use events::{EventResult, SelectEvent, SelectEvents};
pub use host::Collaborators;
pub use item::{ItemId, SelectItem};
pub use select::{Select, SelectId};
pub use select_all::SelectAllState;
pub use selection::SelectionMode;

pub mod prelude {
    pub use crate::barrier::RenderWait;
    pub use crate::config::SelectConfig;
    pub use crate::error::HostError;
    pub use crate::events::{EventResult, SelectEvent, SelectEvents};
    pub use crate::host::{Collaborators, FocusHandle, NoopHost, RenderHost, ScrollManager};
    pub use crate::intercept::{
        KeyCondition, KeyInterceptor, KeyInterceptorOptions, KeyPattern, KeyRule,
    };
    pub use crate::item::{ItemId, SelectItem};
    pub use crate::keys::{Key, KeyCombo, Modifiers};
    pub use crate::menu::{Icons, MenuState};
    pub use crate::navigation::Direction;
    pub use crate::registry::RegisterOutcome;
    pub use crate::select::{Select, SelectId};
    pub use crate::select_all::SelectAllState;
    pub use crate::selection::{SelectionMode, ValueComparer};
    pub use crate::wakeup::{WakeupReceiver, WakeupSender};
}
