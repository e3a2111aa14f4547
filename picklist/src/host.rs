//! Host collaborator contracts.
//!
//! The controller never reaches into the host's rendering, scrolling or focus
//! machinery directly. It calls these traits and the host answers render
//! requests with [`Select::render_complete`](crate::Select::render_complete).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HostError;
use crate::intercept::{KeyInterceptor, KeyInterceptorOptions, KeyRule};
use crate::item::ItemId;

/// Receives render requests.
///
/// Every request must eventually be followed by exactly one call to
/// `Select::render_complete` once the host has re-rendered the list.
pub trait RenderHost: Send + Sync {
    /// Schedule a render. Must not block.
    fn request_render(&self);
}

/// Scrolls rendered list items into view.
#[async_trait]
pub trait ScrollManager: Send + Sync {
    async fn scroll_into_view(&self, item: &ItemId) -> Result<(), HostError>;
}

/// Moves input focus back to the select's input element.
#[async_trait]
pub trait FocusHandle: Send + Sync {
    async fn focus(&self) -> Result<(), HostError>;
}

/// Host that ignores every request.
///
/// Render requests are dropped, so a controller built on `NoopHost` must never
/// await a render. Useful for purely synchronous hosts and for the pieces of a
/// host that a given embedding does not support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl RenderHost for NoopHost {
    fn request_render(&self) {}
}

#[async_trait]
impl ScrollManager for NoopHost {
    async fn scroll_into_view(&self, _item: &ItemId) -> Result<(), HostError> {
        Ok(())
    }
}

#[async_trait]
impl FocusHandle for NoopHost {
    async fn focus(&self) -> Result<(), HostError> {
        Ok(())
    }
}

#[async_trait]
impl KeyInterceptor for NoopHost {
    async fn subscribe(
        &self,
        _element_id: &str,
        _options: KeyInterceptorOptions,
    ) -> Result<(), HostError> {
        Ok(())
    }

    async fn update_key(&self, _element_id: &str, _rule: KeyRule) -> Result<(), HostError> {
        Ok(())
    }

    async fn unsubscribe(&self, _element_id: &str) -> Result<(), HostError> {
        Ok(())
    }
}

/// The set of collaborators a select talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub render: Arc<dyn RenderHost>,
    pub scroll: Arc<dyn ScrollManager>,
    pub keys: Arc<dyn KeyInterceptor>,
    pub focus: Arc<dyn FocusHandle>,
}

impl Collaborators {
    /// Use `render` for render requests and no-ops for everything else.
    pub fn new(render: Arc<dyn RenderHost>) -> Self {
        Self {
            render,
            scroll: Arc::new(NoopHost),
            keys: Arc::new(NoopHost),
            focus: Arc::new(NoopHost),
        }
    }

    pub fn with_scroll(mut self, scroll: Arc<dyn ScrollManager>) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_keys(mut self, keys: Arc<dyn KeyInterceptor>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_focus(mut self, focus: Arc<dyn FocusHandle>) -> Self {
        self.focus = focus;
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
