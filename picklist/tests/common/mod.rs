//! Shared fakes for the select integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use picklist::prelude::*;
use picklist::wakeup;

/// A call made to the fake key interceptor.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCall {
    Subscribe(String, KeyInterceptorOptions),
    Update(String, KeyRule),
    Unsubscribe(String),
}

/// Records every collaborator call. Optionally fails them all.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub scrolled: Mutex<Vec<ItemId>>,
    pub focused: AtomicUsize,
    pub key_calls: Mutex<Vec<KeyCall>>,
    pub fail: AtomicBool,
}

impl FakeHost {
    fn result(&self) -> Result<(), HostError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(HostError::Backend("fake failure".into()))
        } else {
            Ok(())
        }
    }

    pub fn scrolled(&self) -> Vec<ItemId> {
        self.scrolled.lock().unwrap().clone()
    }

    pub fn focus_count(&self) -> usize {
        self.focused.load(Ordering::SeqCst)
    }

    pub fn key_calls(&self) -> Vec<KeyCall> {
        self.key_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScrollManager for FakeHost {
    async fn scroll_into_view(&self, item: &ItemId) -> Result<(), HostError> {
        self.scrolled.lock().unwrap().push(*item);
        self.result()
    }
}

#[async_trait]
impl FocusHandle for FakeHost {
    async fn focus(&self) -> Result<(), HostError> {
        self.focused.fetch_add(1, Ordering::SeqCst);
        self.result()
    }
}

#[async_trait]
impl KeyInterceptor for FakeHost {
    async fn subscribe(
        &self,
        element_id: &str,
        options: KeyInterceptorOptions,
    ) -> Result<(), HostError> {
        self.key_calls
            .lock()
            .unwrap()
            .push(KeyCall::Subscribe(element_id.to_string(), options));
        self.result()
    }

    async fn update_key(&self, element_id: &str, rule: KeyRule) -> Result<(), HostError> {
        self.key_calls
            .lock()
            .unwrap()
            .push(KeyCall::Update(element_id.to_string(), rule));
        self.result()
    }

    async fn unsubscribe(&self, element_id: &str) -> Result<(), HostError> {
        self.key_calls
            .lock()
            .unwrap()
            .push(KeyCall::Unsubscribe(element_id.to_string()));
        self.result()
    }
}

/// A select wired to a fake host and a render task that completes every
/// requested render.
pub struct Harness<T> {
    pub select: Select<T>,
    pub events: SelectEvents<T>,
    pub host: Arc<FakeHost>,
    pub renders: Arc<AtomicUsize>,
}

impl<T: Clone + Send + Sync + 'static> Harness<T> {
    pub fn new(config: SelectConfig<T>) -> Self {
        let (render_tx, mut render_rx) = wakeup::channel();
        let host = Arc::new(FakeHost::default());
        let collaborators = Collaborators::new(Arc::new(render_tx))
            .with_scroll(host.clone())
            .with_keys(host.clone())
            .with_focus(host.clone());
        let (select, events) = Select::new(config, collaborators);

        let renders = Arc::new(AtomicUsize::new(0));
        let renderer = select.clone();
        let count = renders.clone();
        tokio::spawn(async move {
            while render_rx.recv().await.is_some() {
                render_rx.drain();
                count.fetch_add(1, Ordering::SeqCst);
                renderer.render_complete();
            }
        });

        Self {
            select,
            events,
            host,
            renders,
        }
    }

    /// Register one enabled item per value, returning their ids.
    pub fn items(&self, values: &[T]) -> Vec<ItemId> {
        values
            .iter()
            .map(|value| {
                let item = SelectItem::new(value.clone());
                let id = item.id();
                self.select.register(item);
                id
            })
            .collect()
    }

    pub fn drain(&mut self) -> Vec<SelectEvent<T>> {
        self.events.drain()
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn selection_changes<T: Clone>(events: &[SelectEvent<T>]) -> Vec<Vec<T>> {
    events
        .iter()
        .filter_map(|event| match event {
            SelectEvent::SelectionChanged(values) => Some(values.clone()),
            _ => None,
        })
        .collect()
}
