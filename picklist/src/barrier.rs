//! Render synchronization barrier.
//!
//! Items only get their final identities once the host has rendered them, so
//! anything that wants to highlight or scroll to a freshly rendered item first
//! waits for the next render to complete. At most one wait is outstanding at a
//! time: every caller that arrives while a render is pending shares it.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;

use crate::host::RenderHost;

type RenderSignal = Shared<oneshot::Receiver<()>>;

struct Pending {
    tx: oneshot::Sender<()>,
    signal: RenderSignal,
}

impl std::fmt::Debug for Pending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pending").finish_non_exhaustive()
    }
}

/// Single-slot barrier resolved by the host's next render completion.
///
/// Cloning shares the slot. The lock only guards the slot swap and is never
/// held while the host is called or while a wait is polled.
#[derive(Debug, Clone, Default)]
pub struct RenderBarrier {
    slot: Arc<Mutex<Option<Pending>>>,
}

impl RenderBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Pending>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a handle that resolves when the next render completes.
    ///
    /// Requests a render from `host` only when no wait was pending already.
    pub fn wait_for_next_render(&self, host: &dyn RenderHost) -> RenderWait {
        let (signal, fresh) = {
            let mut slot = self.slot();
            match slot.as_ref() {
                Some(pending) => (pending.signal.clone(), false),
                None => {
                    let (tx, rx) = oneshot::channel();
                    let signal = rx.shared();
                    *slot = Some(Pending {
                        tx,
                        signal: signal.clone(),
                    });
                    (signal, true)
                }
            }
        };

        if fresh {
            log::trace!("RenderBarrier: requesting render");
            host.request_render();
        }

        RenderWait { signal }
    }

    /// Resolve the pending wait, if any. Returns whether a wait was resolved.
    pub fn complete(&self) -> bool {
        let pending = self.slot().take();
        match pending {
            Some(pending) => {
                let _ = pending.tx.send(());
                true
            }
            None => false,
        }
    }

    /// Whether a wait is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.slot().is_some()
    }
}

/// Future returned by [`RenderBarrier::wait_for_next_render`].
///
/// Also resolves if the barrier is dropped with the wait still pending,
/// which only happens at teardown.
#[derive(Clone)]
#[must_use = "a render wait does nothing unless awaited"]
pub struct RenderWait {
    signal: RenderSignal,
}

impl std::fmt::Debug for RenderWait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderWait").finish_non_exhaustive()
    }
}

impl Future for RenderWait {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.signal.poll_unpin(cx).map(|_| ())
    }
}
