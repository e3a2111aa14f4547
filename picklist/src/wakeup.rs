//! Render request channel.
//!
//! The simplest [`RenderHost`]. A select only ever needs to know that *some*
//! render is pending, so requests coalesce into a single queued signal. The
//! host's render loop waits on [`WakeupReceiver::recv`], draws, and then calls
//! [`Select::render_complete`](crate::Select::render_complete) to release any
//! operation waiting on the render barrier.

use tokio::sync::mpsc;

use crate::host::RenderHost;

/// At most one render is ever queued. Extra requests made before the loop
/// picks it up are satisfied by that render.
const PENDING_RENDERS: usize = 1;

/// Requests renders from the host's render loop.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Queue a render unless one is already queued.
    ///
    /// Never blocks. A closed channel means the render loop has stopped and
    /// the request is dropped.
    pub fn send(&self) {
        if let Err(mpsc::error::TrySendError::Closed(())) = self.tx.try_send(()) {
            log::trace!("Render requested after the render loop stopped");
        }
    }
}

impl RenderHost for WakeupSender {
    fn request_render(&self) {
        self.send();
    }
}

/// The render loop's end of the channel.
#[derive(Debug)]
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait until a render is requested. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Discard a request that arrived after [`recv`](Self::recv) returned.
    ///
    /// The render about to happen covers it, and reporting completion once
    /// releases every waiter regardless.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(PENDING_RENDERS);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
