//! Demo runtime: a render loop and an input loop around one select.

use std::io;
use std::sync::{Arc, Mutex};

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info, trace};
use picklist::prelude::*;
use picklist::wakeup::{self, WakeupReceiver};

use crate::events::{Input, convert_event};
use crate::host::TerminalHost;
use crate::terminal::TerminalGuard;
use crate::view;

/// Error from the demo runtime.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Demo options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub multi: bool,
    pub select_all: bool,
    pub strict: bool,
}

impl Options {
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--multi" => options.multi = true,
                "--select-all" => {
                    options.multi = true;
                    options.select_all = true;
                }
                "--strict" => options.strict = true,
                other => log::warn!("Ignoring unknown argument {}", other),
            }
        }
        options
    }

    fn config(&self) -> SelectConfig<&'static str> {
        let mut config = SelectConfig::default()
            .clearable(true)
            .strict(self.strict)
            .select_all(self.select_all);
        if self.multi {
            config = config.multi_selection();
        }
        config
    }
}

const FRUITS: &[(&str, bool)] = &[
    ("Apple", false),
    ("Apricot", false),
    ("Avocado", false),
    ("Banana", false),
    ("Blackberry", true),
    ("Blueberry", false),
    ("Cherry", false),
    ("Coconut", false),
    ("Date", false),
    ("Dragonfruit", true),
    ("Elderberry", false),
    ("Fig", false),
    ("Grape", false),
    ("Grapefruit", false),
    ("Kiwi", false),
    ("Lemon", false),
    ("Lime", false),
    ("Mango", false),
    ("Melon", false),
    ("Nectarine", false),
    ("Orange", false),
    ("Papaya", false),
    ("Peach", false),
    ("Pear", false),
    ("Pineapple", false),
    ("Plum", false),
    ("Raspberry", false),
    ("Strawberry", false),
    ("Watermelon", false),
];

pub async fn run(options: Options) -> Result<(), AppError> {
    let guard = TerminalGuard::new()?;

    let (wakeup_tx, wakeup_rx) = wakeup::channel();
    let host = Arc::new(TerminalHost::new(wakeup_tx));
    let collaborators = Collaborators::new(host.clone())
        .with_scroll(host.clone())
        .with_keys(host.clone())
        .with_focus(host.clone());
    let (select, events) = Select::new(options.config(), collaborators);

    for (name, disabled) in FRUITS {
        select.register(SelectItem::new(*name).disabled(*disabled));
    }
    select.attach().await;

    let status = Arc::new(Mutex::new(String::from("ready")));
    let size = guard.size()?;

    let renderer = tokio::spawn(render_loop(
        select.clone(),
        host.clone(),
        wakeup_rx,
        status.clone(),
        size,
    ));
    let notifier = tokio::spawn(notification_loop(events, host.clone(), status));

    host.request_render();
    let result = input_loop(&select, &host).await;

    select.dispose().await;
    notifier.abort();
    renderer.abort();
    match renderer.await {
        Ok(render_result) => render_result?,
        Err(e) if e.is_cancelled() => {}
        Err(e) => return Err(e.into()),
    }

    drop(guard);
    result
}

/// Handle input events one at a time. Each key is processed to completion,
/// including any render waits, before the next one is read.
async fn input_loop<T>(select: &Select<T>, host: &TerminalHost) -> Result<(), AppError>
where
    T: Clone + Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let element_id = select.id_string();

    while let Some(event) = events.next().await {
        let event = event?;
        let Some(input) = convert_event(event) else {
            continue;
        };
        trace!("Input: {:?}", input);

        match input {
            Input::Quit => break,
            Input::KeyDown(combo) => {
                let stopped = host.stops(&element_id, &combo);
                let result = select.handle_key_down(combo).await;
                debug!("Key {:?} -> {:?} (stopped={})", combo, result, stopped);
                if combo.key == Key::Escape && !stopped {
                    info!("Escape reached the app, quitting");
                    break;
                }
                if combo.key == Key::Backspace && !result.is_consumed() {
                    select.clear_button_click();
                }
            }
            Input::KeyUp(combo) => {
                if host.wants_key_up(&element_id, &combo) {
                    select.handle_key_up(combo);
                }
            }
            Input::Resize { width, height } => {
                debug!("Terminal resized to {}x{}", width, height);
                host.request_render();
            }
        }
    }
    Ok(())
}

/// Redraw whenever a render is requested, then report completion.
async fn render_loop<T>(
    select: Select<T>,
    host: Arc<TerminalHost>,
    mut wakeup_rx: WakeupReceiver,
    status: Arc<Mutex<String>>,
    mut size: (u16, u16),
) -> Result<(), AppError>
where
    T: Clone + std::fmt::Display + Send + Sync + 'static,
{
    let mut stdout = io::stdout();
    while wakeup_rx.recv().await.is_some() {
        wakeup_rx.drain();
        if let Ok(current) = crossterm::terminal::size() {
            size = current;
        }
        let line = status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        if let Err(e) = view::draw(&mut stdout, &select, &host, size, &line) {
            error!("Render failed: {}", e);
            return Err(e.into());
        }
        select.render_complete();
    }
    Ok(())
}

/// Log notifications and show the latest one in the status line.
async fn notification_loop<T>(
    mut events: SelectEvents<T>,
    host: Arc<TerminalHost>,
    status: Arc<Mutex<String>>,
) where
    T: std::fmt::Debug + Send + 'static,
{
    while let Some(event) = events.recv().await {
        info!("Select event: {:?}", event);
        if matches!(event, SelectEvent::KeyDown(_) | SelectEvent::KeyUp(_)) {
            continue;
        }
        if let Ok(mut line) = status.lock() {
            *line = format!("{:?}", event);
        }
        host.request_render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_args() {
        let options = Options::from_args(["--select-all".to_string(), "--strict".to_string()]);
        assert!(options.multi);
        assert!(options.select_all);
        assert!(options.strict);
        assert!(options.config().select_all_active());
    }

    #[test]
    fn test_default_options_are_single() {
        let options = Options::from_args(Vec::new());
        assert_eq!(options.config().mode, SelectionMode::Single);
    }
}
