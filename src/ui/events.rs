use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::store::Settlement;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A dispatched fetch finished; apply it to the store.
    Settled(Settlement),
    /// The input thread hit a terminal error and stopped. No more keys will
    /// arrive, so the UI should exit.
    InputClosed(String),
}

/// Merges terminal input, ticks and fetch settlements into one queue so
/// all state changes happen on the UI thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || pump_input(read_terminal, event_tx, tick_rate))?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward events from `next_event` and emit ticks until the receiver is
/// gone or the source fails.
fn pump_input<F>(mut next_event: F, tx: Sender<AppEvent>, tick_rate: Duration)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        // short poll so ticks stay on schedule
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match next_event(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "terminal input failed");
                let _ = tx.send(AppEvent::InputClosed(err.to_string()));
                return;
            }
        };
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
