use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use tokio::sync::mpsc;

use crate::api::DogApiClient;
use crate::config::Config;
use crate::store::{PendingFetch, Store};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal gallery until the user quits.
///
/// The draw loop owns the [`App`] on the main thread. Fetches are awaited on
/// a tokio runtime and come back as [`AppEvent::Settled`].
pub fn run(config: &Config, initial_breed: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dog-gallery-fetch")
        .build()
        .context("failed to start async runtime")?;

    let client = {
        let _enter = runtime.enter();
        DogApiClient::new(&config.api).context("failed to build HTTP client")?
    };
    tracing::info!(base_url = client.base_url(), ordering = ?config.store.ordering, "starting");

    let store = Store::new(Arc::new(client), config.store.ordering);
    let toast_ttl = Duration::from_millis(config.ui.toast_duration_ms);
    let mut app = App::new(store, toast_ttl).with_initial_breed(initial_breed);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate).context("failed to start input thread")?;

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<PendingFetch>();
    let settled_tx = events.sender();
    runtime.spawn(async move {
        while let Some(pending) = fetch_rx.recv().await {
            let settled_tx = settled_tx.clone();
            tokio::spawn(async move {
                let settlement = pending.await;
                tracing::debug!(%settlement, "fetch settled");
                if settled_tx.send(AppEvent::Settled(settlement)).is_err() {
                    tracing::debug!("ui gone, dropping settlement");
                }
            });
        }
    });
    app.attach_fetcher(fetch_tx);
    app.on_mount();

    let mut input_error = None;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Settled(settlement)) => app.on_settled(settlement),
            Ok(AppEvent::InputClosed(reason)) => {
                input_error = Some(reason);
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    if let Some(reason) = input_error {
        anyhow::bail!("terminal input stopped: {}", reason);
    }
    tracing::info!("exiting");
    Ok(())
}
