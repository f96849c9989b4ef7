//! Runtime: terminal lifecycle and the event loop.
//!
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - A single `tokio::select!` loop multiplexes input, the frame ticker,
//!   finished contact deliveries and Ctrl+C.
//! - The ticker runs at frame rate only while the navigation scroll is
//!   animating and idles otherwise. Every tick drives the animation and then
//!   lets the visibility observer sample the viewport.
//! - Rendering happens only when `App` marked itself dirty.

use std::{
    io::Stdout,
    rc::Rc,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use hbt_types::{Effect, Msg};
use hbt_util::UserPreferences;
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::{
    SiteConfig,
    app::App,
    contact::{ContactError, ContactTransport},
    ui::{components::Component, main_view::MainView},
};

/// Tick interval while the scroll animation runs.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Tick interval otherwise; keeps the visibility observer sampling.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

type Delivery = JoinHandle<Result<(), ContactError>>;

/// Spawns the input thread. Mouse moves are dropped; nothing reacts to them.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                        continue;
                    }
                    if let Err(error) = sender.blocking_send(event) {
                        warn!(%error, "input channel closed");
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Puts the terminal into raw mode and enters the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restores terminal settings and leaves the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected.
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.is_press() => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(columns, rows) => {
            app.update(&Msg::Resize(columns, rows));
            Vec::new()
        }
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Applies effects. Returns `false` once the visitor asked to quit.
fn process_effects(app: &mut App, effects: Vec<Effect>, transport: &Arc<dyn ContactTransport>, deliveries: &mut FuturesUnordered<Delivery>) -> bool {
    let mut keep_running = true;
    for effect in effects {
        match effect {
            Effect::NavigateTo(section) => {
                app.update(&Msg::Navigate(section));
            }
            Effect::SubmitContact(message) => {
                let transport = Arc::clone(transport);
                deliveries.push(tokio::task::spawn_blocking(move || transport.submit(&message)));
            }
            Effect::Quit => keep_running = false,
        }
    }
    keep_running
}

fn interval(period: Duration) -> time::Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Sets up the terminal, runs the event loop until the visitor quits, then
/// restores the terminal and releases every section subscription.
pub async fn run_app(config: SiteConfig, preferences: Arc<UserPreferences>, transport: Arc<dyn ContactTransport>) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut last_size = crossterm::terminal::size().ok();
    let mut app = App::new(&config, preferences, last_size.unwrap_or((80, 24)));
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &transport, &mut input_receiver, &mut last_size).await;

    app.teardown();
    let cleanup = cleanup_terminal(&mut terminal);
    info!("site closed");
    result.and(cleanup)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    transport: &Arc<dyn ContactTransport>,
    input_receiver: &mut mpsc::Receiver<Event>,
    last_size: &mut Option<(u16, u16)>,
) -> Result<()> {
    let mut deliveries: FuturesUnordered<Delivery> = FuturesUnordered::new();
    let mut current_interval = IDLE_INTERVAL;
    let mut ticker = interval(current_interval);
    let mut last_tick = Instant::now();

    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.is_animating() { FRAME_INTERVAL } else { IDLE_INTERVAL };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = interval(current_interval);
            last_tick = Instant::now();
        }

        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                handle_input_event(app, main_view, event)
            }

            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick);
                last_tick = now;
                app.update(&Msg::Tick(elapsed));
                Vec::new()
            }

            Some(joined) = deliveries.next(), if !deliveries.is_empty() => {
                let result = match joined {
                    Ok(delivery) => delivery.map_err(|error| error.to_string()),
                    Err(error) => Err(format!("delivery task failed: {error}")),
                };
                if let Err(reason) = &result {
                    warn!(%reason, "contact message not delivered");
                }
                app.update(&Msg::ContactDelivered(result));
                Vec::new()
            }

            _ = signal::ctrl_c() => { break; }
        };

        if !process_effects(app, effects, transport, &mut deliveries) {
            break;
        }

        // Some terminals drop resize notifications; compare sizes directly.
        if let Ok(size) = crossterm::terminal::size()
            && *last_size != Some(size)
        {
            *last_size = Some(size);
            app.update(&Msg::Resize(size.0, size.1));
        }

        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
