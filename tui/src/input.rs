//! Input handling for the BuildCost TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::mpsc,
    task::{self, JoinHandle},
    time,
};
use tracing::debug;

use buildcost_engine::{App, FormField, View};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256;
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Unblock a reader stuck on a full channel before asking it to stop.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = time::timeout(SHUTDOWN_TIMEOUT, join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued terminal events into `app`. Returns `true` once quit was requested.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if apply_event(app, ev) {
            return Ok(true);
        }
    }

    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` once quit was requested.
pub fn apply_event(app: &mut App, ev: Event) -> bool {
    match ev {
        Event::Key(key) => apply_key(app, key),
        Event::Paste(text) => {
            apply_paste(app, &text);
            app.should_quit()
        }
        _ => app.should_quit(),
    }
}

/// Apply one key press. Returns `true` once quit was requested.
pub fn apply_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return app.should_quit();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c' | 'q')) {
            app.request_quit();
        }
        return app.should_quit();
    }

    if app.view() == View::Calculator {
        calculator_key(app, key);
    } else {
        page_key(app, key);
    }
    app.should_quit()
}

fn calculator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.adjust_focused(false),
        KeyCode::Right => app.adjust_focused(true),
        KeyCode::Enter => app.recalculate(),
        KeyCode::Esc => app.dismiss_notice(),
        KeyCode::Backspace if app.focus() == FormField::Area => {
            app.pop_area_char();
        }
        KeyCode::Delete if app.focus() == FormField::Area => app.clear_area(),
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => {
            if app.focus() == FormField::Area {
                app.push_area_char(ch);
            }
        }
        KeyCode::Char('s') => app.share(),
        KeyCode::Char('p') => app.print(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) => {
            if let Some(page) = View::from_shortcut(ch) {
                app.navigate(page);
            } else {
                debug!(?ch, "Unbound key");
            }
        }
        _ => {}
    }
}

fn page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.navigate(View::Calculator),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) => {
            if let Some(page) = View::from_shortcut(ch) {
                app.navigate(page);
            }
        }
        _ => {}
    }
}

fn apply_paste(app: &mut App, text: &str) {
    if app.view() != View::Calculator || app.focus() != FormField::Area {
        return;
    }
    let combined = format!("{}{}", app.form().area_text, text);
    app.set_area_text(&combined);
}
