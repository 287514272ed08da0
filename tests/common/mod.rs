//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use buildcost_engine::{
    App, AppSettings, Collaborators, NoShare, QuoteFilePrinter, ShareError, SharePayload,
    ShareTarget,
};
use buildcost_tui::{apply_key, draw};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

pub const SCREEN_WIDTH: u16 = 100;
pub const SCREEN_HEIGHT: u16 = 32;

/// Share target that records every payload it is handed.
#[derive(Clone, Default)]
pub struct RecordingShare {
    pub shared: Rc<RefCell<Vec<SharePayload>>>,
}

impl ShareTarget for RecordingShare {
    fn destination(&self) -> &'static str {
        "the clipboard"
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        self.shared.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// App with no share capability, printing quotes into `print_dir`.
pub fn app_printing_to(settings: AppSettings, print_dir: &Path) -> App {
    App::new(
        settings,
        Collaborators {
            share: Box::new(NoShare),
            print: Box::new(QuoteFilePrinter::new(print_dir)),
        },
    )
}

pub fn app_with_recording_share(
    settings: AppSettings,
    print_dir: &Path,
) -> (App, Rc<RefCell<Vec<SharePayload>>>) {
    let share = RecordingShare::default();
    let shared = Rc::clone(&share.shared);
    let app = App::new(
        settings,
        Collaborators {
            share: Box::new(share),
            print: Box::new(QuoteFilePrinter::new(print_dir)),
        },
    );
    (app, shared)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    apply_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Render one frame and return the screen as newline-separated rows.
pub fn render(app: &App) -> String {
    render_sized(app, SCREEN_WIDTH, SCREEN_HEIGHT)
}

pub fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
