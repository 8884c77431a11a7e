//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use purrfect::ui::app::App;
use purrfect::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 50;

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Draw `app` onto an in-memory terminal and return the resulting buffer.
pub fn render(app: &App) -> Buffer {
    render_sized(app, WIDTH, HEIGHT)
}

pub fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Write `body` to `config.toml` in a fresh temp dir.
pub fn temp_config(body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).expect("Failed to create config file");
    file.write_all(body.as_bytes())
        .expect("Failed to write config file");
    (temp_dir, path)
}
