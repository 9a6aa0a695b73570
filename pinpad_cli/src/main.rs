//! # PinPad CLI Application
//!
//! Terminal rendition of the PIN pad. Digits and Backspace type, the demo
//! validator answers after a short delay, and a rejected PIN shakes the dot row.
//!
//! Usage: `pinpad_cli [options.json]`. The secret comes from `PINPAD_SECRET`
//! (default `1234`). Logs go to the file named by `PINPAD_LOG`, if set, so they
//! don't draw over the screen.

use std::io;
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pinpad_core::{DemoVerifier, PinPadOptions};
use ratatui::prelude::*;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod ui;

use app::App;

/// Environment variable naming the log file
const LOG_ENV: &str = "PINPAD_LOG";

fn init_logging() -> Result<()> {
    let writer = match std::env::var(LOG_ENV) {
        Ok(path) => BoxMakeWriter::new(Mutex::new(std::fs::File::create(path)?)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(false).with_writer(writer))
        .with(EnvFilter::from_default_env().add_directive("pinpad_cli=info".parse()?))
        .init();
    Ok(())
}

fn load_options() -> Result<PinPadOptions> {
    match std::env::args().nth(1) {
        Some(path) => Ok(PinPadOptions::load(Path::new(&path))?),
        None => Ok(PinPadOptions::default()),
    }
}

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    init_logging()?;

    // Config errors are reported before the terminal switches screens
    let options = load_options()?;
    let verifier = DemoVerifier::from_env();
    if !verifier.is_reachable(&options) {
        eprintln!("Warning: the demo secret can't be entered with a {}-digit PIN", options.max_length);
    }
    let mut app = App::new(options, verifier)?;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}
