//! Terminal host: owns the pad, plays the validator, runs the event loop

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use pinpad_core::verifier::VERIFY_DELAY;
use pinpad_core::{DemoVerifier, Key, PinEvent, PinPad, PinPadOptions, PinResult, ValidationStatus};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::ui;

/// Redraw interval; short enough for a smooth shake
const FRAME: Duration = Duration::from_millis(16);

/// A verdict waiting for its simulated round trip
#[derive(Debug, Clone, Copy)]
struct PendingVerdict {
    due: Instant,
    status: ValidationStatus,
}

pub struct App {
    pub pad: PinPad,
    verifier: DemoVerifier,
    pending: Option<PendingVerdict>,
    pub verifying_since: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: PinPadOptions, verifier: DemoVerifier) -> PinResult<Self> {
        Ok(Self {
            pad: PinPad::new(options)?,
            verifier,
            pending: None,
            verifying_since: Instant::now(),
            should_quit: false,
        })
    }

    /// Draw and handle input until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|frame| ui::draw(frame, self, now))?;

            if event::poll(FRAME)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the shake and deliver a verdict whose delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.pad.tick(now);

        if let Some(pending) = self.pending {
            if now >= pending.due {
                self.pending = None;
                tracing::info!(status = %pending.status, "verification finished");
                self.pad.set_status(pending.status, now);
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Backspace => {
                self.pad.press(Key::Clear);
            }
            KeyCode::Char('v') => self.force(ValidationStatus::Valid, now),
            KeyCode::Char('x') => self.force(ValidationStatus::Invalid, now),
            KeyCode::Char('r') => {
                self.pad.reset();
                self.force(ValidationStatus::Idle, now);
            }
            KeyCode::Char(c) => {
                if let Some(key) = Key::from_char(c) {
                    if let PinEvent::Completed(code) = self.pad.press(key) {
                        self.submit(&code, now);
                    }
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self, code: &str, now: Instant) {
        tracing::info!("pin complete, verifying");
        self.verifying_since = now;
        self.pad.set_status(ValidationStatus::Verifying, now);
        self.pending = Some(PendingVerdict {
            due: now + VERIFY_DELAY,
            status: self.verifier.verify(code),
        });
    }

    /// Apply a status directly, dropping any verdict still in flight
    fn force(&mut self, status: ValidationStatus, now: Instant) {
        self.pending = None;
        self.pad.set_status(status, now);
    }
}
