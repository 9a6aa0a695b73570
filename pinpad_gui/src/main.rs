//! # PinPad GUI Demo
//!
//! Hosts a [`PinPadWidget`] the way an application would: completed codes go to
//! a validator (here a demo secret behind a simulated delay) and the verdict is
//! fed back as the pad's status. Buttons above the pad force each verdict, and
//! the physical keyboard types digits and Backspace.
//!
//! Usage: `pinpad_gui [options.json]`. The secret comes from `PINPAD_SECRET`
//! (default `1234`).

use std::path::Path;
use std::time::Instant;

use iced::widget::{button, column, container, row, text, Space};
use iced::{keyboard, Alignment, Element, Length, Padding, Subscription, Task};
use pinpad_core::verifier::VERIFY_DELAY;
use pinpad_core::{DemoVerifier, PinPadOptions, ValidationStatus};
use pinpad_gui::ui::pin_pad::key_from_keyboard;
use pinpad_gui::{PadAction, PadMessage, PinPadWidget};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone)]
enum Message {
    Pad(PadMessage),
    KeyPressed(keyboard::Key),
    /// Verdict for a verification attempt
    Verified { attempt: u64, status: ValidationStatus },
    ForceStatus(ValidationStatus),
    Reset,
    Frame(Instant),
}

struct App {
    pad: PinPadWidget,
    verifier: DemoVerifier,
    /// Increments per completed code so late verdicts can be discarded
    attempt: u64,
}

impl App {
    fn new(pad: PinPadWidget, verifier: DemoVerifier) -> (Self, Task<Message>) {
        (
            Self {
                pad,
                verifier,
                attempt: 0,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        format!("PinPad - {}", self.pad.status())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pad(pad_message) => match self.pad.update(pad_message) {
                PadAction::Completed(code) => {
                    self.attempt += 1;
                    self.pad.set_status(ValidationStatus::Verifying, Instant::now());
                    tracing::info!(attempt = self.attempt, "pin complete, verifying");

                    let attempt = self.attempt;
                    let verifier = self.verifier.clone();
                    Task::perform(
                        async move {
                            tokio::time::sleep(VERIFY_DELAY).await;
                            verifier.verify(&code)
                        },
                        move |status| Message::Verified { attempt, status },
                    )
                }
                PadAction::None => Task::none(),
            },
            Message::KeyPressed(key) => match key_from_keyboard(&key) {
                Some(key) => self.update(Message::Pad(PadMessage::KeyPressed(key))),
                None => Task::none(),
            },
            Message::Verified { attempt, status } => {
                if attempt == self.attempt && self.pad.status() == ValidationStatus::Verifying {
                    tracing::info!(attempt, %status, "verification finished");
                    self.pad.set_status(status, Instant::now());
                } else {
                    tracing::debug!(attempt, "discarding stale verdict");
                }
                Task::none()
            }
            Message::ForceStatus(status) => {
                // A forced verdict supersedes any verification in flight
                self.attempt += 1;
                self.pad.set_status(status, Instant::now());
                Task::none()
            }
            Message::Reset => {
                self.attempt += 1;
                self.pad.reset();
                self.pad.set_status(ValidationStatus::Idle, Instant::now());
                Task::none()
            }
            Message::Frame(now) => {
                self.pad.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button(text("PIN OK").size(12))
                .on_press(Message::ForceStatus(ValidationStatus::Valid))
                .padding(Padding::from([6, 16]))
                .style(button::primary),
            button(text("PIN Wrong").size(12))
                .on_press(Message::ForceStatus(ValidationStatus::Invalid))
                .padding(Padding::from([6, 16]))
                .style(button::danger),
            Space::new().width(Length::Fill),
            button(text("Reset").size(12))
                .on_press(Message::Reset)
                .padding(Padding::from([6, 16]))
                .style(button::secondary),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let pad = container(self.pad.view(Instant::now()).map(Message::Pad))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center);

        column![text("Pin Code Input").size(20), controls, pad]
            .spacing(12)
            .padding(16)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
            _ => None,
        });

        // Frames only while something moves (shake or spinner)
        let frames_sub = if self.pad.needs_frames(Instant::now()) {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, frames_sub])
    }
}

fn load_options() -> anyhow::Result<PinPadOptions> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = PinPadOptions::load(Path::new(&path))?;
            tracing::info!(path = %path, "loaded options");
            Ok(options)
        }
        None => Ok(PinPadOptions::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env().add_directive("pinpad_gui=info".parse()?))
        .init();

    let options = load_options()?;
    let verifier = DemoVerifier::from_env();
    if !verifier.is_reachable(&options) {
        tracing::warn!(
            max_length = options.max_length,
            "demo secret can't be entered with this PIN length; every attempt will be rejected"
        );
    }

    // Validate before the window opens so config errors reach the terminal
    let pad = PinPadWidget::new(options)?;

    iced::application(
        move || App::new(pad.clone(), verifier.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .subscription(App::subscription)
    .window_size(iced::Size::new(520.0, 680.0))
    .run()?;

    Ok(())
}
