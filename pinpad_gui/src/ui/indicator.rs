//! Status region and dot indicator

use iced::widget::{container, row, text, Row};
use iced::{Alignment, Color, Element, Length, Theme};
use pinpad_core::{Dot, PinPadOptions, StatusRegion};

use super::pin_pad::Message;

/// Color of the dots while the host is verifying
const MUTED_DOT: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Render the one status element: spinner, prompt, success or error
pub fn view_status_region(region: &StatusRegion, spinner: char) -> Element<'static, Message> {
    let content: Element<'static, Message> = match region {
        StatusRegion::Spinner => text(spinner.to_string()).size(24).into(),
        StatusRegion::Success(message) | StatusRegion::Prompt(message) => {
            text(message.clone()).size(22).into()
        }
        StatusRegion::Error(message) => text(message.clone()).size(22).style(text::danger).into(),
    };

    // Fixed height so switching messages doesn't move the keypad
    container(content)
        .height(Length::Fixed(32.0))
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

/// One label per dot, in order
pub fn dot_labels(dots: &[Dot]) -> Vec<String> {
    dots.iter().map(|dot| dot.glyph().to_string()).collect()
}

/// Dot color for the current theme
pub fn dot_color(muted: bool, theme: &Theme) -> Color {
    if muted {
        MUTED_DOT
    } else {
        theme.palette().text
    }
}

/// Render the dot row
pub fn view_dots(dots: &[Dot], muted: bool, options: &PinPadOptions) -> Element<'static, Message> {
    let mut dots_row: Row<'static, Message> = row![]
        .spacing(options.dot_spacing)
        .align_y(Alignment::Center);

    for label in dot_labels(dots) {
        dots_row = dots_row.push(text(label).size(options.dot_size).style(move |theme: &Theme| text::Style {
            color: Some(dot_color(muted, theme)),
        }));
    }

    dots_row.into()
}
