//! Keypad grid
//!
//! Generated from [`KEYPAD_ROWS`]: digits render as outlined buttons, the clear
//! control as a text button, and the blank cell as an empty square.

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};
use pinpad_core::{Key, PinPadOptions, KEYPAD_ROWS};

use super::pin_pad::Message;

/// Render the keypad. Buttons have no press handler when `enabled` is false.
pub fn view_keypad(options: &PinPadOptions, enabled: bool) -> Element<'static, Message> {
    let mut grid: Column<'static, Message> = column![]
        .spacing(options.button_spacing)
        .align_x(Alignment::Center);

    for keys in KEYPAD_ROWS.iter() {
        let mut keys_row: Row<'static, Message> = row![]
            .spacing(options.button_spacing)
            .align_y(Alignment::Center);

        for key in keys {
            keys_row = keys_row.push(view_key(*key, options, enabled));
        }

        grid = grid.push(keys_row);
    }

    grid.into()
}

/// Message a key sends when pressed, if it is pressable at all
pub fn key_message(key: Key, enabled: bool) -> Option<Message> {
    match key {
        Key::Blank => None,
        Key::Digit(_) | Key::Clear => enabled.then_some(Message::KeyPressed(key)),
    }
}

fn view_key(key: Key, options: &PinPadOptions, enabled: bool) -> Element<'static, Message> {
    let size = options.button_size;
    let on_press = key_message(key, enabled);

    match key {
        Key::Digit(d) => button(container(text(d.to_string()).size(22)).center(Length::Fill))
            .on_press_maybe(on_press)
            .width(size)
            .height(size)
            .padding(0)
            .style(button::secondary)
            .into(),
        Key::Clear => button(
            container(text(options.clear_button_text.clone()).size(16)).center(Length::Fill),
        )
        .on_press_maybe(on_press)
        .width(size)
        .height(size)
        .padding(0)
        .style(button::text)
        .into(),
        Key::Blank => Space::new().width(size).height(size).into(),
    }
}
