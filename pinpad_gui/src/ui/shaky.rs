//! Shake wrapper
//!
//! Iced has no translate modifier, so the offset is applied by splitting the
//! free width around the content between two `FillPortion` spacers. Fill
//! children are laid out after the content, so the content always keeps its
//! natural width; only the leftover space moves from one side to the other.
//! At rest both portions are equal and the content is centered.

use iced::widget::{row, Space};
use iced::{Alignment, Element, Length};

/// Offset, in logical pixels, that shifts the content across the whole free space
pub const SHAKE_REACH: f32 = 200.0;

/// Sum of the two spacer portions
const PORTION_SCALE: u16 = 1000;

/// Spacer portions `(left, right)` for an offset.
///
/// Both portions stay at least 1 so neither spacer collapses into a
/// shrink-sized widget.
pub fn spacer_portions(offset: f32) -> (u16, u16) {
    let fraction = if offset.is_finite() {
        (offset / SHAKE_REACH).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let half = f32::from(PORTION_SCALE) / 2.0;
    let left = (half * (1.0 + fraction)).round() as u16;
    let left = left.clamp(1, PORTION_SCALE - 1);
    (left, PORTION_SCALE - left)
}

/// Left edge and width of content `content_width` wide inside `available`
/// pixels, as the row lays it out for `offset`.
pub fn content_span(available: f32, content_width: f32, offset: f32) -> (f32, f32) {
    let width = content_width.min(available);
    let free = (available - width).max(0.0);
    let (left, right) = spacer_portions(offset);
    let x = free * f32::from(left) / f32::from(left + right);
    (x, width)
}

/// Wrap `content`, shifted horizontally by `offset` logical pixels
pub fn shaky<'a, Message: 'a>(content: impl Into<Element<'a, Message>>, offset: f32) -> Element<'a, Message> {
    let (left, right) = spacer_portions(offset);

    row![
        Space::new().width(Length::FillPortion(left)),
        content.into(),
        Space::new().width(Length::FillPortion(right)),
    ]
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .into()
}
