//! PIN pad screen

use std::time::Instant;

use pinpad_core::view::spinner_frame;
use pinpad_core::{Key, PinPad, StatusRegion, KEYPAD_ROWS};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Logical pixels per terminal column when converting the shake offset
const PIXELS_PER_COLUMN: f32 = 10.0;

/// Columns kept free on each side of the dot row for the shake
const SHAKE_SLACK_COLUMNS: u16 = 20;

/// Draw the pad screen
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let pad = &app.pad;

    let block = Block::default()
        .title(" Pin Code Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Status region
            Constraint::Length(2), // Dots
            Constraint::Length(1), // Spacer
            Constraint::Length(8), // Keypad
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let spinner = spinner_frame(now.saturating_duration_since(app.verifying_since));
    frame.render_widget(status_line(&pad.status_region(), spinner), chunks[0]);

    let dots_area = shaken(chunks[1], pad.shake_offset(now));
    frame.render_widget(dots_line(pad), dots_area);

    frame.render_widget(keypad(pad), chunks[3]);

    let help = Paragraph::new("[0-9] Digit  [Backspace] Clear  [v] OK  [x] Wrong  [r] Reset  [Esc] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn status_line(region: &StatusRegion, spinner: char) -> Paragraph<'static> {
    let line = match region {
        StatusRegion::Spinner => Line::from(spinner.to_string()),
        StatusRegion::Success(message) => {
            Line::from(Span::styled(message.clone(), Style::default().add_modifier(Modifier::BOLD)))
        }
        StatusRegion::Prompt(message) => Line::from(message.clone()),
        StatusRegion::Error(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn dots_line(pad: &PinPad) -> Paragraph<'static> {
    let glyphs: Vec<String> = pad.dots().iter().map(|d| d.glyph().to_string()).collect();
    let style = if pad.dots_muted() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Paragraph::new(glyphs.join(" "))
        .style(style)
        .alignment(Alignment::Center)
}

/// Shift `area` sideways by the shake offset, trading columns between its two margins
fn shaken(area: Rect, offset: f32) -> Rect {
    let slack = SHAKE_SLACK_COLUMNS.min(area.width / 4);
    if slack == 0 || !offset.is_finite() {
        return area;
    }

    let columns = (offset / PIXELS_PER_COLUMN)
        .round()
        .clamp(-(slack as f32), slack as f32) as i32;
    let x = (area.x + slack) as i32 + columns;

    Rect {
        x: x.max(area.x as i32) as u16,
        width: area.width - 2 * slack,
        ..area
    }
}

fn keypad(pad: &PinPad) -> Paragraph<'static> {
    let enabled = pad.is_input_enabled();
    let key_style = if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let clear_label = pad.options().clear_button_text.clone();

    let mut lines = Vec::with_capacity(KEYPAD_ROWS.len() * 2);
    for keys in KEYPAD_ROWS.iter() {
        let mut spans = Vec::with_capacity(keys.len() * 2);
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let label = match key {
                Key::Digit(_) => format!("[ {} ]", key.digit_label().unwrap_or_default()),
                Key::Clear => format!("{:^5}", clear_label),
                Key::Blank => " ".repeat(5),
            };
            spans.push(Span::styled(label, key_style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    Paragraph::new(lines).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinpad_core::{DemoVerifier, PinPadOptions, ValidationStatus};
    use ratatui::backend::TestBackend;

    fn render(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(PinPadOptions::default(), DemoVerifier::new("1234")).unwrap()
    }

    #[test]
    fn test_idle_screen() {
        let app = app();
        let screen = render(&app, Instant::now());
        assert!(screen.contains("Enter your pin code"));
        assert!(screen.contains("○ ○ ○ ○"));
        assert!(screen.contains("[ 5 ]"));
    }

    #[test]
    fn test_dots_fill_as_digits_arrive() {
        let mut app = app();
        app.pad.press_digit(1);
        app.pad.press_digit(2);
        let screen = render(&app, Instant::now());
        assert!(screen.contains("● ● ○ ○"));
    }

    #[test]
    fn test_invalid_message() {
        let now = Instant::now();
        let mut app = app();
        app.pad.set_status(ValidationStatus::Invalid, now);
        let screen = render(&app, now);
        assert!(screen.contains("Wrong pin code !"));
        assert!(!screen.contains("Enter your pin code"));
    }

    #[test]
    fn test_custom_messages() {
        let now = Instant::now();
        let options = PinPadOptions::default().with_messages("Code?", "Nope", "Welcome", "Del");
        let mut app = App::new(options, DemoVerifier::new("1234")).unwrap();

        let screen = render(&app, now);
        assert!(screen.contains("Code?"));
        assert!(screen.contains("Del"));

        app.pad.set_status(ValidationStatus::Invalid, now);
        assert!(render(&app, now).contains("Nope"));

        app.pad.set_status(ValidationStatus::Valid, now);
        assert!(render(&app, now).contains("Welcome"));
    }

    #[test]
    fn test_shaken_area_moves_and_clamps() {
        let area = Rect::new(0, 0, 80, 2);
        assert_eq!(shaken(area, 0.0).x, 20);
        assert_eq!(shaken(area, 100.0).x, 30);
        assert_eq!(shaken(area, -1000.0).x, 0);
        assert_eq!(shaken(area, 0.0).width, 40);
    }
}
