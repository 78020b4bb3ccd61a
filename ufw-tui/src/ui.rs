use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::Paragraph,
};

use crate::{app::App, message::MessageLevel};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;
pub const TOO_SMALL: &str = "Terminal too small! Min: 40x10";

const LIST_TOP: u16 = 3;

pub fn header_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

pub fn selection_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

/// Writes `text` on row `y` from column `x`, clipped to `width` cells and
/// to the frame.
fn put(frame: &mut Frame, x: u16, y: u16, width: u16, text: &str, style: Style) {
    let area = frame.area();
    if x >= area.width || y >= area.height {
        return;
    }
    let width = width.min(area.width - x);
    if width == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(text).style(style),
        Rect::new(area.x + x, area.y + y, width, 1),
    );
}

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
        put(frame, 0, 0, area.width, TOO_SMALL, Style::default());
        return;
    }

    let (width, height) = (area.width, area.height);
    let divider = width / 2;
    // rows from here on are kept for the message and the footer
    let list_bottom = height - 3;

    // Header
    let header = format!(" UFW TUI Manager - Status: {} ", app.snapshot.status);
    put(frame, 0, 0, width, &header, header_style());

    // Divider
    for y in 1..=list_bottom {
        put(frame, divider, y, 1, symbols::line::VERTICAL, Style::default());
    }

    render_commands(app, frame, divider, list_bottom);
    render_data(app, frame, divider, width, list_bottom);

    // Footer
    let footer = format!(
        " F1:Help F5:Refresh F10:Quit | View: {} ",
        app.view.kind.name().to_uppercase()
    );
    put(frame, 0, height - 1, width, &footer, header_style());

    if let Some(message) = &app.message {
        let level = MessageLevel::of(message);
        put(
            frame,
            2,
            height - 2,
            width.saturating_sub(3),
            message,
            level.style(),
        );
    }

    if let Some(prompt) = &app.prompt {
        prompt.render(frame);
    }

    if app.show_help {
        app.help.render(frame);
    }
}

fn render_commands(app: &App, frame: &mut Frame, divider: u16, list_bottom: u16) {
    put(frame, 2, 1, divider.saturating_sub(3), "COMMANDS:", Style::default());

    let panel_width = divider.saturating_sub(2);
    let mut y = LIST_TOP;
    let mut index = 0;

    for entry in app.menu.entries() {
        if y >= list_bottom {
            break;
        }

        if !entry.is_separator() {
            let label = entry.label();
            if index == app.view.left_selection && app.view.focus_left {
                put(
                    frame,
                    1,
                    y,
                    panel_width,
                    &format!(" {} ", label),
                    selection_style(),
                );
            } else {
                put(frame, 2, y, panel_width.saturating_sub(1), label, Style::default());
            }
            index += 1;
        }
        y += 1;
    }
}

fn render_data(app: &App, frame: &mut Frame, divider: u16, width: u16, list_bottom: u16) {
    let start = divider + 2;
    let panel_width = width.saturating_sub(start + 2);
    if panel_width == 0 {
        return;
    }

    let kind = app.view.kind;
    put(frame, start, 1, panel_width, kind.title(), Style::default());

    if app.snapshot.is_empty(kind) {
        put(
            frame,
            start,
            LIST_TOP,
            panel_width,
            kind.placeholder(),
            Style::default(),
        );
        return;
    }

    let rows = app.snapshot.rows(kind);
    for (index, (row, y)) in rows.iter().zip(LIST_TOP..list_bottom).enumerate() {
        if index == app.view.right_selection && !app.view.focus_left {
            put(
                frame,
                start - 1,
                y,
                panel_width,
                &format!(" {} ", row),
                selection_style(),
            );
        } else {
            put(
                frame,
                start,
                y,
                panel_width.saturating_sub(1),
                row,
                Style::default(),
            );
        }
    }
}
