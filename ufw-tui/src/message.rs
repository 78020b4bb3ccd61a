use ratatui::style::{Color, Style};

const SUCCESS_MARKER: &str = "success";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

impl MessageLevel {
    /// Anything that does not mention success is treated as an error.
    pub fn of(message: &str) -> Self {
        if message.to_lowercase().contains(SUCCESS_MARKER) {
            MessageLevel::Success
        } else {
            MessageLevel::Error
        }
    }

    pub fn style(&self) -> Style {
        match self {
            MessageLevel::Success => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }
}
