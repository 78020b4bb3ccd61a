use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use tui_input::{Input, InputRequest};

use crate::action::RuleVerb;

const MAX_WIDTH: u16 = 60;
const HEIGHT: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    AddRule(RuleVerb),
    ConfirmDelete { num: String },
    ConfirmReset,
}

impl PromptKind {
    pub fn question(&self) -> String {
        match self {
            PromptKind::AddRule(RuleVerb::Allow) => {
                "Enter ALLOW rule (e.g., '22' or 'ssh'): ".to_string()
            }
            PromptKind::AddRule(RuleVerb::Deny) => {
                "Enter DENY rule (e.g., '80' or 'from 192.168.1.0/24'): ".to_string()
            }
            PromptKind::ConfirmDelete { num } => format!("Delete rule {}? (y/N): ", num),
            PromptKind::ConfirmReset => "WARNING: Complete UFW reset? (y/N): ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Cancelled,
    Submitted(String),
}

/// A single line text prompt drawn over the panels.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    input: Input,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: Input::default(),
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) -> PromptOutcome {
        let request = match key_event.code {
            KeyCode::Esc => return PromptOutcome::Cancelled,
            KeyCode::Enter => {
                return PromptOutcome::Submitted(self.value().trim().to_string());
            }
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return PromptOutcome::Pending,
        };

        self.input.handle(request);
        PromptOutcome::Pending
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = HEIGHT.min(area.height);
        let block = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        let inner_width = block.width.saturating_sub(4) as usize;
        let scroll = self.input.visual_scroll(inner_width.saturating_sub(1));

        let text = vec![
            Line::from(self.kind.question()),
            Line::from(self.value().chars().skip(scroll).collect::<String>()),
        ];

        let paragraph = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().yellow())
                .padding(Padding::horizontal(1)),
        );

        frame.render_widget(Clear, block);
        frame.render_widget(paragraph, block);

        let cursor = (self.input.visual_cursor().saturating_sub(scroll)) as u16;
        if block.width > 4 && block.height > 3 {
            frame.set_cursor_position(Position::new(
                (block.x + 2 + cursor).min(block.right().saturating_sub(2)),
                block.y + 2,
            ));
        }
    }
}
