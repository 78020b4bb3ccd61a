use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Cell, Clear, Padding, Row, Table, TableState},
};

#[derive(Debug, Clone, Default)]
pub struct Help {
    state: TableState,
    keys: Vec<(Cell<'static>, &'static str)>,
}

impl Help {
    pub fn new() -> Self {
        let mut state = TableState::new().with_offset(0);
        state.select(Some(0));

        Self {
            state,
            keys: vec![
                (Cell::from("Up / Down").bold(), "Move the selection"),
                (Cell::from("Left / Right").bold(), "Focus commands / data"),
                (Cell::from("Enter").bold(), "Run the selected command"),
                (Cell::from("1").bold(), "Show rules"),
                (Cell::from("2").bold(), "Show applications"),
                (Cell::from("3").bold(), "Show listening ports"),
                (Cell::from("F5").bold(), "Refresh data"),
                (Cell::from("F1 or ?").bold(), "Show help"),
                (Cell::from("q, F10 or ctrl+c").bold(), "Quit"),
                (Cell::from(""), ""),
                (Cell::from("## Prompts").bold().yellow(), ""),
                (Cell::from("Enter").bold(), "Submit"),
                (Cell::from("Esc").bold(), "Cancel"),
                (Cell::from("y").bold(), "Confirm delete or reset"),
            ],
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or_default()
    }

    pub fn scroll_down(&mut self) {
        let i = match self.state.selected() {
            Some(i) => (i + 1).min(self.keys.len().saturating_sub(1)),
            None => 0,
        };
        *self.state.offset_mut() = i;
        self.state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        *self.state.offset_mut() = i;
        self.state.select(Some(i));
    }

    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(self.keys.len() as u16 + 6),
                Constraint::Fill(1),
            ])
            .flex(Flex::SpaceBetween)
            .split(frame.area());

        let block = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(60),
                Constraint::Fill(1),
            ])
            .flex(Flex::SpaceBetween)
            .split(layout[1])[1];

        let widths = [Constraint::Length(20), Constraint::Fill(1)];
        let rows = self.keys.iter().map(|key| {
            Row::new(vec![key.0.to_owned(), key.1.into()]).style(Style::default().fg(Color::White))
        });

        let table = Table::new(rows, widths).block(
            Block::default()
                .padding(Padding::uniform(2))
                .title(" Help ")
                .title_style(Style::default().bold().fg(Color::Green))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .style(Style::default())
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Green)),
        );

        let mut state = self.state.clone();
        frame.render_widget(Clear, block);
        frame.render_stateful_widget(table, block, &mut state);
    }
}
