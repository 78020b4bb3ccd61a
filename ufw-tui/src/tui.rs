use std::{io, panic};

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{Terminal, backend::Backend};

use crate::{
    app::{App, AppResult},
    event::{Event, EventHandler},
    handler::handle_key_events,
    runner::Runner,
    ui,
};

/// Owns the terminal for the lifetime of the dashboard.
#[derive(Debug)]
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    events: EventHandler,
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    pub fn init(&mut self) -> AppResult<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            let _ = restore();
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Draws, waits for one event, applies it. Repeats until the app stops.
    /// A terminal resize needs no handling beyond the next draw.
    pub fn run(&mut self, app: &mut App, runner: &dyn Runner) -> AppResult<()> {
        while app.running {
            self.terminal.draw(|frame| ui::render(app, frame))?;
            match self.events.next()? {
                Event::Key(key_event) => handle_key_events(key_event, app, runner),
                Event::Resize(_, _) => {}
            }
        }
        Ok(())
    }

    pub fn exit(&mut self) -> AppResult<()> {
        restore()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
}
