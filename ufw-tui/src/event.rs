use std::{io, thread};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use log::error;

use crate::app::AppResult;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a helper thread and hands them over one at a
/// time through `next`. The reader thread owns the only sender, so the
/// channel closes as soon as the thread stops.
#[derive(Debug)]
pub struct EventHandler {
    receiver: kanal::Receiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_source(event::read)
    }

    pub fn with_source<F>(mut read: F) -> Self
    where
        F: FnMut() -> io::Result<CrosstermEvent> + Send + 'static,
    {
        let (sender, receiver) = kanal::unbounded();
        thread::spawn(move || {
            loop {
                let sent = match read() {
                    Ok(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => {
                        sender.send(Event::Key(e))
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        error!("unable to read terminal event: {}", e);
                        break;
                    }
                };

                if sent.is_err() {
                    break;
                }
            }
        });
        Self { receiver }
    }

    /// Blocks until the next event. Fails once the reader thread is gone.
    pub fn next(&self) -> AppResult<Event> {
        Ok(self.receiver.recv()?)
    }
}
