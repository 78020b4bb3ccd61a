use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::App,
    prompt::PromptOutcome,
    runner::Runner,
    view::{Motion, ViewKind},
};

/// What a key press asks the main loop to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    Refresh,
    ChangeFocus(bool),
    Move(Motion),
    InvokeSelected,
    SetView(ViewKind),
    Help,
    None,
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn dispatch(key_event: KeyEvent) -> Effect {
    if is_interrupt(&key_event) {
        return Effect::Quit;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::F(10) => Effect::Quit,
        KeyCode::F(5) => Effect::Refresh,
        KeyCode::F(1) | KeyCode::Char('?') => Effect::Help,
        KeyCode::Up => Effect::Move(Motion::Up),
        KeyCode::Down => Effect::Move(Motion::Down),
        KeyCode::Left => Effect::ChangeFocus(true),
        KeyCode::Right => Effect::ChangeFocus(false),
        KeyCode::Enter => Effect::InvokeSelected,
        KeyCode::Char('1') => Effect::SetView(ViewKind::Rules),
        KeyCode::Char('2') => Effect::SetView(ViewKind::Applications),
        KeyCode::Char('3') => Effect::SetView(ViewKind::ListeningPorts),
        _ => Effect::None,
    }
}

impl App {
    pub fn apply(&mut self, effect: Effect, runner: &dyn Runner) {
        match effect {
            Effect::Quit => self.quit(),
            Effect::Refresh => {
                self.refresh(runner);
                self.notify("Data refreshed");
            }
            Effect::ChangeFocus(left) => self.view.set_focus(left),
            Effect::Move(motion) => self.move_selection(motion),
            Effect::InvokeSelected => self.invoke_selected(runner),
            Effect::SetView(kind) => self.change_view(kind),
            Effect::Help => self.show_help = true,
            Effect::None => {}
        }
    }
}

pub fn handle_key_events(key_event: KeyEvent, app: &mut App, runner: &dyn Runner) {
    // ctrl+c quits from anywhere, including an open prompt
    if is_interrupt(&key_event) {
        app.quit();
        return;
    }

    if app.show_help {
        match key_event.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => app.show_help = false,
            KeyCode::Up => app.help.scroll_up(),
            KeyCode::Down => app.help.scroll_down(),
            _ => {}
        }
        return;
    }

    if let Some(prompt) = &mut app.prompt {
        match prompt.handle_key(key_event) {
            PromptOutcome::Pending => {}
            PromptOutcome::Cancelled => app.prompt = None,
            PromptOutcome::Submitted(answer) => {
                if let Some(prompt) = app.prompt.take() {
                    app.submit_prompt(prompt.kind, &answer, runner);
                }
            }
        }
        return;
    }

    app.apply(dispatch(key_event), runner);
}
