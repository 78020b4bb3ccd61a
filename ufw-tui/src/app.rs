use log::debug;
use ufw_common::Rule;

use crate::{
    help::Help,
    menu::CommandMenu,
    prompt::Prompt,
    runner::Runner,
    snapshot::DataSnapshot,
    view::{Motion, ViewKind, ViewState},
};

pub type AppResult<T> = anyhow::Result<T>;

/// The whole state of the dashboard, owned by the main loop.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view: ViewState,
    pub menu: CommandMenu,
    pub snapshot: DataSnapshot,
    pub message: Option<String>,
    pub prompt: Option<Prompt>,
    pub help: Help,
    pub show_help: bool,
}

impl App {
    pub fn new(snapshot: DataSnapshot) -> Self {
        Self {
            running: true,
            view: ViewState::default(),
            menu: CommandMenu::default(),
            snapshot,
            message: None,
            prompt: None,
            help: Help::new(),
            show_help: false,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Replaces the snapshot with a fresh one.
    pub fn refresh(&mut self, runner: &dyn Runner) {
        self.snapshot = DataSnapshot::fetch(runner);
    }

    pub fn change_view(&mut self, kind: ViewKind) {
        self.view.set_view(kind);
        self.notify(format!("View changed: {}", kind.name()));
    }

    pub fn move_selection(&mut self, motion: Motion) {
        let menu_len = self.menu.selectable_count();
        let data_len = self.snapshot.len(self.view.kind);
        self.view.move_selection(motion, menu_len, data_len);
    }

    pub fn invoke_selected(&mut self, runner: &dyn Runner) {
        match self.menu.action_at(self.view.left_selection) {
            Ok(action) => self.perform(action, runner),
            Err(e) => debug!("{}", e),
        }
    }

    /// The rule under the right selection, only while rules are shown.
    pub fn selected_rule(&self) -> Option<&Rule> {
        if self.view.kind != ViewKind::Rules {
            return None;
        }
        self.snapshot.rules.get(self.view.right_selection)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
