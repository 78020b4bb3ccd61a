use crate::{action::Action, view::ViewKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu selection {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: &'static str, action: Action },
    Separator,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Item { label, .. } => *label,
            MenuEntry::Separator => "",
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            MenuEntry::Item { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }
}

/// The left panel commands. Separators occupy a row on screen but are
/// never addressable by a selection index.
#[derive(Debug, Clone)]
pub struct CommandMenu {
    entries: Vec<MenuEntry>,
}

impl Default for CommandMenu {
    fn default() -> Self {
        use MenuEntry::{Item, Separator};

        Self::new(vec![
            Item {
                label: "Add ALLOW rule",
                action: Action::AddAllow,
            },
            Item {
                label: "Add DENY rule",
                action: Action::AddDeny,
            },
            Item {
                label: "Delete rule",
                action: Action::DeleteSelected,
            },
            Separator,
            Item {
                label: "Enable/Disable UFW",
                action: Action::ToggleFirewall,
            },
            Item {
                label: "Reset UFW",
                action: Action::ResetFirewall,
            },
            Separator,
            Item {
                label: "View: Rules",
                action: Action::SetView(ViewKind::Rules),
            },
            Item {
                label: "View: Applications",
                action: Action::SetView(ViewKind::Applications),
            },
            Item {
                label: "View: Listening ports",
                action: Action::SetView(ViewKind::ListeningPorts),
            },
            Separator,
            Item {
                label: "Refresh data",
                action: Action::Refresh,
            },
            Item {
                label: "Exit",
                action: Action::Quit,
            },
        ])
    }
}

impl CommandMenu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selectable(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|entry| !entry.is_separator())
    }

    pub fn selectable_count(&self) -> usize {
        self.selectable().count()
    }

    pub fn action_at(&self, index: usize) -> Result<Action, MenuError> {
        self.selectable()
            .nth(index)
            .and_then(MenuEntry::action)
            .ok_or(MenuError::OutOfRange {
                index,
                len: self.selectable_count(),
            })
    }
}
