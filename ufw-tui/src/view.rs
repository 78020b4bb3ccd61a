#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Rules,
    Applications,
    ListeningPorts,
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Rules => "rules",
            ViewKind::Applications => "apps",
            ViewKind::ListeningPorts => "listening",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Rules => "UFW RULES:",
            ViewKind::Applications => "APPLICATIONS:",
            ViewKind::ListeningPorts => "LISTENING PORTS:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ViewKind::Rules => "No rules configured",
            ViewKind::Applications => "No applications available",
            ViewKind::ListeningPorts => "No listening ports",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
}

impl Motion {
    /// Moves `index` one step inside `0..len`, saturating at both ends.
    /// A stale index past the end is pulled back in range.
    pub fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return index;
        }
        match self {
            Motion::Up => index.saturating_sub(1).min(len - 1),
            Motion::Down => index.saturating_add(1).min(len - 1),
        }
    }
}

/// Navigation state of the two panels.
///
/// `left_selection` indexes the selectable menu entries, `right_selection`
/// indexes the collection shown for `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub kind: ViewKind,
    pub left_selection: usize,
    pub right_selection: usize,
    pub focus_left: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            kind: ViewKind::Rules,
            left_selection: 0,
            right_selection: 0,
            focus_left: true,
        }
    }
}

impl ViewState {
    pub fn set_view(&mut self, kind: ViewKind) {
        self.kind = kind;
        self.right_selection = 0;
    }

    pub fn set_focus(&mut self, left: bool) {
        self.focus_left = left;
    }

    pub fn move_selection(&mut self, motion: Motion, menu_len: usize, data_len: usize) {
        if self.focus_left {
            self.left_selection = motion.apply(self.left_selection, menu_len);
        } else {
            self.right_selection = motion.apply(self.right_selection, data_len);
        }
    }
}
