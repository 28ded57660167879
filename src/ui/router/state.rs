use crate::ui::mvi::UiState;

/// Top-level panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Summarizer,
    About,
    Contact,
    Profile,
}

impl Pane {
    /// Panes in tab order.
    pub const ALL: [Pane; 4] = [Self::Summarizer, Self::About, Self::Contact, Self::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Self::Summarizer => "Summarize",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Profile => "Get To Know Me",
        }
    }

    /// Position in tab order.
    pub fn index(self) -> usize {
        match self {
            Self::Summarizer => 0,
            Self::About => 1,
            Self::Contact => 2,
            Self::Profile => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which pane is visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouterState {
    pub active: Pane,
}

impl UiState for RouterState {}

impl RouterState {
    pub fn is_active(&self, pane: Pane) -> bool {
        self.active == pane
    }
}
