use crate::ui::mvi::Intent;

use super::state::Pane;

#[derive(Debug, Clone, Copy)]
pub enum RouterIntent {
    Next,
    Previous,
    Select(Pane),
}

impl Intent for RouterIntent {}
