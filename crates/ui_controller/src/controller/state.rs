//! Visibility state machine for the exclusive page regions.

use crate::page::Region;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Results {
        steps: String,
        encouragement: String,
    },
    Error(String),
    LoginPrompt(String),
}

impl UiState {
    /// The exclusive region this state occupies, `None` for `Idle`.
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(Region::Loading),
            Self::Results { .. } => Some(Region::Results),
            Self::Error(_) => Some(Region::Error),
            Self::LoginPrompt(_) => Some(Region::LoginPrompt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Results { .. } => "results",
            Self::Error(_) => "error",
            Self::LoginPrompt(_) => "login_prompt",
        }
    }
}
