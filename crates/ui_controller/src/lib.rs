//! Client-side controller for the task decomposer page: validates input,
//! calls `/decompose`, and keeps the page's exclusive regions consistent.

pub mod controller;
pub mod page;
pub mod presentation;
pub mod stash;

pub use controller::{
    outcome::{BreakdownOutcome, SubmitOutcome},
    state::UiState,
    ControllerContext, UiController,
};
pub use page::{Fade, PageView, Region, TextSlot};
pub use presentation::{Messages, PresentationSettings};
pub use stash::{FileStash, MemoryStash, Stash, StashError};
