//! Controller layer: user actions, state transitions and rendering.

pub mod outcome;
pub mod state;

use std::sync::Arc;

use client_core::DecomposeApi;
use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{TaskId, TaskItem, PENDING_TASK_STASH_KEY},
    protocol::DecomposeRequest,
};
use tracing::{debug, info, warn};

use crate::{
    page::{Fade, PageView, Region, TextSlot, EXCLUSIVE_REGIONS},
    presentation::PresentationSettings,
    stash::Stash,
};

use outcome::{resolve_response, BreakdownOutcome, SubmitOutcome};
use state::UiState;

/// Everything the controller needs from its surroundings, bound once at startup.
pub struct ControllerContext<P, S> {
    pub page: P,
    pub stash: S,
    pub api: Arc<dyn DecomposeApi>,
    pub presentation: PresentationSettings,
}

pub struct UiController<P, S> {
    page: P,
    stash: S,
    api: Arc<dyn DecomposeApi>,
    presentation: PresentationSettings,
    state: UiState,
    rng: StdRng,
}

impl<P: PageView, S: Stash> UiController<P, S> {
    pub fn new(ctx: ControllerContext<P, S>) -> Self {
        Self {
            page: ctx.page,
            stash: ctx.stash,
            api: ctx.api,
            presentation: ctx.presentation,
            state: UiState::Idle,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the congratulation picker's randomness with a fixed seed.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn stash(&self) -> &S {
        &self.stash
    }

    pub fn into_parts(self) -> (P, S) {
        (self.page, self.stash)
    }

    /// Primary action: validate the task input and ask the service to
    /// decompose it. At most one request is in flight because the
    /// controller is borrowed mutably for the whole call.
    pub async fn submit_task(&mut self) -> SubmitOutcome {
        if !self.page.is_logged_in() {
            debug!("submit: no login indicator on page");
            let message = self.presentation.messages.sign_in_required.clone();
            self.show(UiState::LoginPrompt(message));
            return SubmitOutcome::Unauthenticated;
        }

        let raw = self.page.task_input().unwrap_or_default();
        let Some(request) = DecomposeRequest::from_input(&raw) else {
            debug!("submit: empty task input");
            let message = self.presentation.messages.empty_task.clone();
            self.show(UiState::Error(message));
            return SubmitOutcome::ValidationFailed;
        };

        self.show(UiState::Loading);
        self.page.set_submit_enabled(false);

        let result = self.api.decompose(&request).await;
        let (next, outcome) = resolve_response(result, &self.presentation.messages);

        self.page.set_visible(Region::Loading, false);
        self.page.set_submit_enabled(true);
        self.show(next);

        info!(outcome = outcome.name(), "submit: finished");
        outcome
    }

    /// Marks a task row done and shows a random congratulation. A row that
    /// is already done is left alone.
    pub fn mark_task_done(&mut self, item: &mut TaskItem) -> Option<String> {
        if item.done {
            debug!(task_id = ?item.id, "done: task already marked");
            return None;
        }
        item.done = true;
        item.actions_visible = false;

        let message = self
            .presentation
            .pick_congratulation(item.display_title(), &mut self.rng)?;
        self.page.notify(&message);
        Some(message)
    }

    /// Carries a task title to the input page for decomposition.
    pub fn start_breakdown(
        &mut self,
        task_id: Option<&TaskId>,
        task_title: Option<&str>,
    ) -> BreakdownOutcome {
        let Some(title) = task_title.filter(|title| !title.is_empty()) else {
            warn!(?task_id, "breakdown: task has no title");
            let message = self.presentation.messages.missing_title.clone();
            self.page.notify(&message);
            return BreakdownOutcome::MissingTitle;
        };

        if let Err(err) = self.stash.set(PENDING_TASK_STASH_KEY, title) {
            warn!(?task_id, %err, "breakdown: could not stash task title");
            let message = self.presentation.messages.stash_failed.clone();
            self.page.notify(&message);
            return BreakdownOutcome::StashUnavailable;
        }

        info!(?task_id, "breakdown: stashed title, navigating to input page");
        self.page.navigate("/");
        BreakdownOutcome::Navigated
    }

    /// Page-ready hook: moves a stashed title into the task input once.
    pub fn on_load(&mut self) -> Option<String> {
        let title = self
            .stash
            .get(PENDING_TASK_STASH_KEY)
            .filter(|title| !title.is_empty())?;
        if self.page.task_input().is_none() {
            debug!("load: stashed title present but page has no task input");
            return None;
        }

        self.page.set_task_input(&title);
        if let Err(err) = self.stash.remove(PENDING_TASK_STASH_KEY) {
            warn!(%err, "load: could not clear stashed title");
        }
        debug!("load: task input populated from stash");
        Some(title)
    }

    /// Hides every other exclusive region, then renders `next`.
    fn show(&mut self, next: UiState) {
        let target = next.region();
        for region in EXCLUSIVE_REGIONS {
            if Some(region) != target {
                self.hide(region);
            }
        }

        match &next {
            UiState::Idle => {}
            UiState::Loading => self.page.set_visible(Region::Loading, true),
            UiState::Error(message) => {
                self.page.set_text(TextSlot::ErrorMessage, message);
                self.page.set_visible(Region::Error, true);
            }
            UiState::LoginPrompt(message) => {
                self.page.set_text(TextSlot::LoginPromptMessage, message);
                self.page.set_visible(Region::LoginPrompt, true);
            }
            UiState::Results {
                steps,
                encouragement,
            } => self.render_results(steps, encouragement),
        }

        debug!(from = self.state.name(), to = next.name(), "ui state transition");
        self.state = next;
    }

    fn hide(&mut self, region: Region) {
        self.page.set_visible(region, false);
        if region == Region::Results {
            let fade = self.presentation.fade;
            self.page.fade(Region::Results, Fade::Out, fade);
            self.page.set_text(TextSlot::StepsOutput, "");
            self.page.set_text(TextSlot::EncouragementOutput, "");
            self.page.fade(Region::EncouragementAside, Fade::Out, fade);
        }
    }

    fn render_results(&mut self, steps: &str, encouragement: &str) {
        let fade = self.presentation.fade;
        self.page.set_text(TextSlot::StepsOutput, steps);
        self.page.set_visible(Region::Results, true);
        self.page.fade(Region::Results, Fade::In, fade);

        self.page.set_text(TextSlot::EncouragementOutput, encouragement);
        if encouragement.is_empty() {
            self.page.fade(Region::EncouragementAside, Fade::Out, fade);
        } else {
            self.page.set_visible(Region::EncouragementAside, true);
            self.page.fade(Region::EncouragementAside, Fade::In, fade);
        }
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
