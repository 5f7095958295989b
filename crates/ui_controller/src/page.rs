//! Page abstraction the controller renders into.

use std::time::Duration;

/// Named page regions the controller shows and hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Loading,
    Error,
    LoginPrompt,
    /// Result card holding the steps section.
    Results,
    /// Encouragement aside next to the result card.
    EncouragementAside,
}

/// Regions of which at most one is visible at any time.
pub const EXCLUSIVE_REGIONS: [Region; 4] = [
    Region::Loading,
    Region::Error,
    Region::LoginPrompt,
    Region::Results,
];

/// Text-bearing elements inside the regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    ErrorMessage,
    LoginPromptMessage,
    StepsOutput,
    EncouragementOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

pub trait PageView {
    /// Whether the server-rendered page carries the login indicator.
    fn is_logged_in(&self) -> bool;

    /// Current value of the task input, `None` if the page has no input.
    fn task_input(&self) -> Option<String>;

    fn set_task_input(&mut self, value: &str);

    fn set_visible(&mut self, region: Region, visible: bool);

    fn set_text(&mut self, slot: TextSlot, text: &str);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Post-render opacity transition. After a `Fade::Out` has run for
    /// `duration` the page hides the region, unless a `Fade::In` for the
    /// same region arrived in the meantime.
    fn fade(&mut self, region: Region, fade: Fade, duration: Duration);

    /// Blocking notification (an alert on a browser page).
    fn notify(&mut self, message: &str);

    fn navigate(&mut self, path: &str);
}
