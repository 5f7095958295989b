//! Terminal rendition of the decomposer page: regions print as they become
//! visible, notifications and navigation print as notices.

use std::{collections::HashMap, io::Write, time::Duration};

use ui_controller::{Fade, PageView, Region, TextSlot};

pub struct TerminalPage<W: Write> {
    out: W,
    logged_in: bool,
    input: Option<String>,
    visible: HashMap<Region, bool>,
    texts: HashMap<TextSlot, String>,
}

impl<W: Write> TerminalPage<W> {
    pub fn new(out: W, logged_in: bool, input: Option<String>) -> Self {
        Self {
            out,
            logged_in,
            input,
            visible: HashMap::new(),
            texts: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible.get(&region).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn text(&self, slot: TextSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or_default()
    }

    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!(%err, "terminal page: failed to write output");
        }
    }

    fn render(&mut self, region: Region) {
        let line = match region {
            Region::Loading => "Breaking it down...".to_string(),
            Region::Error => format!("Error: {}", self.text(TextSlot::ErrorMessage)),
            Region::LoginPrompt => self.text(TextSlot::LoginPromptMessage).to_string(),
            Region::Results => format!("Steps:\n{}", self.text(TextSlot::StepsOutput)),
            Region::EncouragementAside => {
                format!("\n> {}", self.text(TextSlot::EncouragementOutput))
            }
        };
        self.emit(&line);
    }
}

impl<W: Write> PageView for TerminalPage<W> {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn task_input(&self) -> Option<String> {
        self.input.clone()
    }

    fn set_task_input(&mut self, value: &str) {
        self.input = Some(value.to_string());
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        let was_visible = self.visible.insert(region, visible).unwrap_or(false);
        if visible && !was_visible {
            self.render(region);
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::debug!(enabled, "terminal page: submit control");
    }

    // No opacity in a terminal; a finished fade-out just hides the region.
    fn fade(&mut self, region: Region, fade: Fade, duration: Duration) {
        tracing::debug!(?region, ?fade, ?duration, "terminal page: fade");
        if fade == Fade::Out {
            self.visible.insert(region, false);
        }
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("[!] {message}"));
    }

    fn navigate(&mut self, path: &str) {
        self.emit(&format!("-> {path} (run `decomposer submit` to continue)"));
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
