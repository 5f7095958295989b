//! Presentation constants: user-facing wording, fade timing and the
//! congratulation pool. None of these are behavioral invariants, so they
//! are plain configuration with the stock values as defaults.

use std::time::Duration;

use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

pub const DEFAULT_DONE_TEMPLATES: [&str; 5] = [
    "Great job finishing \"{title}\"! 🎉",
    "Awesome work completing \"{title}\"! Keep the momentum going! 💪",
    "\"{title}\" done! That's fantastic progress! ✨",
    "You did it! \"{title}\" is complete. Well done! 👍",
    "Excellent! You knocked out \"{title}\". Amazing focus! 🚀",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_task: String,
    pub sign_in_required: String,
    pub session_expired: String,
    pub server_issue: String,
    pub unexpected_format: String,
    /// `{status}` and `{reason}` are substituted.
    pub http_status: String,
    /// `{detail}` is substituted.
    pub request_failed: String,
    /// Rendered in the steps output when a response carries only encouragement.
    pub missing_steps: String,
    pub missing_title: String,
    pub stash_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_task: "Please describe the objective or challenge.".into(),
            sign_in_required: "Please sign in first to use this feature.".into(),
            session_expired: "Session expired. Please log in.".into(),
            server_issue: "Server issue. Check the decomposition service configuration.".into(),
            unexpected_format: "Received an unexpected response format.".into(),
            http_status: "Server error: {status} {reason}".into(),
            request_failed: "An error occurred: {detail}".into(),
            missing_steps: String::new(),
            missing_title: "Could not get task title to break down.".into(),
            stash_failed: "Could not save the task for breakdown.".into(),
        }
    }
}

impl Messages {
    pub fn http_status(&self, status: u16, reason: &str) -> String {
        self.http_status
            .replace("{status}", &status.to_string())
            .replace("{reason}", reason)
            .trim_end()
            .to_string()
    }

    pub fn request_failed(&self, detail: &str) -> String {
        self.request_failed.replace("{detail}", detail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationSettings {
    #[serde(with = "millis")]
    pub fade: Duration,
    /// Congratulation templates; `{title}` is substituted.
    pub done_templates: Vec<String>,
    pub messages: Messages,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            fade: DEFAULT_FADE,
            done_templates: DEFAULT_DONE_TEMPLATES
                .iter()
                .map(|template| template.to_string())
                .collect(),
            messages: Messages::default(),
        }
    }
}

impl PresentationSettings {
    /// Picks one congratulation uniformly at random; `None` if the pool is empty.
    pub fn pick_congratulation<R: Rng + ?Sized>(&self, title: &str, rng: &mut R) -> Option<String> {
        self.done_templates
            .choose(rng)
            .map(|template| template.replace("{title}", title))
    }
}

mod millis {
    use std::time::Duration;

    use serde::{ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).map_err(S::Error::custom)?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn every_pick_comes_from_the_pool_with_title_filled_in() {
        let settings = PresentationSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let message = settings
                .pick_congratulation("Pay rent", &mut rng)
                .expect("non-empty pool");
            assert!(message.contains("\"Pay rent\""), "{message}");
            assert!(!message.contains("{title}"));
            assert!(DEFAULT_DONE_TEMPLATES
                .iter()
                .any(|template| template.replace("{title}", "Pay rent") == message));
        }
    }

    #[test]
    fn empty_pool_picks_nothing() {
        let settings = PresentationSettings {
            done_templates: Vec::new(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(settings.pick_congratulation("x", &mut rng), None);
    }

    #[test]
    fn http_status_message_trims_missing_reason() {
        let messages = Messages::default();
        assert_eq!(messages.http_status(404, "Not Found"), "Server error: 404 Not Found");
        assert_eq!(messages.http_status(599, ""), "Server error: 599");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings: PresentationSettings = toml::from_str(
            r#"
            fade = 250
            [messages]
            server_issue = "Backend is down."
            "#,
        )
        .expect("toml");
        assert_eq!(settings.fade, Duration::from_millis(250));
        assert_eq!(settings.messages.server_issue, "Backend is down.");
        assert_eq!(settings.messages.session_expired, "Session expired. Please log in.");
        assert_eq!(settings.done_templates.len(), 5);
    }

    #[test]
    fn fade_serializes_as_millis_and_rejects_overflow() {
        let settings = PresentationSettings::default();
        let json = serde_json::to_value(&settings).expect("json");
        assert_eq!(json["fade"], 500);

        let too_long = PresentationSettings {
            fade: Duration::MAX,
            ..Default::default()
        };
        assert!(serde_json::to_value(&too_long).is_err());
    }
}
