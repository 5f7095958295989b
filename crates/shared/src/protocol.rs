use serde::{Deserialize, Serialize};

pub const DECOMPOSE_ROUTE: &str = "/decompose";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposeRequest {
    pub task_description: String,
}

impl DecomposeRequest {
    /// Builds a request from raw input, returning `None` when the input is
    /// empty after trimming.
    pub fn from_input(raw: &str) -> Option<Self> {
        let task_description = raw.trim();
        if task_description.is_empty() {
            return None;
        }
        Some(Self {
            task_description: task_description.to_string(),
        })
    }
}

/// Body of a `/decompose` response. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encouragement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What a response body amounts to once empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecomposeBody {
    Decomposition {
        steps: String,
        encouragement: String,
    },
    Error(String),
    Unrecognized,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl DecomposeResponse {
    pub fn classify(&self) -> DecomposeBody {
        let steps = non_empty(&self.steps);
        let encouragement = non_empty(&self.encouragement);
        if steps.is_some() || encouragement.is_some() {
            return DecomposeBody::Decomposition {
                steps: steps.unwrap_or_default().to_string(),
                encouragement: encouragement.unwrap_or_default().to_string(),
            };
        }
        match non_empty(&self.error) {
            Some(error) => DecomposeBody::Error(error.to_string()),
            None => DecomposeBody::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_and_rejects_blank_input() {
        assert_eq!(DecomposeRequest::from_input("   \n\t"), None);
        let request = DecomposeRequest::from_input("  plan the move  ").expect("request");
        assert_eq!(request.task_description, "plan the move");
        assert_eq!(
            serde_json::to_value(&request).expect("json"),
            serde_json::json!({ "task_description": "plan the move" })
        );
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let response: DecomposeResponse =
            serde_json::from_str(r#"{"steps":"1. Start","model":"gpt"}"#).expect("json");
        assert_eq!(response.steps.as_deref(), Some("1. Start"));
        assert_eq!(response.encouragement, None);
    }

    #[test]
    fn classify_prefers_decomposition_over_error() {
        let response = DecomposeResponse {
            steps: None,
            encouragement: Some("You got this".into()),
            error: Some("ignored".into()),
        };
        assert_eq!(
            response.classify(),
            DecomposeBody::Decomposition {
                steps: String::new(),
                encouragement: "You got this".into(),
            }
        );
    }

    #[test]
    fn classify_treats_empty_strings_as_absent() {
        let response = DecomposeResponse {
            steps: Some(String::new()),
            encouragement: Some(String::new()),
            error: None,
        };
        assert_eq!(response.classify(), DecomposeBody::Unrecognized);

        let response = DecomposeResponse {
            error: Some("quota exceeded".into()),
            ..Default::default()
        };
        assert_eq!(
            response.classify(),
            DecomposeBody::Error("quota exceeded".into())
        );
    }
}
