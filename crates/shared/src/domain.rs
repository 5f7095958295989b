use serde::{Deserialize, Serialize};

/// Stash key carrying a task title from the task list back to the input page.
pub const PENDING_TASK_STASH_KEY: &str = "taskToDecompose";

/// Title used in congratulations when a task row carries no title.
pub const UNTITLED_TASK: &str = "this task";

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(TaskId);

/// One row of the task list page. `id` and `title` mirror the row's
/// `data-task-id` / `data-task-title` attributes and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "default_actions_visible")]
    pub actions_visible: bool,
}

fn default_actions_visible() -> bool {
    true
}

impl TaskItem {
    pub fn new(id: Option<TaskId>, title: Option<String>) -> Self {
        Self {
            id,
            title,
            done: false,
            actions_visible: true,
        }
    }

    /// Title for display, falling back to [`UNTITLED_TASK`].
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_TASK,
        }
    }
}
