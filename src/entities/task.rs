//! Task entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task kind discriminant, carrying the kind-specific field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TaskKind {
    Plain,
    Deadline { deadline: String },
    Timed { timeline: String },
}

impl TaskKind {
    /// Short kind name for tables and prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain => "to-do",
            Self::Deadline { .. } => "deadline",
            Self::Timed { .. } => "timed",
        }
    }

    /// The kind-specific field, if the kind carries one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Plain => None,
            Self::Deadline { deadline } => Some(deadline),
            Self::Timed { timeline } => Some(timeline),
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Core task structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing; set at creation, immutable thereafter
    pub description: String,

    /// Completion flag; set once, never cleared
    #[serde(default)]
    pub completed: bool,

    /// Kind discriminant and kind-specific field
    #[serde(flatten)]
    pub kind: TaskKind,

    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task of the given kind with `completed = false`.
    ///
    /// No emptiness checks happen here; the input contract in
    /// [`crate::domain`] is responsible for them.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            completed: false,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Create a plain to-do task
    pub fn plain(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Plain)
    }

    /// Create a deadline-bound task
    pub fn deadline(description: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self::new(
            description,
            TaskKind::Deadline {
                deadline: deadline.into(),
            },
        )
    }

    /// Create a timed task
    pub fn timed(description: impl Into<String>, timeline: impl Into<String>) -> Self {
        Self::new(
            description,
            TaskKind::Timed {
                timeline: timeline.into(),
            },
        )
    }

    /// Mark the task completed. Repeated calls are no-ops.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Canonical display string for this task
    pub fn render(&self) -> String {
        let line = match &self.kind {
            TaskKind::Plain => format!("To-Do: {}", self.description),
            TaskKind::Deadline { deadline } => format!(
                "Deadline Task: {} (Deadline: {})",
                self.description, deadline
            ),
            TaskKind::Timed { timeline } => {
                format!("Timed Task: {} (Timeline: {})", self.description, timeline)
            }
        };

        if self.completed {
            format!("{line} (Completed)")
        } else {
            line
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::plain("Buy milk");
        assert_eq!(task.description, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn test_fresh_task_has_no_completed_suffix() {
        let task = Task::deadline("Submit report", "2024-01-01");
        assert!(!task.render().contains("(Completed)"));
    }

    #[test]
    fn test_render_plain() {
        let mut task = Task::plain("Buy milk");
        assert_eq!(task.render(), "To-Do: Buy milk");

        task.mark_completed();
        assert_eq!(task.render(), "To-Do: Buy milk (Completed)");
    }

    #[test]
    fn test_render_deadline() {
        let task = Task::deadline("Submit report", "2024-01-01");
        assert_eq!(
            task.render(),
            "Deadline Task: Submit report (Deadline: 2024-01-01)"
        );
    }

    #[test]
    fn test_render_timed() {
        let task = Task::timed("Meeting", "3pm-4pm");
        assert_eq!(task.render(), "Timed Task: Meeting (Timeline: 3pm-4pm)");
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let mut task = Task::plain("Buy milk");
        task.mark_completed();
        task.mark_completed();
        task.mark_completed();

        assert!(task.completed);
        assert_eq!(task.render(), "To-Do: Buy milk (Completed)");
        assert_eq!(task.render().matches("(Completed)").count(), 1);
    }

    #[test]
    fn test_display_matches_render() {
        let task = Task::timed("Meeting", "3pm-4pm");
        assert_eq!(task.to_string(), task.render());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TaskKind::Plain.label(), "to-do");
        assert_eq!(
            Task::deadline("x", "tomorrow").kind.detail(),
            Some("tomorrow")
        );
        assert_eq!(Task::plain("x").kind.detail(), None);
    }
}
