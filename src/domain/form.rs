//! Task construction form and its presence checks.

use crate::entities::Task;
use crate::errors::{TodosError, TodosResult};

/// Selectable task variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskVariant {
    #[default]
    Plain,
    Deadline,
    Timed,
}

impl TaskVariant {
    /// Menu order, plain first
    pub const ALL: [Self; 3] = [Self::Plain, Self::Deadline, Self::Timed];
}

impl std::fmt::Display for TaskVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "To-Do Task"),
            Self::Deadline => write!(f, "Deadline Task"),
            Self::Timed => write!(f, "Timed Task"),
        }
    }
}

/// Raw field values as collected by the front-end.
///
/// Fields that do not belong to the selected variant are ignored on
/// submit, so a form can carry stale text without affecting the task.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub description: String,
    pub variant: TaskVariant,
    pub deadline: String,
    pub timeline: String,
}

impl TaskForm {
    /// Validate the variant-specific field and build the task.
    ///
    /// Presence is the only check: the selected variant's field must be
    /// a non-empty string. Nothing is trimmed, and the description may
    /// be empty.
    pub fn submit(self) -> TodosResult<Task> {
        match self.variant {
            TaskVariant::Plain => Ok(Task::plain(self.description)),
            TaskVariant::Deadline => {
                if self.deadline.is_empty() {
                    return Err(TodosError::DeadlineRequired);
                }
                Ok(Task::deadline(self.description, self.deadline))
            }
            TaskVariant::Timed => {
                if self.timeline.is_empty() {
                    return Err(TodosError::TimelineRequired);
                }
                Ok(Task::timed(self.description, self.timeline))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TaskKind;

    #[test]
    fn test_plain_submit() {
        let task = TaskForm {
            description: "Buy milk".to_string(),
            ..TaskForm::default()
        }
        .submit()
        .unwrap();

        assert_eq!(task.render(), "To-Do: Buy milk");
    }

    #[test]
    fn test_plain_ignores_populated_variant_fields() {
        let task = TaskForm {
            description: "Buy milk".to_string(),
            variant: TaskVariant::Plain,
            deadline: "friday".to_string(),
            timeline: "3pm-4pm".to_string(),
        }
        .submit()
        .unwrap();

        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn test_deadline_requires_deadline() {
        let result = TaskForm {
            description: "Submit report".to_string(),
            variant: TaskVariant::Deadline,
            ..TaskForm::default()
        }
        .submit();

        assert_eq!(result, Err(TodosError::DeadlineRequired));
    }

    #[test]
    fn test_timed_requires_timeline() {
        let result = TaskForm {
            description: "Meeting".to_string(),
            variant: TaskVariant::Timed,
            ..TaskForm::default()
        }
        .submit();

        assert_eq!(result, Err(TodosError::TimelineRequired));
    }

    #[test]
    fn test_deadline_submit() {
        let task = TaskForm {
            description: "Submit report".to_string(),
            variant: TaskVariant::Deadline,
            deadline: "2024-01-01".to_string(),
            ..TaskForm::default()
        }
        .submit()
        .unwrap();

        assert_eq!(
            task.render(),
            "Deadline Task: Submit report (Deadline: 2024-01-01)"
        );
    }

    #[test]
    fn test_presence_check_accepts_whitespace() {
        // Presence means non-empty, not non-blank.
        let result = TaskForm {
            description: "Meeting".to_string(),
            variant: TaskVariant::Timed,
            timeline: "  ".to_string(),
            ..TaskForm::default()
        }
        .submit();

        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_description_accepted() {
        let task = TaskForm::default().submit().unwrap();
        assert_eq!(task.render(), "To-Do: ");
    }

    #[test]
    fn test_variant_labels() {
        let labels: Vec<String> = TaskVariant::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["To-Do Task", "Deadline Task", "Timed Task"]);
    }
}
