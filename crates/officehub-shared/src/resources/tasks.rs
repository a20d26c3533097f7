use chrono::{DateTime, NaiveDate, Utc};

use crate::id::DbId;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<DbId>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Seconds accumulated before the current run of the timer
    #[serde(default)]
    pub total_time_spent: u64,
    #[serde(default)]
    pub total_time_spent_formatted: Option<String>,
    #[serde(default)]
    pub is_timer_running: bool,
    #[serde(default)]
    pub timer_started_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Default, serde::Serialize, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<DbId>,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct TaskStatusUpdate {
    pub status: TaskStatus,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

impl Task {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            TaskStatus::Completed | TaskStatus::Cancelled => false,
            TaskStatus::Pending | TaskStatus::InProgress => {
                self.due_date.is_some_and(|due| due < today)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_task_parses_with_defaults() {
        // Act
        let actual: Task =
            serde_json::from_str(r#"{"id":4,"title":"VAT return","status":"IN_PROGRESS"}"#)
                .unwrap();

        // Assert
        assert_eq!(actual.status, TaskStatus::InProgress);
        assert_eq!(actual.priority, TaskPriority::Medium);
        assert_eq!(actual.total_time_spent, 0);
        assert!(!actual.is_timer_running);
        assert!(actual.timer_started_at.is_none());
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        // Arrange
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let mut task: Task = serde_json::from_str(
            r#"{"id":1,"title":"t","status":"PENDING","due_date":"2024-05-01"}"#,
        )
        .unwrap();

        // Act / Assert
        assert!(task.is_overdue(today));
        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(today));
    }
}
