use chrono::Utc;
use officehub_client_core::{Route, TaskTimer};
use officehub_shared::resources::{Task, TaskStatus};
use officehub_time::TimestampMillis;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{app::wake_fn, displayable_page_common, DataShared};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiDashboard {
    #[serde(skip)]
    tasks: DataState<Vec<Task>>,
}

/// Headline numbers shown on the dashboard
#[derive(Debug, Default, PartialEq, Eq)]
struct TaskCounts {
    open: usize,
    in_progress: usize,
    overdue: usize,
    completed: usize,
}

impl TaskCounts {
    fn from_tasks(tasks: &[Task], today: chrono::NaiveDate) -> Self {
        let mut result = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::Pending => result.open += 1,
                TaskStatus::InProgress => result.in_progress += 1,
                TaskStatus::Completed => result.completed += 1,
                TaskStatus::Cancelled => {}
            }
            if task.is_overdue(today) {
                result.overdue += 1;
            }
        }
        result
    }
}

impl UiDashboard {
    pub fn has_running_timer(&self) -> bool {
        self.tasks.present().is_some_and(|x| TaskTimer::any_running(x))
    }
}

impl DisplayablePage for UiDashboard {
    displayable_page_common!(Route::Dashboard, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if let Some(identity) = data_shared.session.identity() {
            ui.label(format!("Welcome back, {}", identity.display_name()));
        }
        ui.add_space(8.0);

        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.tasks.egui_get(ui, None, || {
            AwaitingType(client.list_tasks(wake_fn(ctx)))
        });
        let Some(tasks) = self.tasks.present() else {
            return;
        };

        let counts = TaskCounts::from_tasks(tasks, Utc::now().date_naive());
        egui::Grid::new("dashboard_counts")
            .num_columns(4)
            .spacing([32.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Open");
                ui.strong("In Progress");
                ui.strong("Overdue");
                ui.strong("Completed");
                ui.end_row();
                ui.label(counts.open.to_string());
                ui.label(counts.in_progress.to_string());
                ui.colored_label(ui.visuals().warn_fg_color, counts.overdue.to_string());
                ui.label(counts.completed.to_string());
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.strong("Running timers");
        let now = TimestampMillis::now();
        let mut any_running = false;
        for task in tasks {
            let timer = TaskTimer::from(task);
            if timer.is_running() {
                any_running = true;
                ui.label(format!("{}: {}", task.title, timer.display_at(now)));
            }
        }
        if !any_running {
            ui.weak("No timers running");
        }
        ui.add_space(8.0);
        if ui.button("Open Tasks").clicked() {
            data_shared.navigate(Route::Tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn counts_by_status() {
        // Arrange
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id":1,"title":"a","status":"PENDING","due_date":"2024-01-01"},
                {"id":2,"title":"b","status":"PENDING"},
                {"id":3,"title":"c","status":"IN_PROGRESS"},
                {"id":4,"title":"d","status":"COMPLETED","due_date":"2024-01-01"},
                {"id":5,"title":"e","status":"CANCELLED"}
            ]"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        // Act
        let actual = TaskCounts::from_tasks(&tasks, today);

        // Assert
        assert_eq!(
            actual,
            TaskCounts {
                open: 2,
                in_progress: 1,
                overdue: 1,
                completed: 1,
            }
        );
    }
}
