use chrono::{NaiveDate, Utc};
use officehub_client_core::{Route, TaskTimer};
use officehub_shared::{
    id::DbId,
    resources::{Client as OfficeClient, Task, TaskDraft, TaskPriority, TaskStatus, TaskStatusUpdate},
};
use officehub_time::TimestampMillis;
use strum::IntoEnumIterator as _;
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{display_opt, ui_confirm_button, ui_optional_text_edit, ui_table},
    DataShared,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiTasks {
    status_filter: Option<TaskStatus>,
    #[serde(skip)]
    tasks: DataState<Vec<Task>>,
    #[serde(skip)]
    clients: DataState<Vec<OfficeClient>>,
    #[serde(skip)]
    form: Option<TaskForm>,
    #[serde(skip)]
    create: DataState<Task>,
    /// Status changes and timer start/stop on existing tasks
    #[serde(skip)]
    save: DataState<Task>,
    #[serde(skip)]
    delete: DataState<()>,
    #[serde(skip)]
    armed_delete: Option<DbId>,
}

#[derive(Debug, Default)]
struct TaskForm {
    title: String,
    description: Option<String>,
    client: Option<DbId>,
    priority: TaskPriority,
    due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskAction {
    SetStatus(DbId, TaskStatus),
    StartTimer(DbId),
    StopTimer(DbId),
    Delete(DbId),
}

impl TaskForm {
    fn to_draft(&self) -> Result<TaskDraft, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("A title is required");
        }
        let due_date = match self.due_date.trim() {
            "" => None,
            value => Some(
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| "Due date must look like 2024-12-31")?,
            ),
        };
        Ok(TaskDraft {
            title: title.to_string(),
            description: self.description.clone(),
            client: self.client,
            priority: self.priority,
            due_date,
        })
    }
}

/// Only tasks with the chosen status, or all of them when there is no filter
fn filter_tasks(tasks: &[Task], status: Option<TaskStatus>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| status.map_or(true, |status| status == task.status))
        .cloned()
        .collect()
}

impl UiTasks {
    pub fn has_running_timer(&self) -> bool {
        self.tasks.present().is_some_and(|x| TaskTimer::any_running(x))
    }

    fn ui_filter(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Status");
            egui::ComboBox::from_id_salt("task_status_filter")
                .selected_text(self.status_filter.map_or("All", |x| x.label()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.status_filter, None, "All");
                    for status in TaskStatus::iter() {
                        ui.selectable_value(&mut self.status_filter, Some(status), status.label());
                    }
                });
            if ui.button("Refresh").clicked() {
                self.tasks = DataState::None;
            }
            if self.form.is_none() && ui.button("New Task").clicked() {
                self.form = Some(Default::default());
            }
        });
    }

    fn ui_form(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.clients.egui_get(ui, None, || {
            AwaitingType(client.list_clients(wake_fn(ctx)))
        });
        let clients = self.clients.present().map(Vec::as_slice).unwrap_or_default();

        let mut should_send = false;
        let mut should_cancel = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("task_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut form.title);
                    ui.end_row();
                    ui.label("Description");
                    ui_optional_text_edit(ui, &mut form.description, "Optional");
                    ui.end_row();
                    ui.label("Client");
                    let selected = clients
                        .iter()
                        .find(|c| Some(c.id) == form.client)
                        .map_or("None", |c| c.name.as_str());
                    egui::ComboBox::from_id_salt("task_form_client")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut form.client, None, "None");
                            for c in clients {
                                ui.selectable_value(&mut form.client, Some(c.id), &c.name);
                            }
                        });
                    ui.end_row();
                    ui.label("Priority");
                    egui::ComboBox::from_id_salt("task_form_priority")
                        .selected_text(form.priority.to_string())
                        .show_ui(ui, |ui| {
                            for priority in TaskPriority::iter() {
                                ui.selectable_value(
                                    &mut form.priority,
                                    priority,
                                    priority.to_string(),
                                );
                            }
                        });
                    ui.end_row();
                    ui.label("Due date");
                    ui.add(egui::TextEdit::singleline(&mut form.due_date).hint_text("YYYY-MM-DD"));
                    ui.end_row();
                });
            let draft = form.to_draft();
            if let Err(msg) = draft {
                ui.weak(msg);
            }
            ui.horizontal(|ui| {
                should_send = ui
                    .add_enabled(
                        draft.is_ok() && !self.create.is_awaiting(),
                        egui::Button::new("Create"),
                    )
                    .clicked();
                should_cancel = ui.button("Cancel").clicked();
            });
        });

        if should_cancel {
            self.form = None;
        } else if should_send {
            if let Ok(draft) = form.to_draft() {
                let rx = data_shared
                    .client
                    .create_task(&draft, wake_fn(ui.ctx().clone()));
                self.create = rx.into();
            }
        }
    }

    fn ui_table(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) -> Option<TaskAction> {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.tasks.egui_get(ui, None, || {
            AwaitingType(client.list_tasks(wake_fn(ctx)))
        });
        let tasks = filter_tasks(self.tasks.present()?, self.status_filter);

        let today = Utc::now().date_naive();
        let now = TimestampMillis::now();
        let is_busy = self.save.is_awaiting() || self.delete.is_awaiting();
        let armed_delete = &mut self.armed_delete;
        let mut action = None;
        ui_table(
            ui,
            "tasks_table",
            &[
                "Title", "Client", "Assigned", "Status", "Priority", "Due", "Time", "Actions",
            ],
            &tasks,
            |row, task| {
                row.col(|ui| {
                    ui.label(&task.title);
                });
                row.col(|ui| {
                    ui.label(display_opt(task.client_name.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_opt(task.assigned_to_name.as_deref()));
                });
                row.col(|ui| {
                    let mut status = task.status;
                    egui::ComboBox::from_id_salt(("task_status", task.id))
                        .selected_text(status.label())
                        .show_ui(ui, |ui| {
                            for option in TaskStatus::iter() {
                                ui.selectable_value(&mut status, option, option.label());
                            }
                        });
                    if status != task.status {
                        action = Some(TaskAction::SetStatus(task.id, status));
                    }
                });
                row.col(|ui| {
                    ui.label(task.priority.to_string());
                });
                row.col(|ui| {
                    let due = task
                        .due_date
                        .map(|d| d.format(DATE_FORMAT).to_string())
                        .unwrap_or_else(|| "-".to_string());
                    if task.is_overdue(today) {
                        ui.colored_label(ui.visuals().error_fg_color, due);
                    } else {
                        ui.label(due);
                    }
                });
                row.col(|ui| {
                    ui.monospace(TaskTimer::from(task).display_at(now));
                });
                row.col(|ui| {
                    ui.add_enabled_ui(!is_busy, |ui| {
                        if task.is_timer_running {
                            if ui.button("Stop").clicked() {
                                action = Some(TaskAction::StopTimer(task.id));
                            }
                        } else if ui.button("Start").clicked() {
                            action = Some(TaskAction::StartTimer(task.id));
                        }
                        if ui_confirm_button(ui, "Delete", task.id, armed_delete) {
                            action = Some(TaskAction::Delete(task.id));
                        }
                    });
                });
            },
        );
        action
    }

    #[tracing::instrument(skip(self, ctx, data_shared))]
    fn perform(&mut self, action: TaskAction, ctx: egui::Context, data_shared: &mut DataShared) {
        let client = &data_shared.client;
        match action {
            TaskAction::SetStatus(id, status) => {
                let args = TaskStatusUpdate { status };
                self.save = client.update_task_status(id, &args, wake_fn(ctx)).into();
            }
            TaskAction::StartTimer(id) => self.save = client.start_timer(id, wake_fn(ctx)).into(),
            TaskAction::StopTimer(id) => self.save = client.stop_timer(id, wake_fn(ctx)).into(),
            TaskAction::Delete(id) => self.delete = client.delete_task(id, wake_fn(ctx)).into(),
        }
    }

    fn check_outcomes(&mut self, data_shared: &mut DataShared) {
        match self.create.take_outcome() {
            Some(Ok(task)) => {
                info!(id = %task.id, "task created");
                self.form = None;
                data_shared.notifications.push_success("Task created");
                self.tasks = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
        match self.save.take_outcome() {
            Some(Ok(task)) => {
                info!(id = %task.id, "task saved");
                self.tasks = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
        match self.delete.take_outcome() {
            Some(Ok(())) => {
                data_shared.notifications.push_success("Task deleted");
                self.tasks = DataState::None;
            }
            Some(Err(e)) => data_shared.notify_error(e),
            None => {}
        }
    }
}

impl DisplayablePage for UiTasks {
    displayable_page_common!(Route::Tasks);

    fn reset_to_default(&mut self, _: super::private::Token) {
        // Keep the filter the user chose
        *self = Self {
            status_filter: self.status_filter,
            ..Default::default()
        };
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        self.check_outcomes(data_shared);
        self.ui_filter(ui);
        self.ui_form(ui, data_shared);
        ui.add_space(8.0);
        if let Some(action) = self.ui_table(ui, data_shared) {
            self.perform(action, ui.ctx().clone(), data_shared);
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;
    use rstest::rstest;

    use super::*;

    fn resolved(task: Task) -> DataState<Task> {
        let (tx, rx) = oneshot::channel();
        tx.send(Ok(task)).unwrap();
        rx.into()
    }

    fn existing_task() -> Task {
        serde_json::from_str(r#"{"id":4,"title":"Payroll","status":"IN_PROGRESS"}"#).unwrap()
    }

    fn open_form() -> Option<TaskForm> {
        Some(TaskForm {
            title: "half typed".into(),
            ..Default::default()
        })
    }

    fn messages(data_shared: &DataShared) -> Vec<String> {
        data_shared
            .notifications
            .items()
            .iter()
            .map(|x| x.message.clone())
            .collect()
    }

    #[test]
    fn row_action_keeps_open_form() {
        // Arrange
        let mut data_shared = DataShared::default();
        let mut page = UiTasks {
            form: open_form(),
            save: resolved(existing_task()),
            ..Default::default()
        };

        // Act
        page.check_outcomes(&mut data_shared);

        // Assert
        assert_eq!(page.form.as_ref().map(|x| x.title.as_str()), Some("half typed"));
        assert!(!messages(&data_shared).iter().any(|x| x == "Task created"));
        assert!(page.save.is_none());
    }

    #[test]
    fn running_timer_keeps_clock_ticking() {
        // Arrange
        let mut running = existing_task();
        running.is_timer_running = true;
        running.timer_started_at = Some(Utc::now());
        let stopped = UiTasks {
            tasks: DataState::Present(vec![existing_task()]),
            ..Default::default()
        };
        let ticking = UiTasks {
            tasks: DataState::Present(vec![existing_task(), running]),
            ..Default::default()
        };

        // Act / Assert
        assert!(!stopped.has_running_timer());
        assert!(ticking.has_running_timer());
    }

    #[test]
    fn created_task_closes_form() {
        // Arrange
        let mut data_shared = DataShared::default();
        let mut page = UiTasks {
            form: open_form(),
            create: resolved(existing_task()),
            ..Default::default()
        };

        // Act
        page.check_outcomes(&mut data_shared);

        // Assert
        assert!(page.form.is_none());
        assert_eq!(messages(&data_shared), ["Task created"]);
    }

    #[rstest]
    #[case::blank_title("  ", "", Err("A title is required"))]
    #[case::bad_date("VAT", "31/12/2024", Err("Due date must look like 2024-12-31"))]
    #[case::no_date("VAT", "", Ok(None))]
    #[case::with_date("VAT", "2024-12-31", Ok(NaiveDate::from_ymd_opt(2024, 12, 31)))]
    fn form_to_draft(
        #[case] title: &str,
        #[case] due_date: &str,
        #[case] expected: Result<Option<NaiveDate>, &str>,
    ) {
        // Arrange
        let form = TaskForm {
            title: title.into(),
            due_date: due_date.into(),
            ..Default::default()
        };

        // Act
        let actual = form.to_draft().map(|draft| draft.due_date);

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn filter_by_status() {
        // Arrange
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id":1,"title":"a","status":"PENDING"},
                {"id":2,"title":"b","status":"COMPLETED"},
                {"id":3,"title":"c","status":"PENDING"}
            ]"#,
        )
        .unwrap();

        // Act
        let pending = filter_tasks(&tasks, Some(TaskStatus::Pending));
        let all = filter_tasks(&tasks, None);

        // Assert
        assert_eq!(pending.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(all.len(), 3);
    }
}
