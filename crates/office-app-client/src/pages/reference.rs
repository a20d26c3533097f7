//! Read only lists the office uses as reference when working on tasks

use officehub_client_core::Route;
use officehub_shared::resources::{Employee, TaskTemplate, WorkType};

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{display_opt, readonly_checkbox_no_text, ui_table},
    DataShared,
};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiWorkTypes {
    #[serde(skip)]
    work_types: DataState<Vec<WorkType>>,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiEmployees {
    #[serde(skip)]
    employees: DataState<Vec<Employee>>,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiTemplates {
    #[serde(skip)]
    templates: DataState<Vec<TaskTemplate>>,
}

fn estimate_text(minutes: Option<u32>) -> String {
    match minutes {
        None => "-".to_string(),
        Some(minutes) if minutes < 60 => format!("{minutes}m"),
        Some(minutes) if minutes % 60 == 0 => format!("{}h", minutes / 60),
        Some(minutes) => format!("{}h {}m", minutes / 60, minutes % 60),
    }
}

impl DisplayablePage for UiWorkTypes {
    displayable_page_common!(Route::WorkTypes, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.work_types.egui_get(ui, None, || {
            AwaitingType(client.list_work_types(wake_fn(ctx)))
        });
        let Some(work_types) = self.work_types.present() else {
            return;
        };
        ui_table(
            ui,
            "work_types_table",
            &["Name", "Active", "Description"],
            work_types,
            |row, work_type| {
                row.col(|ui| {
                    ui.label(&work_type.name);
                });
                row.col(|ui| readonly_checkbox_no_text(ui, work_type.is_active));
                row.col(|ui| {
                    ui.label(display_opt(work_type.description.as_deref()));
                });
            },
        );
    }
}

impl DisplayablePage for UiEmployees {
    displayable_page_common!(Route::Employees, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.employees.egui_get(ui, None, || {
            AwaitingType(client.list_employees(wake_fn(ctx)))
        });
        let Some(employees) = self.employees.present() else {
            return;
        };
        ui_table(
            ui,
            "employees_table",
            &["Name", "Email", "Role", "Active"],
            employees,
            |row, employee| {
                row.col(|ui| {
                    ui.label(format!("{} {}", employee.first_name, employee.last_name));
                });
                row.col(|ui| {
                    ui.label(&employee.email);
                });
                row.col(|ui| {
                    ui.label(employee.role.to_string());
                });
                row.col(|ui| readonly_checkbox_no_text(ui, employee.is_active));
            },
        );
    }
}

impl DisplayablePage for UiTemplates {
    displayable_page_common!(Route::Templates, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.templates.egui_get(ui, None, || {
            AwaitingType(client.list_templates(wake_fn(ctx)))
        });
        let Some(templates) = self.templates.present() else {
            return;
        };
        ui_table(
            ui,
            "templates_table",
            &["Name", "Priority", "Estimate", "Description"],
            templates,
            |row, template| {
                row.col(|ui| {
                    ui.label(&template.name);
                });
                row.col(|ui| {
                    let priority = template.default_priority.map(|p| p.to_string());
                    ui.label(display_opt(priority.as_deref()));
                });
                row.col(|ui| {
                    ui.label(estimate_text(template.estimated_minutes));
                });
                row.col(|ui| {
                    ui.label(display_opt(template.description.as_deref()));
                });
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::none(None, "-")]
    #[case::minutes(Some(45), "45m")]
    #[case::whole_hours(Some(120), "2h")]
    #[case::mixed(Some(90), "1h 30m")]
    fn estimate(#[case] minutes: Option<u32>, #[case] expected: &str) {
        assert_eq!(estimate_text(minutes), expected);
    }
}
