use officehub_client_core::Route;
use officehub_shared::resources::ReportSummary;
use officehub_time::Seconds;

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{app::wake_fn, displayable_page_common, DataShared};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiReports {
    #[serde(skip)]
    summary: DataState<ReportSummary>,
}

/// Share of the tasks that are completed as a whole percentage
fn completion_percent(summary: &ReportSummary) -> u64 {
    if summary.total_tasks == 0 {
        0
    } else {
        summary.completed_tasks * 100 / summary.total_tasks
    }
}

impl DisplayablePage for UiReports {
    displayable_page_common!(Route::Reports, reset_all);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if ui.button("Refresh").clicked() {
            self.summary = DataState::None;
        }
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.summary.egui_get(ui, None, || {
            AwaitingType(client.report_summary(wake_fn(ctx)))
        });
        let Some(summary) = self.summary.present() else {
            return;
        };

        egui::Grid::new("report_summary")
            .num_columns(2)
            .striped(true)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                ui.label("Total tasks");
                ui.label(summary.total_tasks.to_string());
                ui.end_row();
                ui.label("Completed");
                ui.label(format!(
                    "{} ({}%)",
                    summary.completed_tasks,
                    completion_percent(summary)
                ));
                ui.end_row();
                ui.label("Overdue");
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    summary.overdue_tasks.to_string(),
                );
                ui.end_row();
                ui.label("Time recorded");
                ui.monospace(Seconds::new(summary.total_time_spent).display_hh_mm_ss());
                ui.end_row();
                ui.label("Active clients");
                ui.label(summary.active_clients.to_string());
                ui.end_row();
            });
        ui.add_space(8.0);
        ui.weak("Detailed reports are generated and emailed by the server");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::no_tasks(0, 0, 0)]
    #[case::half(10, 5, 50)]
    #[case::rounds_down(3, 2, 66)]
    fn completion(#[case] total: u64, #[case] completed: u64, #[case] expected: u64) {
        // Arrange
        let summary = ReportSummary {
            total_tasks: total,
            completed_tasks: completed,
            ..Default::default()
        };

        // Act / Assert
        assert_eq!(completion_percent(&summary), expected);
    }
}
