use officehub_client_core::Route;
use officehub_shared::resources::QuotaUsage;

use crate::{
    app::wake_fn,
    displayable_page_common,
    pages::{
        data_state::{AwaitingType, DataState},
        DisplayablePage,
    },
    ui_helpers::ui_table,
    DataShared,
};

/// Usage above this fraction of the quota is highlighted
const WARN_RATIO: f32 = 0.9;

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiAdminQuota {
    only_near_limit: bool,
    #[serde(skip)]
    usage: DataState<Vec<QuotaUsage>>,
}

fn storage_text(usage: &QuotaUsage) -> String {
    if usage.storage_limit_mb == 0 {
        format!("{} MB", usage.storage_used_mb)
    } else {
        format!("{} / {} MB", usage.storage_used_mb, usage.storage_limit_mb)
    }
}

impl DisplayablePage for UiAdminQuota {
    displayable_page_common!(Route::AdminQuota);

    fn reset_to_default(&mut self, _: super::private::Token) {
        self.usage = DataState::None;
    }

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.only_near_limit, "Only show organizations near their limit");
            if ui.button("Refresh").clicked() {
                self.usage = DataState::None;
            }
        });
        let client = data_shared.client.clone();
        let ctx = ui.ctx().clone();
        self.usage.egui_get(ui, None, || {
            AwaitingType(client.admin_quota(wake_fn(ctx)))
        });
        let Some(usage) = self.usage.present() else {
            return;
        };
        let shown: Vec<&QuotaUsage> = usage
            .iter()
            .filter(|x| !self.only_near_limit || x.api_usage_ratio() >= WARN_RATIO)
            .collect();
        ui_table(
            ui,
            "admin_quota_table",
            &["Organization", "API calls", "Storage", "Usage"],
            &shown,
            |row, usage| {
                let ratio = usage.api_usage_ratio();
                row.col(|ui| {
                    ui.label(&usage.organization_name);
                });
                row.col(|ui| {
                    ui.label(format!("{} / {}", usage.api_calls_used, usage.api_calls_limit));
                });
                row.col(|ui| {
                    ui.label(storage_text(usage));
                });
                row.col(|ui| {
                    let mut bar = egui::ProgressBar::new(ratio.min(1.0))
                        .desired_width(160.0)
                        .show_percentage();
                    if ratio >= WARN_RATIO {
                        bar = bar.fill(ui.visuals().error_fg_color);
                    }
                    ui.add(bar);
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
    #[case::no_limit(120, 0, "120 MB")]
    #[case::with_limit(120, 500, "120 / 500 MB")]
    fn storage(#[case] used: u64, #[case] limit: u64, #[case] expected: &str) {
        // Arrange
        let usage = QuotaUsage {
            organization_name: "Acme".into(),
            api_calls_used: 0,
            api_calls_limit: 0,
            storage_used_mb: used,
            storage_limit_mb: limit,
        };

        // Act / Assert
        assert_eq!(storage_text(&usage), expected);
    }
}
