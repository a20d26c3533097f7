//! Frame around every page: top bar, side menu and the central panel

use chrono::{DateTime, Utc};
use officehub_client_core::{visible_menu, Route, RouteKind};
use officehub_shared::uac::Organization;

use crate::DataShared;

/// Entries of the side menu inside the platform admin area
const ADMIN_MENU: [Route; 7] = [
    Route::AdminDashboard,
    Route::AdminOrganizations,
    Route::AdminTrials,
    Route::AdminUsers,
    Route::AdminSubscriptions,
    Route::AdminSettings,
    Route::AdminQuota,
];

const PUBLIC_FOOTER: [Route; 3] = [Route::Privacy, Route::Terms, Route::Cookies];

pub fn show<F>(ctx: &egui::Context, route: Route, data_shared: &mut DataShared, add_page: F)
where
    F: FnOnce(&mut egui::Ui, &mut DataShared),
{
    match route.kind() {
        RouteKind::Public | RouteKind::PublicOnly => {
            public_top_bar(ctx, data_shared);
            public_footer(ctx, data_shared);
        }
        RouteKind::Protected => {
            tenant_top_bar(ctx, data_shared);
            tenant_side_menu(ctx, route, data_shared);
        }
        RouteKind::PlatformAdmin => {
            tenant_top_bar(ctx, data_shared);
            admin_side_menu(ctx, route, data_shared);
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(route.title());
                ui.separator();
                add_page(ui, data_shared);
            });
    });
}

fn public_top_bar(ctx: &egui::Context, data_shared: &mut DataShared) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();
            if ui.button("OfficeHub").clicked() {
                data_shared.navigate(Route::Landing);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if data_shared.session.is_authenticated() {
                    if ui.button("Go to Dashboard").clicked() {
                        data_shared.navigate(Route::TENANT_ROOT);
                    }
                } else {
                    if ui.button("Start Free Trial").clicked() {
                        data_shared.navigate(Route::Signup);
                    }
                    if ui.button("Login").clicked() {
                        data_shared.navigate(Route::Login);
                    }
                }
            });
        });
    });
}

fn public_footer(ctx: &egui::Context, data_shared: &mut DataShared) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for route in PUBLIC_FOOTER {
                if ui.link(route.title()).clicked() {
                    data_shared.navigate(route);
                }
            }
            egui::warn_if_debug_build(ui);
        });
    });
}

fn tenant_top_bar(ctx: &egui::Context, data_shared: &mut DataShared) {
    let banner = data_shared
        .session
        .organization()
        .and_then(|org| trial_banner_text(org, Utc::now()));
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();
            match data_shared.session.organization() {
                Some(org) => ui.strong(&org.name),
                None => ui.strong("OfficeHub"),
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    data_shared.logout();
                    return;
                }
                if let Some(identity) = data_shared.session.identity() {
                    let role = identity.role;
                    ui.label(&identity.display_name()).on_hover_text(role.to_string());
                }
            });
        });
        if let Some(banner) = banner {
            ui.colored_label(ui.visuals().warn_fg_color, banner);
        }
    });
}

fn tenant_side_menu(ctx: &egui::Context, route: Route, data_shared: &mut DataShared) {
    let items = visible_menu(
        data_shared.session.role(),
        data_shared.session.is_platform_admin(),
    );
    egui::SidePanel::left("side_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                for item in items {
                    if ui.selectable_label(item.route == route, item.label).clicked() {
                        data_shared.navigate(item.route);
                    }
                }
            });
        });
}

fn admin_side_menu(ctx: &egui::Context, route: Route, data_shared: &mut DataShared) {
    egui::SidePanel::left("side_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                for item in ADMIN_MENU {
                    if ui.selectable_label(item == route, item.title()).clicked() {
                        data_shared.navigate(item);
                    }
                }
                ui.separator();
                if ui.button("Back to Office").clicked() {
                    data_shared.navigate(Route::TENANT_ROOT);
                }
            });
        });
}

fn trial_banner_text(organization: &Organization, now: DateTime<Utc>) -> Option<String> {
    if !organization.subscription_status.is_trial() {
        return None;
    }
    Some(match organization.trial_days_left(now) {
        None => "You are on a free trial".to_string(),
        Some(0) => "Your free trial has ended. Subscribe to keep using OfficeHub".to_string(),
        Some(1) => "1 day left in your free trial".to_string(),
        Some(days) => format!("{days} days left in your free trial"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use officehub_shared::uac::SubscriptionStatus;
    use rstest::rstest;

    use super::*;

    fn organization(status: SubscriptionStatus, ends_in_days: Option<i64>) -> Organization {
        let now = now();
        Organization {
            id: 1.into(),
            name: "Acme Accounting".into(),
            subscription_status: status,
            trial_ends_at: ends_in_days.map(|days| now + TimeDelta::days(days) + TimeDelta::hours(1)),
            email: None,
            phone: None,
            address: None,
            tax_id: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-06T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[rstest]
    #[case::active(SubscriptionStatus::Active, Some(3), None)]
    #[case::no_end_date(SubscriptionStatus::Trial, None, Some("You are on a free trial"))]
    #[case::one_day(SubscriptionStatus::Trial, Some(1), Some("1 day left in your free trial"))]
    #[case::many_days(SubscriptionStatus::Trial, Some(9), Some("9 days left in your free trial"))]
    #[case::ended(
        SubscriptionStatus::Trial,
        Some(-3),
        Some("Your free trial has ended. Subscribe to keep using OfficeHub")
    )]
    fn trial_banner(
        #[case] status: SubscriptionStatus,
        #[case] ends_in_days: Option<i64>,
        #[case] expected: Option<&str>,
    ) {
        // Arrange
        let org = organization(status, ends_in_days);

        // Act
        let actual = trial_banner_text(&org, now());

        // Assert
        assert_eq!(actual.as_deref(), expected);
    }

    #[test]
    fn admin_menu_only_has_admin_routes() {
        for route in ADMIN_MENU {
            assert_eq!(route.kind(), RouteKind::PlatformAdmin);
        }
    }
}
