//! Short lived messages shown on top of whatever page is active

use officehub_shared::const_config::client::CLIENT_NOTIFICATION_LIFETIME;
use officehub_time::Timestamp;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    created: Timestamp,
}

#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notification {
    fn is_expired(&self, now: Timestamp) -> bool {
        now.seconds_since(self.created)
            .is_some_and(|age| age >= CLIENT_NOTIFICATION_LIFETIME)
    }
}

impl Notifications {
    pub fn push_error<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        warn!(message, "error notification");
        self.push_at(NotificationKind::Error, message, Timestamp::now());
    }

    pub fn push_success<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        info!(message, "success notification");
        self.push_at(NotificationKind::Success, message, Timestamp::now());
    }

    fn push_at(&mut self, kind: NotificationKind, message: String, created: Timestamp) {
        self.items.push(Notification {
            kind,
            message,
            created,
        });
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn prune(&mut self, now: Timestamp) {
        self.items.retain(|x| !x.is_expired(now));
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(Timestamp::now());
        if self.items.is_empty() {
            return;
        }
        let mut to_dismiss = None;
        egui::Area::new(egui::Id::new("notifications"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (i, item) in self.items.iter().enumerate() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            let color = match item.kind {
                                NotificationKind::Error => ui.visuals().error_fg_color,
                                NotificationKind::Success => egui::Color32::DARK_GREEN,
                            };
                            ui.colored_label(color, &item.message);
                            if ui.small_button("x").clicked() {
                                to_dismiss = Some(i);
                            }
                        });
                    });
                }
            });
        if let Some(i) = to_dismiss {
            self.dismiss(i);
        }
        // Wake up in time to remove the oldest one
        ctx.request_repaint_after(CLIENT_NOTIFICATION_LIFETIME.into());
    }
}

#[cfg(test)]
mod tests {
    use officehub_time::Seconds;

    use super::*;

    #[test]
    fn expire_after_lifetime() {
        // Arrange
        let start = Timestamp::from(1_700_000_000u32);
        let mut notifications = Notifications::default();
        notifications.push_at(NotificationKind::Error, "first".into(), start);
        notifications.push_at(
            NotificationKind::Success,
            "second".into(),
            start + Seconds::new(3),
        );

        // Act
        notifications.prune(start + CLIENT_NOTIFICATION_LIFETIME);

        // Assert
        assert_eq!(notifications.items().len(), 1);
        assert_eq!(notifications.items()[0].message, "second");
    }

    #[test]
    fn kept_before_lifetime() {
        // Arrange
        let start = Timestamp::from(1_700_000_000u32);
        let mut notifications = Notifications::default();
        notifications.push_at(NotificationKind::Error, "boom".into(), start);

        // Act
        notifications.prune(start + Seconds::new(1));

        // Assert
        assert!(!notifications.is_empty());
    }

    #[test]
    fn dismiss_out_of_range_is_ignored() {
        // Arrange
        let mut notifications = Notifications::default();
        notifications.push_success("saved");

        // Act
        notifications.dismiss(5);
        notifications.dismiss(0);

        // Assert
        assert!(notifications.is_empty());
    }
}
