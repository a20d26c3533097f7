use egui_extras::{Column, TableBuilder, TableRow};
use secrecy::{ExposeSecret as _, SecretString};

pub fn get_text_height(ui: &mut egui::Ui) -> f32 {
    egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y)
}

pub fn ui_password_edit(
    ui: &mut egui::Ui,
    password: &mut SecretString,
    hint_text: &str,
) -> egui::Response {
    let mut temp = password.expose_secret().to_owned();
    let result = ui.add(
        egui::TextEdit::singleline(&mut temp)
            .password(true)
            .hint_text(hint_text),
    );
    *password = SecretString::from(temp);
    result
}

pub fn readonly_checkbox_no_text(ui: &mut egui::Ui, mut value: bool) {
    ui.add_enabled(false, egui::Checkbox::without_text(&mut value));
}

/// Text edit for a value the server treats as absent when empty
pub fn ui_optional_text_edit(
    ui: &mut egui::Ui,
    value: &mut Option<String>,
    hint_text: &str,
) -> egui::Response {
    let mut temp = value.clone().unwrap_or_default();
    let result = ui.add(egui::TextEdit::singleline(&mut temp).hint_text(hint_text));
    if result.changed() {
        *value = if temp.trim().is_empty() {
            None
        } else {
            Some(temp)
        };
    }
    result
}

pub fn display_opt(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => "-",
    }
}

/// Striped table with one row per item, the last column takes what space is
/// left
pub fn ui_table<T, F>(
    ui: &mut egui::Ui,
    id_salt: &str,
    headers: &[&str],
    items: &[T],
    mut add_row: F,
) where
    F: FnMut(&mut TableRow<'_, '_>, &T),
{
    if items.is_empty() {
        ui.label("Nothing to show yet");
        return;
    }
    let text_height = get_text_height(ui);
    ui.push_id(id_salt, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for i in 0..headers.len() {
            table = if i + 1 == headers.len() {
                table.column(Column::remainder().at_least(60.0))
            } else {
                table.column(Column::auto().at_least(60.0))
            };
        }
        table
            .header(text_height, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, items.len(), |mut row| {
                    let item = &items[row.index()];
                    add_row(&mut row, item);
                });
            });
    });
}

/// Asks for confirmation before destructive actions, returns true once
/// confirmed
///
/// Only one `key` (usually the row's id) can be waiting for confirmation
pub fn ui_confirm_button<K: PartialEq + Copy>(
    ui: &mut egui::Ui,
    caption: &str,
    key: K,
    armed: &mut Option<K>,
) -> bool {
    if *armed != Some(key) {
        if ui.button(caption).clicked() {
            *armed = Some(key);
        }
        return false;
    }
    if ui.button("Confirm").clicked() {
        *armed = None;
        return true;
    }
    if ui.button("Cancel").clicked() {
        *armed = None;
    }
    false
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::none(None, "-")]
    #[case::empty(Some(""), "-")]
    #[case::value(Some("Acme"), "Acme")]
    fn display_optional(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(display_opt(value), expected);
    }
}
