//! Static documents, shown to everyone whether logged in or not

use officehub_client_core::Route;

use super::DisplayablePage;
use crate::{displayable_page_common, DataShared};

type Document = &'static [(&'static str, &'static str)];

const PRIVACY: Document = &[
    (
        "What we collect",
        "Account details you provide, the records your office enters and basic usage logs.",
    ),
    (
        "How it is used",
        "Only to provide the service to your organization. We do not sell personal data.",
    ),
    (
        "Your rights",
        "You may request a copy or deletion of your data by contacting support.",
    ),
];

const TERMS: Document = &[
    (
        "Accounts",
        "The organization owner is responsible for the users they invite.",
    ),
    (
        "Trials and billing",
        "Trials end automatically. Continued use requires an active subscription.",
    ),
    (
        "Acceptable use",
        "Do not use the service for unlawful purposes or to store data you may not hold.",
    ),
];

const COOKIES: Document = &[
    (
        "Essential storage",
        "The application stores your session in the browser so you stay signed in.",
    ),
    (
        "Preferences",
        "Interface preferences such as the theme are remembered on this device.",
    ),
];

fn show_document(ui: &mut egui::Ui, document: Document) {
    for (heading, body) in document {
        ui.add_space(8.0);
        ui.strong(*heading);
        ui.label(*body);
    }
}

macro_rules! legal_page {
    ($name: ident, $route: expr, $document: expr) => {
        #[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
        pub struct $name {}

        impl DisplayablePage for $name {
            displayable_page_common!($route, reset_all);

            fn show(&mut self, ui: &mut egui::Ui, _data_shared: &mut DataShared) {
                show_document(ui, $document);
            }
        }
    };
}

legal_page!(UiPrivacy, Route::Privacy, PRIVACY);
legal_page!(UiTerms, Route::Terms, TERMS);
legal_page!(UiCookies, Route::Cookies, COOKIES);
