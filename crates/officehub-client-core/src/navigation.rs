use officehub_shared::uac::Role;

use crate::routing::Route;

/// Entry of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
    pub roles: &'static [Role],
    /// Also requires the platform admin flag on top of the role
    pub requires_platform_admin: bool,
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Partner, Role::Manager, Role::Staff];
const MANAGEMENT: &[Role] = &[Role::Admin, Role::Partner, Role::Manager];
const ADMIN_LEVEL: &[Role] = &[Role::Admin, Role::Partner];

const fn item(label: &'static str, route: Route, roles: &'static [Role]) -> MenuItem {
    MenuItem {
        label,
        route,
        roles,
        requires_platform_admin: false,
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    item("Dashboard", Route::Dashboard, ALL_ROLES),
    item("Tasks", Route::Tasks, ALL_ROLES),
    item("Clients", Route::Clients, ALL_ROLES),
    item("Reports", Route::Reports, MANAGEMENT),
    item("Work Types", Route::WorkTypes, MANAGEMENT),
    item("Templates", Route::Templates, MANAGEMENT),
    item("Employees", Route::Employees, ADMIN_LEVEL),
    item("Credential Vault", Route::Credentials, MANAGEMENT),
    item("Google Sync", Route::GoogleSync, ADMIN_LEVEL),
    item("Settings", Route::Settings, ADMIN_LEVEL),
    item("Profile", Route::Profile, ALL_ROLES),
    item("Help", Route::Help, ALL_ROLES),
    MenuItem {
        label: "Platform Admin",
        route: Route::AdminDashboard,
        roles: ADMIN_LEVEL,
        requires_platform_admin: true,
    },
];

impl MenuItem {
    pub fn is_visible(&self, role: Role, is_platform_admin: bool) -> bool {
        self.roles.contains(&role) && (is_platform_admin || !self.requires_platform_admin)
    }
}

/// Menu entries the role may see, evaluated on every call
pub fn visible_menu(role: Option<Role>, is_platform_admin: bool) -> Vec<&'static MenuItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    MENU_ITEMS
        .iter()
        .filter(|item| item.is_visible(role, is_platform_admin))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    use super::*;

    fn labels(role: Option<Role>, is_platform_admin: bool) -> Vec<&'static str> {
        visible_menu(role, is_platform_admin)
            .into_iter()
            .map(|x| x.label)
            .collect()
    }

    #[test]
    fn items_absent_for_roles_not_allowed() {
        for role in Role::iter() {
            for is_platform_admin in [false, true] {
                let visible = visible_menu(Some(role), is_platform_admin);
                for item in MENU_ITEMS {
                    if !item.roles.contains(&role) {
                        assert!(
                            !visible.contains(&item),
                            "{} should be hidden from {role:?}",
                            item.label
                        );
                    }
                }
            }
        }
    }

    #[rstest]
    #[case::admin(Role::Admin)]
    #[case::partner(Role::Partner)]
    fn platform_admin_link_needs_flag(#[case] role: Role) {
        assert!(!labels(Some(role), false).contains(&"Platform Admin"));
        assert!(labels(Some(role), true).contains(&"Platform Admin"));
    }

    #[rstest]
    #[case::manager(Role::Manager)]
    #[case::staff(Role::Staff)]
    fn platform_admin_link_never_for_other_roles(#[case] role: Role) {
        assert!(!labels(Some(role), true).contains(&"Platform Admin"));
    }

    #[test]
    fn staff_menu() {
        assert_eq!(
            labels(Some(Role::Staff), false),
            vec!["Dashboard", "Tasks", "Clients", "Profile", "Help"]
        );
    }

    #[test]
    fn no_role_no_menu() {
        assert!(visible_menu(None, true).is_empty());
    }

    #[test]
    fn menu_only_links_to_gated_routes() {
        use crate::routing::RouteKind;
        for item in MENU_ITEMS {
            let expected = if item.requires_platform_admin {
                RouteKind::PlatformAdmin
            } else {
                RouteKind::Protected
            };
            assert_eq!(item.route.kind(), expected, "{}", item.label);
        }
    }
}
