use std::fmt::Display;

use egui::WidgetText;

/// The per-tenant role of a user
///
/// Orthogonal to the platform admin flag on [`super::Identity`]
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumCount,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Partner,
    Manager,
    Staff,
}

impl Role {
    /// Admin level access is granted to [`Role::Admin`] and [`Role::Partner`]
    #[must_use]
    pub fn has_admin_access(&self) -> bool {
        match self {
            Role::Admin | Role::Partner => true,
            Role::Manager | Role::Staff => false,
        }
    }

    /// Management access is admin level access plus [`Role::Manager`]
    #[must_use]
    pub fn has_management_access(&self) -> bool {
        match self {
            Role::Admin | Role::Partner | Role::Manager => true,
            Role::Staff => false,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_text = match self {
            Role::Admin => "Admin",
            Role::Partner => "Partner",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        };
        write!(f, "{display_text}")
    }
}

impl From<&Role> for WidgetText {
    fn from(value: &Role) -> Self {
        value.to_string().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::admin(Role::Admin, true, true)]
    #[case::partner(Role::Partner, true, true)]
    #[case::manager(Role::Manager, false, true)]
    #[case::staff(Role::Staff, false, false)]
    fn access_levels(#[case] role: Role, #[case] admin: bool, #[case] management: bool) {
        assert_eq!(role.has_admin_access(), admin);
        assert_eq!(role.has_management_access(), management);
    }

    #[rstest]
    #[case::admin("\"ADMIN\"", Role::Admin)]
    #[case::partner("\"PARTNER\"", Role::Partner)]
    #[case::manager("\"MANAGER\"", Role::Manager)]
    #[case::staff("\"STAFF\"", Role::Staff)]
    fn parses_wire_names(#[case] json: &str, #[case] expected: Role) {
        let actual: Role = serde_json::from_str(json).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::lower_case("\"admin\"")]
    #[case::unknown("\"OWNER\"")]
    #[case::empty("\"\"")]
    fn rejects_unknown_roles(#[case] json: &str) {
        let actual: Result<Role, _> = serde_json::from_str(json);
        assert!(actual.is_err(), "{json} should not parse but got {actual:?}");
    }
}
