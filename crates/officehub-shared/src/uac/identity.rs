use std::fmt::Display;

use egui::WidgetText;

use crate::{errors::ConversionError, id::DbId};

use super::Role;

/// The authenticated user as returned on login and persisted between runs
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: DbId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    /// Grants access to the provider's administration area independent of
    /// `role`
    #[serde(default)]
    pub is_platform_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Fields of [`Identity`] that may be changed from the profile page
///
/// `Some` are the ones changed
#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct IdentityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Default, Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub const MAX_LENGTH: usize = 60;
}

impl Identity {
    /// "First Last", or the email when no name was provided
    pub fn display_name(&self) -> DisplayName {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        DisplayName::try_from(full.to_string())
            .unwrap_or_else(|_| DisplayName(self.email.clone()))
    }

    /// Shallow merge of the fields that are set in `update`
    pub fn apply(&mut self, update: IdentityUpdate) {
        let IdentityUpdate {
            first_name,
            last_name,
            email,
            phone,
        } = update;
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if phone.is_some() {
            self.phone = phone;
        }
    }
}

impl IdentityUpdate {
    /// Returns None if there are no differences otherwise sets the changed
    /// fields to `Some`
    pub fn from_diff(from: &Identity, to: &Identity) -> Option<Self> {
        let changed = |a: &String, b: &String| (a != b).then(|| b.clone());
        let result = Self {
            first_name: changed(&from.first_name, &to.first_name),
            last_name: changed(&from.last_name, &to.last_name),
            email: changed(&from.email, &to.email),
            phone: if from.phone == to.phone {
                None
            } else {
                to.phone.clone()
            },
        };
        result.has_changes().then_some(result)
    }

    pub fn has_changes(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
    }

    pub fn is_valid(&self) -> Result<(), ConversionError> {
        if let Some(email) = self.email.as_ref() {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Only a sanity check, the server does the real validation
pub fn validate_email(value: &str) -> Result<(), ConversionError> {
    if value.is_empty() {
        return Err(ConversionError::Empty);
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ConversionError::InvalidEmail(value.to_string())),
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }
}

impl Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&DisplayName> for WidgetText {
    fn from(value: &DisplayName) -> Self {
        (&value.0).into()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn jo() -> Identity {
        Identity {
            id: 1.into(),
            email: "jo@example.com".into(),
            first_name: "Jo".into(),
            last_name: "Bloggs".into(),
            role: Role::Staff,
            is_platform_admin: false,
            phone: None,
        }
    }

    #[test]
    fn apply_only_touches_set_fields() {
        // Arrange
        let mut actual = jo();
        let update = IdentityUpdate {
            last_name: Some("Smith".into()),
            ..Default::default()
        };

        // Act
        actual.apply(update);

        // Assert
        assert_eq!(actual.first_name, "Jo");
        assert_eq!(actual.last_name, "Smith");
        assert_eq!(actual.email, "jo@example.com");
        assert_eq!(actual.role, Role::Staff);
    }

    #[test]
    fn diff_of_identical_is_none() {
        assert!(IdentityUpdate::from_diff(&jo(), &jo()).is_none());
    }

    #[test]
    fn diff_round_trips_through_apply() {
        // Arrange
        let from = jo();
        let mut to = jo();
        to.email = "jo@bloggs.co".into();
        to.phone = Some("555-0101".into());

        // Act
        let diff = IdentityUpdate::from_diff(&from, &to).unwrap();
        let mut actual = from.clone();
        actual.apply(diff);

        // Assert
        assert_eq!(actual, to);
    }

    #[rstest]
    #[case::full_name(jo(), "Jo Bloggs")]
    #[case::no_last_name(Identity { last_name: String::new(), ..jo() }, "Jo")]
    #[case::no_name(Identity { first_name: String::new(), last_name: String::new(), ..jo() }, "jo@example.com")]
    fn display_name(#[case] identity: Identity, #[case] expected: &str) {
        assert_eq!(identity.display_name().to_string(), expected);
    }

    #[rstest]
    #[case::empty("", ConversionError::Empty)]
    #[case::no_at("jo.example.com", ConversionError::InvalidEmail("jo.example.com".into()))]
    #[case::no_domain_dot("jo@localhost", ConversionError::InvalidEmail("jo@localhost".into()))]
    fn illegal_emails(#[case] email: &str, #[case] expected: ConversionError) {
        assert_eq!(validate_email(email).unwrap_err(), expected);
    }
}
