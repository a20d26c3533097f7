use super::{Identity, Organization, TokenPair};

/// Body returned by the server for a successful login or signup
#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: Identity,
    #[serde(default)]
    pub organization: Option<Organization>,
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;

    use super::*;
    use crate::uac::Role;

    #[test]
    fn parse_login_body() {
        // Arrange
        let body = r#"{
            "access": "a.b.c",
            "refresh": "d.e.f",
            "user": {
                "id": 3,
                "email": "jo@example.com",
                "first_name": "Jo",
                "last_name": "Bloggs",
                "role": "PARTNER",
                "is_platform_admin": false
            },
            "organization": {"id": 9, "name": "Bloggs & Co", "subscription_status": "TRIAL"}
        }"#;

        // Act
        let actual: LoginResponse = serde_json::from_str(body).unwrap();

        // Assert
        assert_eq!(actual.tokens.access.expose_secret(), "a.b.c");
        assert_eq!(actual.tokens.refresh.expose_secret(), "d.e.f");
        assert_eq!(actual.user.role, Role::Partner);
        assert_eq!(actual.organization.unwrap().name, "Bloggs & Co");
    }

    #[test]
    fn organization_is_optional() {
        let body = r#"{"access":"a","refresh":"r","user":{"id":1,"email":"p@x.io","role":"ADMIN","is_platform_admin":true}}"#;
        let actual: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(actual.organization.is_none());
        assert!(actual.user.is_platform_admin);
    }
}
