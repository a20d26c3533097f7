//! Who is logged in, for which organization and with what role

mod storage;

use officehub_shared::{
    const_config::storage::{
        STORAGE_ALL_SESSION_KEYS, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_ORGANIZATION,
        STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_USER,
    },
    log_err_as_warn,
    uac::{Identity, IdentityUpdate, Organization, Role, TokenPair},
};
use secrecy::{ExposeSecret as _, SecretString};
use tracing::{debug, info, instrument, warn};

use crate::routing::GateState;

pub use storage::{MemoryStorage, SessionStorage, StorageError};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// In memory view of the session
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Option<Identity>,
    pub organization: Option<Organization>,
    access_token: Option<SecretString>,
    pub is_authenticated: bool,
    /// True until the persisted session has been read
    pub is_loading: bool,
}

/// Single writer of the session, both in memory and persisted
///
/// Nothing here reports failure to the caller. Storage failures are logged and
/// unreadable persisted data is treated as being logged out.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    is_initialized: bool,
}

impl Session {
    fn loading() -> Self {
        Self {
            identity: None,
            organization: None,
            access_token: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    fn logged_out() -> Self {
        Self {
            is_loading: false,
            ..Self::loading()
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::loading(),
            is_initialized: false,
        }
    }

    /// Loads the persisted session. Only the first call has any effect.
    ///
    /// Authenticated only if both the access token and the user are present and
    /// the user can be parsed. On any other outcome all session keys are
    /// removed. An organization that fails to parse is dropped on its own.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        if self.is_initialized {
            warn!("session store already initialized, ignoring");
            return;
        }
        self.is_initialized = true;

        let token = self
            .storage
            .get(STORAGE_KEY_ACCESS_TOKEN)
            .filter(|x| !x.is_empty());
        let user = self.storage.get(STORAGE_KEY_USER);

        let (Some(token), Some(user)) = (token, user) else {
            debug!("no persisted session found");
            self.clear_persisted();
            self.session = Session::logged_out();
            return;
        };

        let identity = match serde_json::from_str::<Identity>(&user) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(?e, "persisted user is unreadable, discarding session");
                self.clear_persisted();
                self.session = Session::logged_out();
                return;
            }
        };

        let organization = self.load_organization();
        info!(user_id = %identity.id, has_org = organization.is_some(), "session restored");
        self.session = Session {
            identity: Some(identity),
            organization,
            access_token: Some(SecretString::from(token)),
            is_authenticated: true,
            is_loading: false,
        };
    }

    fn load_organization(&mut self) -> Option<Organization> {
        let text = self.storage.get(STORAGE_KEY_ORGANIZATION)?;
        match serde_json::from_str(&text) {
            Ok(organization) => Some(organization),
            Err(e) => {
                warn!(?e, "persisted organization is unreadable, dropping it");
                log_err_as_warn!(self.storage.remove(STORAGE_KEY_ORGANIZATION));
                None
            }
        }
    }

    /// Replaces the session with a newly authenticated one
    ///
    /// The caller is trusted to pass what the server returned
    #[instrument(skip(self, tokens))]
    pub fn login(
        &mut self,
        identity: Identity,
        tokens: TokenPair,
        organization: Option<Organization>,
    ) {
        self.persist(STORAGE_KEY_ACCESS_TOKEN, tokens.access.expose_secret());
        self.persist(STORAGE_KEY_REFRESH_TOKEN, tokens.refresh.expose_secret());
        self.persist_json(STORAGE_KEY_USER, &identity);
        match organization.as_ref() {
            Some(org) => self.persist_json(STORAGE_KEY_ORGANIZATION, org),
            None => log_err_as_warn!(self.storage.remove(STORAGE_KEY_ORGANIZATION)),
        }
        self.is_initialized = true;
        self.session = Session {
            identity: Some(identity),
            organization,
            access_token: Some(tokens.access),
            is_authenticated: true,
            is_loading: false,
        };
    }

    /// Safe to call when already logged out
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.clear_persisted();
        self.is_initialized = true;
        self.session = Session::logged_out();
    }

    /// Shallow merges `update` into the identity and persists the result
    #[instrument(skip(self))]
    pub fn update_identity(&mut self, update: IdentityUpdate) {
        let Some(identity) = self.session.identity.as_mut() else {
            warn!("attempt to update identity while logged out");
            return;
        };
        identity.apply(update);
        let identity = identity.clone();
        self.persist_json(STORAGE_KEY_USER, &identity);
    }

    #[instrument(skip(self))]
    pub fn update_organization(&mut self, organization: Organization) {
        if !self.session.is_authenticated {
            warn!("attempt to update organization while logged out");
            return;
        }
        self.persist_json(STORAGE_KEY_ORGANIZATION, &organization);
        self.session.organization = Some(organization);
    }

    fn clear_persisted(&mut self) {
        for key in STORAGE_ALL_SESSION_KEYS {
            log_err_as_warn!(self.storage.remove(key));
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        log_err_as_warn!(self.storage.set(key, value));
    }

    fn persist_json<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => self.persist(key, &text),
            Err(e) => warn!(?e, key, "failed to serialize value for storage"),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.session.organization.as_ref()
    }

    pub fn access_token(&self) -> Option<&SecretString> {
        self.session.access_token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|x| x.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    pub fn has_admin_access(&self) -> bool {
        self.role().is_some_and(|x| x.has_admin_access())
    }

    pub fn has_management_access(&self) -> bool {
        self.role().is_some_and(|x| x.has_management_access())
    }

    pub fn is_platform_admin(&self) -> bool {
        self.identity().is_some_and(|x| x.is_platform_admin)
    }

    pub fn is_trial(&self) -> bool {
        self.organization()
            .is_some_and(|x| x.subscription_status.is_trial())
    }

    pub fn is_active_or_trial(&self) -> bool {
        self.organization()
            .is_some_and(|x| x.subscription_status.is_active_or_trial())
    }

    pub fn gate_state(&self) -> GateState {
        GateState {
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
            is_platform_admin: self.is_platform_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use officehub_shared::uac::SubscriptionStatus;
    use rstest::rstest;

    use super::*;

    fn identity(role: Role, is_platform_admin: bool) -> Identity {
        Identity {
            id: 12.into(),
            email: "ana@firm.example".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            role,
            is_platform_admin,
            phone: None,
        }
    }

    fn organization(status: SubscriptionStatus) -> Organization {
        Organization {
            id: 3.into(),
            name: "Silva Accounting".into(),
            subscription_status: status,
            trial_ends_at: None,
            email: None,
            phone: None,
            address: None,
            tax_id: None,
        }
    }

    fn logged_in_storage() -> MemoryStorage {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.login(
            identity(Role::Manager, false),
            TokenPair::new("access", "refresh"),
            Some(organization(SubscriptionStatus::Active)),
        );
        storage
    }

    #[test]
    fn starts_loading() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn empty_storage_initializes_logged_out() {
        // Arrange
        let mut store = SessionStore::new(MemoryStorage::new());

        // Act
        store.initialize();

        // Assert
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        assert!(store.identity().is_none());
    }

    #[test]
    fn restores_persisted_session() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage);

        // Act
        store.initialize();

        // Assert
        assert!(store.is_authenticated());
        assert!(!store.is_loading());
        assert_eq!(store.role(), Some(Role::Manager));
        assert_eq!(store.access_token().unwrap().expose_secret(), "access");
        assert_eq!(store.organization().unwrap().name, "Silva Accounting");
    }

    #[rstest]
    #[case::not_json("{not json")]
    #[case::unknown_role(r#"{"id":1,"email":"a@b.co","role":"OWNER"}"#)]
    #[case::missing_fields(r#"{"email":"a@b.co"}"#)]
    fn corrupt_identity_discards_everything(#[case] user: &str) {
        // Arrange
        let mut storage = logged_in_storage();
        storage.set(STORAGE_KEY_USER, user).unwrap();
        let mut store = SessionStore::new(storage.clone());

        // Act
        store.initialize();

        // Assert
        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
        for key in STORAGE_ALL_SESSION_KEYS {
            assert!(!storage.contains_key(key), "{key} should have been cleared");
        }
    }

    #[rstest]
    #[case::no_token(STORAGE_KEY_ACCESS_TOKEN)]
    #[case::no_user(STORAGE_KEY_USER)]
    fn both_token_and_user_required(#[case] missing: &str) {
        // Arrange
        let mut storage = logged_in_storage();
        storage.remove(missing).unwrap();
        let mut store = SessionStore::new(storage.clone());

        // Act
        store.initialize();

        // Assert
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn corrupt_organization_is_dropped_alone() {
        // Arrange
        let mut storage = logged_in_storage();
        storage.set(STORAGE_KEY_ORGANIZATION, "[]").unwrap();
        let mut store = SessionStore::new(storage.clone());

        // Act
        store.initialize();

        // Assert
        assert!(store.is_authenticated());
        assert!(store.organization().is_none());
        assert!(!storage.contains_key(STORAGE_KEY_ORGANIZATION));
        assert!(storage.contains_key(STORAGE_KEY_USER));
    }

    #[test]
    fn identity_without_organization_stays_logged_in() {
        // Arrange
        let mut storage = logged_in_storage();
        storage.remove(STORAGE_KEY_ORGANIZATION).unwrap();
        let mut store = SessionStore::new(storage);

        // Act
        store.initialize();

        // Assert
        assert!(store.is_authenticated());
        assert!(!store.is_trial());
        assert!(!store.is_active_or_trial());
    }

    #[test]
    fn initialize_runs_once() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();
        store.logout();
        let mut other = SessionStore::new(storage.clone());
        other.login(
            identity(Role::Admin, false),
            TokenPair::new("a2", "r2"),
            None,
        );

        // Act
        store.initialize();

        // Assert
        assert!(!store.is_authenticated(), "second initialize should be ignored");
    }

    #[test]
    fn logout_then_reload_is_logged_out() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();
        assert!(store.is_authenticated());

        // Act
        store.logout();
        let mut reloaded = SessionStore::new(storage.clone());
        reloaded.initialize();

        // Assert
        assert!(!reloaded.is_authenticated());
        assert!(reloaded.identity().is_none());
        assert!(reloaded.organization().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
    }

    #[test]
    fn login_without_organization_removes_stale_one() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage.clone());

        // Act
        store.login(
            identity(Role::Admin, true),
            TokenPair::new("a", "r"),
            None,
        );

        // Assert
        assert!(store.is_authenticated());
        assert!(store.organization().is_none());
        assert!(!storage.contains_key(STORAGE_KEY_ORGANIZATION));
        assert_eq!(storage.get(STORAGE_KEY_REFRESH_TOKEN).unwrap(), "r");
    }

    #[test]
    fn update_identity_merges_and_persists() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();

        // Act
        store.update_identity(IdentityUpdate {
            first_name: Some("Beatriz".into()),
            ..Default::default()
        });

        // Assert
        let mut reloaded = SessionStore::new(storage);
        reloaded.initialize();
        let actual = reloaded.identity().unwrap();
        assert_eq!(actual.first_name, "Beatriz");
        assert_eq!(actual.last_name, "Silva");
        assert_eq!(actual.role, Role::Manager);
    }

    #[test]
    fn update_organization_replaces_and_persists() {
        // Arrange
        let storage = logged_in_storage();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();

        // Act
        store.update_organization(organization(SubscriptionStatus::Trial));

        // Assert
        assert!(store.is_trial());
        let mut reloaded = SessionStore::new(storage);
        reloaded.initialize();
        assert!(reloaded.is_trial());
    }

    #[test]
    fn updates_ignored_when_logged_out() {
        // Arrange
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store.initialize();

        // Act
        store.update_identity(IdentityUpdate {
            first_name: Some("X".into()),
            ..Default::default()
        });
        store.update_organization(organization(SubscriptionStatus::Active));

        // Assert
        assert!(store.identity().is_none());
        assert!(store.organization().is_none());
        assert!(storage.is_empty());
    }

    #[rstest]
    #[case::admin(Role::Admin, true, true)]
    #[case::partner(Role::Partner, true, true)]
    #[case::manager(Role::Manager, false, true)]
    #[case::staff(Role::Staff, false, false)]
    fn role_predicates(#[case] role: Role, #[case] admin: bool, #[case] management: bool) {
        // Arrange
        let mut store = SessionStore::new(MemoryStorage::new());

        // Act
        store.login(identity(role, false), TokenPair::new("a", "r"), None);

        // Assert
        assert!(store.has_role(role));
        assert_eq!(store.has_admin_access(), admin);
        assert_eq!(store.has_management_access(), management);
        assert!(!store.is_platform_admin());
    }

    #[test]
    fn gate_state_reflects_session() {
        // Arrange
        let mut store = SessionStore::new(MemoryStorage::new());
        assert!(store.gate_state().is_loading);

        // Act
        store.login(identity(Role::Staff, true), TokenPair::new("a", "r"), None);

        // Assert
        assert_eq!(
            store.gate_state(),
            GateState {
                is_authenticated: true,
                is_loading: false,
                is_platform_admin: true
            }
        );
    }
}
