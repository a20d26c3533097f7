use anyhow::Context as _;
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use officehub_shared::{
    const_config::{
        client::CLIENT_DEFAULT_SERVER_ADDRESS,
        path::{ResolvedPath, PATH_LOGIN, PATH_SIGNUP},
    },
    req_args::{LoginReqArgs, SignupReqArgs},
    uac::LoginResponse,
    ListEnvelope,
};
use reqwest::Method;
use secrecy::{ExposeSecret as _, SecretString};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::errors::{find_api_error, ApiError, ApiErrorBody};

pub mod api;

/// Used for requests that do not send any arguments
const NO_ARGS: Option<&()> = None;

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<Mutex<ClientInner>>,
}

struct ClientInner {
    server_address: String,
    access_token: Option<SecretString>,
    /// Set when the server answered 401 to a request that carried a token
    is_session_rejected: bool,
}

impl Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("server_address", &self.server_address)
            .field("has_access_token", &self.access_token.is_some())
            .field("is_session_rejected", &self.is_session_rejected)
            .finish()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(CLIENT_DEFAULT_SERVER_ADDRESS.to_string())
    }
}

impl ClientInner {
    #[tracing::instrument]
    fn new(server_address: String) -> Self {
        Self {
            server_address: server_address.trim_end_matches('/').to_string(),
            access_token: None,
            is_session_rejected: false,
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(server_address: String) -> Self {
        let api_client = reqwest::Client::builder()
            .build()
            .expect("Unable to create reqwest client");
        Self {
            api_client,
            inner: Arc::new(Mutex::new(ClientInner::new(server_address))),
        }
    }

    /// Sent as the bearer token on every following request
    pub fn set_access_token(&self, access_token: Option<SecretString>) {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        guard.access_token = access_token;
        guard.is_session_rejected = false;
    }

    /// Returns true once after the server rejected the access token
    pub fn take_session_rejected(&self) -> bool {
        std::mem::take(&mut self.inner.lock().expect("mutex poisoned").is_session_rejected)
    }

    fn note_outcome<T>(&self, had_token: bool, outcome: &anyhow::Result<T>) {
        let Err(e) = outcome else {
            return;
        };
        if had_token && find_api_error(e).is_some_and(ApiError::is_unauthorized) {
            warn!("access token rejected by the server");
            self.inner.lock().expect("mutex poisoned").is_session_rejected = true;
        }
    }

    pub fn has_access_token(&self) -> bool {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .access_token
            .is_some()
    }

    pub fn server_address(&self) -> String {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .server_address
            .clone()
    }

    /// On success the access token is also kept for the following requests.
    /// Persisting the session is left to the caller
    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<LoginResponse>> {
        let args = serde_json::json!({
            "email": args.email,
            "password": args.password.expose_secret(),
        });
        self.send_request_expect_login(PATH_LOGIN.into(), &args, ui_notify)
    }

    /// Creates the organization and signs its first user in
    #[tracing::instrument(skip(ui_notify))]
    pub fn signup<F: UiCallBack>(
        &self,
        args: SignupReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<LoginResponse>> {
        let args = serde_json::json!({
            "organization_name": args.organization_name,
            "first_name": args.first_name,
            "last_name": args.last_name,
            "email": args.email,
            "password": args.password.expose_secret(),
            "password_confirm": args.password_check.expose_secret(),
        });
        self.send_request_expect_login(PATH_SIGNUP.into(), &args, ui_notify)
    }

    fn send_request_expect_login<F: UiCallBack>(
        &self,
        path: ResolvedPath,
        args: &serde_json::Value,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<LoginResponse>> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_login(resp, client).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(path, Some(args), on_done);
        rx
    }

    #[tracing::instrument(skip(args, on_done))]
    // WARNING: Must skip args as it my contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<T, F, O>(&self, path: ResolvedPath, args: Option<&T>, on_done: F)
    where
        T: serde::Serialize + Debug,
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let is_get_method = path.method == Method::GET;
        let mut request = self
            .api_client
            .request(path.method, self.path_to_url(&path.path));
        if let Some(token) = self
            .inner
            .lock()
            .expect("mutex poisoned")
            .access_token
            .as_ref()
        {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(args) = args {
            request = if is_get_method {
                request.query(args)
            } else {
                request.json(args)
            };
        }
        reqwest_cross::fetch(request, on_done)
    }

    fn send_request_expect_json<F, T, U>(
        &self,
        path: impl Into<ResolvedPath>,
        args: Option<&T>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
        U: Send + std::fmt::Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let had_token = self.has_access_token();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body(resp).await;
            client.note_outcome(had_token, &msg);
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(path.into(), args, on_done);
        rx
    }

    /// Collections come back either bare or paginated, both are flattened
    fn send_request_expect_list<F, T, U>(
        &self,
        path: impl Into<ResolvedPath>,
        args: Option<&T>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<U>>>
    where
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
        U: Send + std::fmt::Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let had_token = self.has_access_token();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body::<ListEnvelope<U>>(resp)
                .await
                .map(ListEnvelope::into_vec);
            client.note_outcome(had_token, &msg);
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(path.into(), args, on_done);
        rx
    }

    fn send_request_expect_empty<F, T>(
        &self,
        path: impl Into<ResolvedPath>,
        args: Option<&T>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        T: serde::Serialize + std::fmt::Debug,
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let had_token = self.has_access_token();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_empty(resp).await;
            client.note_outcome(had_token, &msg);
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(path.into(), args, on_done);
        rx
    }

    fn send_request_no_wait<T>(&self, path: impl Into<ResolvedPath>, args: Option<&T>)
    where
        T: serde::Serialize + std::fmt::Debug,
    {
        self.initiate_request(path.into(), args, |_| async {});
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .server_address
        )
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let response = extract_response(response)?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let response = extract_response(response)?;
    if !response.status().is_success() {
        return Err(handle_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
        .context("failed to parse result as json")
}

#[tracing::instrument(ret, err(Debug))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    client: Client,
) -> anyhow::Result<LoginResponse> {
    let login_response: LoginResponse = process_json_body(response).await?;
    client.set_access_token(Some(login_response.tokens.access.clone()));
    Ok(login_response)
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let body = match response.text().await {
        Ok(text) => ApiErrorBody::from_text(text),
        Err(e) => {
            info!("failed to get response body: {e:?}");
            ApiErrorBody::Empty
        }
    };
    ApiError::Status { status, body }.into()
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> Result<reqwest::Response, ApiError> {
    response.map_err(|e| {
        info!("Response is err: {e:#?}");
        ApiError::Network(e.to_string())
    })
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_on_server_address_is_ignored() {
        // Arrange
        let client = Client::new("https://office.example.com/".to_string());

        // Act
        let actual = client.path_to_url("/api/tasks/");

        // Assert
        assert_eq!(actual, "https://office.example.com/api/tasks/");
    }

    #[test]
    fn access_token_is_not_logged() {
        // Arrange
        let client = Client::default();
        client.set_access_token(Some("secret-token".to_string().into()));

        // Act
        let actual = format!("{client:?}");

        // Assert
        assert!(client.has_access_token());
        assert!(!actual.contains("secret-token"));
        assert!(actual.contains("has_access_token: true"));
    }

    #[test]
    fn rejected_token_is_reported_once() {
        // Arrange
        let client = Client::default();
        let rejected: anyhow::Result<()> = Err(ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: ApiErrorBody::Empty,
        }
        .into());

        // Act
        client.note_outcome(true, &rejected);

        // Assert
        assert!(client.take_session_rejected());
        assert!(!client.take_session_rejected());
    }

    #[test]
    fn unauthorized_without_token_is_not_a_rejected_session() {
        // Arrange
        let client = Client::default();
        let failed_login: anyhow::Result<()> = Err(ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: ApiErrorBody::from_text(r#"{"detail":"Invalid credentials"}"#.to_string()),
        }
        .into());

        // Act
        client.note_outcome(false, &failed_login);

        // Assert
        assert!(!client.take_session_rejected());
    }
}
