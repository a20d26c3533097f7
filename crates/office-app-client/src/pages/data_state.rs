use futures::channel::oneshot;
use officehub_client_core::user_message;
use officehub_shared::const_config::error::ERROR_GENERIC_MESSAGE;
use tracing::error;

#[derive(Debug)]
pub struct AwaitingType<T>(pub oneshot::Receiver<anyhow::Result<T>>);

/// Progress of one request made by a page
///
/// Failures hold the message meant for the user
#[derive(Debug, Default)]
pub enum DataState<T> {
    #[default]
    None,
    AwaitingResponse(AwaitingType<T>),
    Present(T),
    Failed(String),
}

impl<T> DataState<T> {
    /// Attempts to load the data
    ///
    /// Starts the request the first time, then polls it. If a ui is passed
    /// then spinners and error messages (with a retry button) will show as
    /// applicable
    ///
    /// Note: F needs to return AwaitingType<T> and not T because it needs to be
    /// able to be pending and T is not
    ///
    /// Does nothing if the data is already present
    pub fn get<F>(&mut self, ui: Option<&mut egui::Ui>, retry_msg: Option<&str>, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        match self {
            DataState::None => {
                if let Some(ui) = ui {
                    ui.spinner();
                }
                let rx = fetch_fn();
                *self = DataState::AwaitingResponse(rx);
            }
            DataState::AwaitingResponse(rx) => {
                if let Some(new_state) = Self::await_data(ui, rx) {
                    *self = new_state;
                }
            }
            DataState::Present(_) => {}
            DataState::Failed(e) => {
                if let Some(ui) = ui {
                    ui.colored_label(ui.visuals().error_fg_color, e.as_str());
                    if ui.button(retry_msg.unwrap_or("Retry Request")).clicked() {
                        *self = DataState::default();
                    }
                }
            }
        }
    }

    /// Same as [`DataState::get`] with a ui to show progress and errors on
    pub fn egui_get<F>(&mut self, ui: &mut egui::Ui, retry_msg: Option<&str>, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        self.get(Some(ui), retry_msg, fetch_fn)
    }

    pub fn await_data(ui: Option<&mut egui::Ui>, rx: &mut AwaitingType<T>) -> Option<Self> {
        Some(match rx.0.try_recv() {
            Ok(recv_opt) => match recv_opt {
                Some(outcome_result) => match outcome_result {
                    Ok(data) => DataState::Present(data),
                    Err(e) => {
                        error!(?e, "Error response received instead of the data");
                        DataState::Failed(user_message(&e, ERROR_GENERIC_MESSAGE))
                    }
                },
                None => {
                    if let Some(ui) = ui {
                        ui.spinner();
                    }
                    return None;
                }
            },
            Err(e) => {
                error!(?e, "Error receiving on channel");
                DataState::Failed(ERROR_GENERIC_MESSAGE.to_string())
            }
        })
    }

    /// Polls a request that was started in response to a user action
    ///
    /// Returns the outcome once, after which the state is back to
    /// [`DataState::None`]
    pub fn take_outcome(&mut self) -> Option<Result<T, String>> {
        let DataState::AwaitingResponse(rx) = self else {
            return None;
        };
        let outcome = match Self::await_data(None, rx)? {
            DataState::Present(data) => Ok(data),
            DataState::Failed(e) => Err(e),
            DataState::None | DataState::AwaitingResponse(_) => return None,
        };
        *self = DataState::None;
        Some(outcome)
    }

    /// Returns `true` if the data state is [`Present`].
    ///
    /// [`Present`]: DataState::Present
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(..))
    }

    /// Returns `true` if the data state is [`None`].
    ///
    /// [`None`]: DataState::None
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingResponse(..))
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(data) => Some(data),
            _ => None,
        }
    }

    pub fn present_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<oneshot::Receiver<anyhow::Result<T>>> for DataState<T> {
    fn from(value: oneshot::Receiver<anyhow::Result<T>>) -> Self {
        Self::AwaitingResponse(AwaitingType(value))
    }
}

#[cfg(test)]
mod tests {
    use officehub_client_core::{ApiError, ApiErrorBody, StatusCode};

    use super::*;

    #[test]
    fn outcome_is_taken_once() {
        // Arrange
        let (tx, rx) = oneshot::channel();
        let mut state: DataState<u8> = rx.into();
        assert!(state.take_outcome().is_none());

        // Act
        tx.send(Ok(7)).unwrap();
        let actual = state.take_outcome();

        // Assert
        assert_eq!(actual, Some(Ok(7)));
        assert!(state.is_none());
        assert!(state.take_outcome().is_none());
    }

    #[test]
    fn failure_carries_server_message() {
        // Arrange
        let (tx, rx) = oneshot::channel::<anyhow::Result<()>>();
        let mut state: DataState<()> = rx.into();
        let body = ApiErrorBody::from_text(r#"{"detail":"Task not found."}"#.to_string());

        // Act
        tx.send(Err(ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body,
        }
        .into()))
            .unwrap();
        state.get(None, None, || unreachable!("already awaiting"));

        // Assert
        assert!(matches!(state, DataState::Failed(ref msg) if msg == "Task not found."));
    }

    #[test]
    fn dropped_sender_is_a_failure() {
        // Arrange
        let (tx, rx) = oneshot::channel::<anyhow::Result<()>>();
        let mut state: DataState<()> = rx.into();

        // Act
        drop(tx);
        let actual = state.take_outcome();

        // Assert
        assert_eq!(actual, Some(Err(ERROR_GENERIC_MESSAGE.to_string())));
    }
}
