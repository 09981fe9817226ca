//! Async operation management
//!
//! Trace fetches run on a background task; the result comes back over a
//! oneshot channel that the run loop polls once per iteration.

use tokio::sync::oneshot;

use super::core::App;
use crate::trace::{Resource, TraceError};

pub type FetchSender = oneshot::Sender<Result<Resource, TraceError>>;

impl App {
    /// Open a result channel for a new fetch
    ///
    /// Returns `None` while an earlier fetch is still pending, so at most one
    /// fetch is ever outstanding.
    pub fn trigger_fetch(&mut self) -> Option<FetchSender> {
        if self.async_state.fetch_rx.is_some() {
            return None;
        }
        let (tx, rx) = oneshot::channel();
        self.async_state.fetch_rx = Some(rx);
        Some(tx)
    }

    /// Try to get the fetch result
    pub fn try_get_fetch_result(&mut self) -> Option<Result<Resource, TraceError>> {
        let rx = self.async_state.fetch_rx.as_mut()?;
        match rx.try_recv() {
            Ok(result) => {
                self.async_state.fetch_rx = None;
                Some(result)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.async_state.fetch_rx = None;
                Some(Err(TraceError::Read(std::io::Error::other(
                    "trace fetch task ended without a result",
                ))))
            }
        }
    }
}
