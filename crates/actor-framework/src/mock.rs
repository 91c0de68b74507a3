//! # Mock Framework & Testing Guide
//!
//! The mock utilities stand in for a real [`StateActor`](crate::StateActor) so that client
//! wrappers can be tested without spawning the actor or building its state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the state or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Two styles
//!
//! - [`create_mock_client`] + [`expect_action`] / [`expect_snapshot`]: the test plays the
//!   actor itself and inspects every request as it arrives.
//! - [`MockClient`]: queue canned responses up front, run the code under test, then
//!   [`verify`](MockClient::verify) that every expectation was consumed.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorState, FrameworkError};
//!
//! #[derive(Debug)] struct Tank { litres: u32 }
//! #[derive(Debug)] enum TankAction { Fill(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("tank error")] struct TankError;
//!
//! impl ActorState for Tank {
//!     type Action = TankAction; type ActionResult = u32; type Snapshot = u32; type Error = TankError;
//!     fn handle_action(&mut self, _: TankAction) -> Result<u32, TankError> { Ok(self.litres) }
//!     fn snapshot(&self) -> u32 { self.litres }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tank>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_action().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.perform_action(TankAction::Fill(3)).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorState> {
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Snapshot {
        response: Result<T::Snapshot, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not match
/// the next expectation panics the background task, which surfaces in the test as a closed
/// channel (`ActorDropped`).
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorState> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorState> {
    expectations: Expectations<T>,
}

impl<T: ActorState> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Expectations<T>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, snapshot: T::Snapshot) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot {
                response: Ok(snapshot),
            });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends messages to a channel the test controls (`receiver`). The test inspects
/// each message as it arrives and answers it, which lets it simulate the actor's behavior
/// (success, rejection, delays) deterministically.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<T::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Gauge {
        level: i64,
    }

    #[derive(Debug)]
    enum GaugeAction {
        Shift(i64),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Gauge error")]
    struct GaugeError;

    impl ActorState for Gauge {
        type Action = GaugeAction;
        type ActionResult = i64;
        type Snapshot = i64;
        type Error = GaugeError;

        fn handle_action(&mut self, action: GaugeAction) -> Result<i64, GaugeError> {
            let GaugeAction::Shift(delta) = action;
            self.level += delta;
            Ok(self.level)
        }

        fn snapshot(&self) -> i64 {
            self.level
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Gauge>(10);

        let shift_task = tokio::spawn(async move {
            client.perform_action(GaugeAction::Shift(4)).await
        });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, GaugeAction::Shift(4)));
        responder.send(Ok(4)).unwrap();

        let result = shift_task.await.unwrap();
        assert!(matches!(result, Ok(4)));
    }

    #[tokio::test]
    async fn test_mock_snapshot_helper() {
        let (client, mut receiver) = create_mock_client::<Gauge>(10);

        let snapshot_task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        responder.send(Ok(-3)).unwrap();

        assert_eq!(snapshot_task.await.unwrap().unwrap(), -3);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Gauge>::new();

        mock.expect_action().return_ok(7);
        mock.expect_snapshot().return_ok(7);

        let client = mock.client();

        let level = client.perform_action(GaugeAction::Shift(7)).await.unwrap();
        assert_eq!(level, 7);
        assert_eq!(client.snapshot().await.unwrap(), 7);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Gauge>::new();
        mock.expect_snapshot().return_ok(1);
        mock.verify();
    }
}
