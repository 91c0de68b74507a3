use actor_framework::{ActorClient, ActorState, FrameworkError, StateActor, StateClient};
use async_trait::async_trait;

// --- Test State ---

#[derive(Debug, Default)]
struct Ledger {
    balance: u32,
    entries: Vec<i64>,
}

#[derive(Debug)]
enum LedgerAction {
    Deposit(u32),
    Withdraw(u32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum LedgerError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    Insufficient { requested: u32, available: u32 },
    #[error("Communication error: {0}")]
    Communication(String),
}

impl ActorState for Ledger {
    type Action = LedgerAction;
    type ActionResult = u32;
    type Snapshot = (u32, usize);
    type Error = LedgerError;

    fn handle_action(&mut self, action: LedgerAction) -> Result<u32, LedgerError> {
        match action {
            LedgerAction::Deposit(amount) => {
                self.balance += amount;
                self.entries.push(i64::from(amount));
            }
            LedgerAction::Withdraw(amount) => {
                if amount > self.balance {
                    return Err(LedgerError::Insufficient {
                        requested: amount,
                        available: self.balance,
                    });
                }
                self.balance -= amount;
                self.entries.push(-i64::from(amount));
            }
        }
        Ok(self.balance)
    }

    fn snapshot(&self) -> (u32, usize) {
        (self.balance, self.entries.len())
    }
}

struct LedgerClient {
    inner: StateClient<Ledger>,
}

#[async_trait]
impl ActorClient<Ledger> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &StateClient<Ledger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> LedgerError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<LedgerError>() {
                Ok(err) => *err,
                Err(other) => LedgerError::Communication(other.to_string()),
            },
            other => LedgerError::Communication(other.to_string()),
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = StateActor::new(Ledger::default(), 10);
    let handle = tokio::spawn(actor.run());

    // 1. Actions
    assert_eq!(
        client
            .perform_action(LedgerAction::Deposit(10))
            .await
            .unwrap(),
        10
    );
    assert_eq!(
        client
            .perform_action(LedgerAction::Withdraw(4))
            .await
            .unwrap(),
        6
    );

    // 2. Rejected action leaves the state untouched
    let rejected = client.perform_action(LedgerAction::Withdraw(100)).await;
    assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.snapshot().await.unwrap(), (6, 2));

    // 3. Dropping the last client stops the actor and hands back the state
    drop(client);
    let ledger = handle.await.unwrap();
    assert_eq!(ledger.balance, 6);
    assert_eq!(ledger.entries, vec![10, -4]);
}

#[tokio::test]
async fn test_client_trait_recovers_typed_errors() {
    let (actor, client) = StateActor::new(Ledger::default(), 10);
    tokio::spawn(actor.run());
    let ledger = LedgerClient { inner: client };

    let err = ledger
        .inner()
        .perform_action(LedgerAction::Withdraw(1))
        .await
        .map_err(LedgerClient::map_error)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Insufficient {
            requested: 1,
            available: 0
        }
    );

    assert_eq!(ledger.snapshot().await.unwrap(), (0, 0));
}

#[tokio::test]
async fn test_concurrent_clients_are_serialized() {
    let (actor, client) = StateActor::new(Ledger::default(), 4);
    let handle = tokio::spawn(actor.run());

    // 20 withdrawals of 5 against a balance of 50: exactly 10 may succeed.
    client
        .perform_action(LedgerAction::Deposit(50))
        .await
        .unwrap();
    let mut tasks = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.perform_action(LedgerAction::Withdraw(5)).await
        }));
    }

    let mut successful = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            successful += 1;
        }
    }
    assert_eq!(successful, 10);

    drop(client);
    let ledger = handle.await.unwrap();
    assert_eq!(ledger.balance, 0);
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = StateActor::new(Ledger::default(), 1);
    drop(actor);

    assert!(client.is_closed());
    let result = client.perform_action(LedgerAction::Deposit(1)).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
