//! # Inventory Client
//!
//! Provides a high‑level API for interacting with the `Inventory` actor.
//! It wraps a `StateClient<Inventory>` and exposes one method per inventory operation, with
//! typed results and [`InventoryError`] instead of boxed framework errors.
use crate::inventory::{
    Inventory, InventoryAction, InventoryActionResult, InventoryError, Purchase,
};
use crate::model::{Bar, Foo, Foobar, RobotNumber, Serial, StockLevels};
use actor_framework::{ActorClient, FrameworkError, StateClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor. Cheap to clone; every robot holds one.
#[derive(Clone)]
pub struct InventoryClient {
    inner: StateClient<Inventory>,
}

#[async_trait]
impl ActorClient<Inventory> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &StateClient<Inventory> {
        &self.inner
    }

    /// Recovers the [`InventoryError`] boxed inside `EntityError`; anything else is a
    /// communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(err) => *err,
                Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
            },
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected reply: {result:?}"))
}

impl InventoryClient {
    pub fn new(inner: StateClient<Inventory>) -> Self {
        Self { inner }
    }

    async fn send(&self, action: InventoryAction) -> Result<InventoryActionResult, InventoryError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }

    /// Current stock levels.
    pub async fn levels(&self) -> Result<StockLevels, InventoryError> {
        self.snapshot().await
    }

    /// Mints a foo into stock and returns its serial.
    #[instrument(level = "debug", skip(self))]
    pub async fn add_foo(&self) -> Result<Serial, InventoryError> {
        match self.send(InventoryAction::AddFoo).await? {
            InventoryActionResult::AddFoo(serial) => Ok(serial),
            other => Err(unexpected(other)),
        }
    }

    /// Mints a bar into stock and returns its serial.
    #[instrument(level = "debug", skip(self))]
    pub async fn add_bar(&self) -> Result<Serial, InventoryError> {
        match self.send(InventoryAction::AddBar).await? {
            InventoryActionResult::AddBar(serial) => Ok(serial),
            other => Err(unexpected(other)),
        }
    }

    /// Takes the oldest foo, or fails with [`InventoryError::Empty`].
    #[instrument(level = "debug", skip(self))]
    pub async fn take_foo(&self) -> Result<Foo, InventoryError> {
        match self.send(InventoryAction::TakeFoo).await? {
            InventoryActionResult::TakeFoo(foo) => Ok(foo),
            other => Err(unexpected(other)),
        }
    }

    /// Takes the oldest bar, or fails with [`InventoryError::Empty`].
    #[instrument(level = "debug", skip(self))]
    pub async fn take_bar(&self) -> Result<Bar, InventoryError> {
        match self.send(InventoryAction::TakeBar).await? {
            InventoryActionResult::TakeBar(bar) => Ok(bar),
            other => Err(unexpected(other)),
        }
    }

    /// Takes the oldest foo and the oldest bar in one step. On `Empty`, nothing was taken.
    #[instrument(level = "debug", skip(self))]
    pub async fn take_pair(&self) -> Result<(Foo, Bar), InventoryError> {
        match self.send(InventoryAction::TakePair).await? {
            InventoryActionResult::TakePair(foo, bar) => Ok((foo, bar)),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn return_bar(&self, bar: Bar) -> Result<(), InventoryError> {
        match self.send(InventoryAction::ReturnBar(bar)).await? {
            InventoryActionResult::ReturnBar(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn add_foobar(&self, foo: Foo, bar: Bar) -> Result<(), InventoryError> {
        match self.send(InventoryAction::AddFoobar(foo, bar)).await? {
            InventoryActionResult::AddFoobar(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Takes up to `n` of the oldest foobars; an empty result means there were none.
    #[instrument(level = "debug", skip(self))]
    pub async fn take_up_to_foobars(&self, n: usize) -> Result<Vec<Foobar>, InventoryError> {
        match self.send(InventoryAction::TakeUpToFoobars(n)).await? {
            InventoryActionResult::TakeUpToFoobars(foobars) => Ok(foobars),
            other => Err(unexpected(other)),
        }
    }

    /// Credits the sale of `foobars` and returns the new balance.
    #[instrument(level = "debug", skip(self, foobars), fields(count = foobars.len()))]
    pub async fn settle_sale(&self, foobars: Vec<Foobar>) -> Result<u32, InventoryError> {
        match self.send(InventoryAction::SettleSale(foobars)).await? {
            InventoryActionResult::SettleSale(balance) => Ok(balance),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn credit(&self, amount: u32) -> Result<u32, InventoryError> {
        match self.send(InventoryAction::Credit(amount)).await? {
            InventoryActionResult::Credit(balance) => Ok(balance),
            other => Err(unexpected(other)),
        }
    }

    /// Fails with [`InventoryError::InsufficientFunds`] instead of going negative.
    #[instrument(level = "debug", skip(self))]
    pub async fn debit(&self, amount: u32) -> Result<u32, InventoryError> {
        match self.send(InventoryAction::Debit(amount)).await? {
            InventoryActionResult::Debit(balance) => Ok(balance),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn peek_foo_count(&self) -> Result<usize, InventoryError> {
        match self.send(InventoryAction::PeekFooCount).await? {
            InventoryActionResult::PeekFooCount(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn peek_currency(&self) -> Result<u32, InventoryError> {
        match self.send(InventoryAction::PeekCurrency).await? {
            InventoryActionResult::PeekCurrency(euros) => Ok(euros),
            other => Err(unexpected(other)),
        }
    }

    /// Increments the robot count and returns the new number.
    #[instrument(level = "debug", skip(self))]
    pub async fn next_robot_number(&self) -> Result<RobotNumber, InventoryError> {
        match self.send(InventoryAction::NextRobotNumber).await? {
            InventoryActionResult::NextRobotNumber(number) => Ok(number),
            other => Err(unexpected(other)),
        }
    }

    /// Pays `price` euros and `foo_cost` foo for a new robot, atomically.
    #[instrument(level = "debug", skip(self))]
    pub async fn purchase_robot(
        &self,
        price: u32,
        foo_cost: usize,
    ) -> Result<Purchase, InventoryError> {
        match self
            .send(InventoryAction::PurchaseRobot { price, foo_cost })
            .await?
        {
            InventoryActionResult::PurchaseRobot(purchase) => Ok(purchase),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Material;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_take_pair_returns_both_units() {
        let (client, mut receiver) = create_mock_client::<Inventory>(10);
        let inventory_client = InventoryClient::new(client);

        let take_task = tokio::spawn(async move { inventory_client.take_pair().await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, InventoryAction::TakePair));

        responder
            .send(Ok(InventoryActionResult::TakePair(
                Foo::minted(Serial(1)),
                Bar::minted(Serial(2)),
            )))
            .unwrap();

        let (foo, bar) = take_task.await.unwrap().unwrap();
        assert_eq!(foo.serial(), Serial(1));
        assert_eq!(bar.serial(), Serial(2));
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered_as_inventory_errors() {
        let (client, mut receiver) = create_mock_client::<Inventory>(10);
        let inventory_client = InventoryClient::new(client);

        let take_task = tokio::spawn(async move { inventory_client.take_foo().await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, InventoryAction::TakeFoo));

        responder
            .send(Err(FrameworkError::EntityError(Box::new(InventoryError::Empty(
                Material::Foo,
            )))))
            .unwrap();

        let result = take_task.await.unwrap();
        assert_eq!(result, Err(InventoryError::Empty(Material::Foo)));
    }

    #[tokio::test]
    async fn test_purchase_sends_price_and_foo_cost() {
        let (client, mut receiver) = create_mock_client::<Inventory>(10);
        let inventory_client = InventoryClient::new(client);

        let buy_task = tokio::spawn(async move { inventory_client.purchase_robot(3, 6).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        match action {
            InventoryAction::PurchaseRobot { price, foo_cost } => {
                assert_eq!(price, 3);
                assert_eq!(foo_cost, 6);
            }
            _ => panic!("Expected PurchaseRobot action"),
        }

        responder
            .send(Ok(InventoryActionResult::PurchaseRobot(Purchase {
                robot: RobotNumber(3),
                foos: Vec::new(),
                balance: 0,
            })))
            .unwrap();

        assert_eq!(buy_task.await.unwrap().unwrap().robot, RobotNumber(3));
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_a_communication_error() {
        let mut mock = MockClient::<Inventory>::new();
        mock.expect_action()
            .return_ok(InventoryActionResult::PeekCurrency(9));
        let inventory_client = InventoryClient::new(mock.client());

        let result = inventory_client.peek_foo_count().await;

        assert!(matches!(
            result,
            Err(InventoryError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let mut mock = MockClient::<Inventory>::new();
        mock.expect_action().return_err(FrameworkError::ActorClosed);
        mock.expect_snapshot().return_ok(StockLevels::default());
        let inventory_client = InventoryClient::new(mock.client());

        let err = inventory_client.add_foo().await.unwrap_err();
        assert!(!err.is_shortage());
        assert_eq!(
            inventory_client.levels().await.unwrap(),
            StockLevels::default()
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_money_and_bar_requests_round_trip() {
        let (client, mut receiver) = create_mock_client::<Inventory>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move {
            let balance = inventory_client.credit(4).await?;
            let after_debit = inventory_client.debit(3).await?;
            let euros = inventory_client.peek_currency().await?;
            let bar = inventory_client.take_bar().await?;
            Ok::<_, InventoryError>((balance, after_debit, euros, bar))
        });

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, InventoryAction::Credit(4)));
        responder
            .send(Ok(InventoryActionResult::Credit(4)))
            .unwrap();

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, InventoryAction::Debit(3)));
        responder.send(Ok(InventoryActionResult::Debit(1))).unwrap();

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, InventoryAction::PeekCurrency));
        responder
            .send(Ok(InventoryActionResult::PeekCurrency(1)))
            .unwrap();

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, InventoryAction::TakeBar));
        let bar = Bar::minted(Serial(9));
        responder
            .send(Ok(InventoryActionResult::TakeBar(bar)))
            .unwrap();

        let (balance, after_debit, euros, bar) = task.await.unwrap().unwrap();
        assert_eq!((balance, after_debit, euros), (4, 1, 1));
        assert_eq!(bar.serial(), Serial(9));
    }

    #[tokio::test]
    async fn test_debit_rejection_is_recovered() {
        let mut mock = MockClient::<Inventory>::new();
        let rejection = InventoryError::InsufficientFunds {
            required: 3,
            available: 0,
        };
        mock.expect_action()
            .return_err(FrameworkError::EntityError(Box::new(rejection.clone())));
        let inventory_client = InventoryClient::new(mock.client());

        assert_eq!(inventory_client.debit(3).await, Err(rejection));
        mock.verify();
    }
}
