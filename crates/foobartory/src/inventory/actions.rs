//! Operations the Inventory actor accepts.
//!
//! Each variant is applied atomically by
//! [`ActorState::handle_action`](actor_framework::ActorState::handle_action). The compound
//! operations (`TakePair`, `PurchaseRobot`, `SettleSale`) exist so that a check and the
//! mutation it guards happen inside one message.

use crate::model::{Bar, Foo, Foobar, RobotNumber, Serial};

#[derive(Debug)]
pub enum InventoryAction {
    /// Stocks a new foo with a fresh serial.
    AddFoo,
    /// Stocks a new bar with a fresh serial.
    AddBar,
    /// Removes the oldest foo.
    TakeFoo,
    /// Removes the oldest bar.
    TakeBar,
    /// Removes the oldest foo and the oldest bar, or nothing. Foo is checked first.
    TakePair,
    /// Puts a previously taken bar back at the end of the queue.
    ReturnBar(Bar),
    /// Stocks a foobar built from the two given parts.
    AddFoobar(Foo, Bar),
    /// Removes up to `n` of the oldest foobars. Never fails.
    TakeUpToFoobars(usize),
    /// Credits one euro per foobar and records them in the sales ledger.
    SettleSale(Vec<Foobar>),
    Credit(u32),
    /// Fails rather than let the balance go negative.
    Debit(u32),
    PeekFooCount,
    PeekCurrency,
    /// Increments the robot count and returns the new value.
    NextRobotNumber,
    /// Debits `price`, removes the `foo_cost` oldest foos and allocates the next robot number,
    /// or does nothing if either resource is short.
    PurchaseRobot { price: u32, foo_cost: usize },
}

/// What a successful robot purchase consumed and produced.
#[derive(Debug, PartialEq)]
pub struct Purchase {
    pub robot: RobotNumber,
    pub foos: Vec<Foo>,
    pub balance: u32,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, PartialEq)]
pub enum InventoryActionResult {
    /// Serial of the new foo.
    AddFoo(Serial),
    /// Serial of the new bar.
    AddBar(Serial),
    TakeFoo(Foo),
    TakeBar(Bar),
    TakePair(Foo, Bar),
    ReturnBar(()),
    AddFoobar(()),
    TakeUpToFoobars(Vec<Foobar>),
    /// New balance.
    SettleSale(u32),
    /// New balance.
    Credit(u32),
    /// New balance.
    Debit(u32),
    PeekFooCount(usize),
    PeekCurrency(u32),
    NextRobotNumber(RobotNumber),
    PurchaseRobot(Purchase),
}
