//! The factory's shared stock and the [`ActorState`] implementation that exposes it to robots.

use super::actions::{InventoryAction, InventoryActionResult, Purchase};
use super::error::InventoryError;
use crate::model::{
    Bar, Foo, Foobar, Material, RobotNumber, Serial, SerialGenerator, StockLevels,
};
use actor_framework::ActorState;
use std::collections::VecDeque;
use tracing::info;

/// Everything the factory owns: unconsumed foo and bar, finished foobars, money and the robot
/// count. All pools are FIFO.
///
/// The methods are plain synchronous functions so the rules can be exercised directly; at
/// runtime the value lives inside a [`StateActor`](actor_framework::StateActor) and robots
/// reach it through an [`InventoryClient`](crate::clients::InventoryClient).
#[derive(Debug, Default)]
pub struct Inventory {
    foos: VecDeque<Foo>,
    bars: VecDeque<Bar>,
    foobars: VecDeque<Foobar>,
    sold: Vec<Foobar>,
    euros: u32,
    robots: u32,
    robot_limit: Option<u32>,
    serials: SerialGenerator,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// An inventory that refuses to sell robot number `limit + 1`.
    pub fn with_robot_limit(limit: u32) -> Self {
        Self {
            robot_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Mints a foo into stock and returns its serial.
    pub fn add_foo(&mut self) -> Serial {
        let serial = self.serials.next_serial(Material::Foo);
        self.foos.push_back(Foo::minted(serial));
        serial
    }

    /// Mints a bar into stock and returns its serial.
    pub fn add_bar(&mut self) -> Serial {
        let serial = self.serials.next_serial(Material::Bar);
        self.bars.push_back(Bar::minted(serial));
        serial
    }

    pub fn take_foo(&mut self) -> Result<Foo, InventoryError> {
        self.foos
            .pop_front()
            .ok_or(InventoryError::Empty(Material::Foo))
    }

    pub fn take_bar(&mut self) -> Result<Bar, InventoryError> {
        self.bars
            .pop_front()
            .ok_or(InventoryError::Empty(Material::Bar))
    }

    /// Takes one foo and one bar, or neither.
    pub fn take_pair(&mut self) -> Result<(Foo, Bar), InventoryError> {
        if self.foos.is_empty() {
            return Err(InventoryError::Empty(Material::Foo));
        }
        if self.bars.is_empty() {
            return Err(InventoryError::Empty(Material::Bar));
        }
        Ok((self.take_foo()?, self.take_bar()?))
    }

    pub fn return_bar(&mut self, bar: Bar) {
        self.bars.push_back(bar);
    }

    pub fn add_foobar(&mut self, foo: Foo, bar: Bar) {
        self.foobars.push_back(Foobar::assemble(foo, bar));
    }

    pub fn take_up_to_foobars(&mut self, n: usize) -> Vec<Foobar> {
        let n = n.min(self.foobars.len());
        self.foobars.drain(..n).collect()
    }

    /// Credits one euro per foobar and appends them to the sales ledger.
    pub fn settle_sale(&mut self, foobars: Vec<Foobar>) -> u32 {
        let count = u32::try_from(foobars.len()).unwrap_or(u32::MAX);
        self.sold.extend(foobars);
        self.credit(count)
    }

    pub fn credit(&mut self, amount: u32) -> u32 {
        self.euros = self.euros.saturating_add(amount);
        self.euros
    }

    pub fn debit(&mut self, amount: u32) -> Result<u32, InventoryError> {
        self.euros = self
            .euros
            .checked_sub(amount)
            .ok_or(InventoryError::InsufficientFunds {
                required: amount,
                available: self.euros,
            })?;
        Ok(self.euros)
    }

    pub fn next_robot_number(&mut self) -> RobotNumber {
        self.robots += 1;
        RobotNumber(self.robots)
    }

    /// Pays for a new robot. Either every resource is consumed or none is.
    pub fn purchase_robot(
        &mut self,
        price: u32,
        foo_cost: usize,
    ) -> Result<Purchase, InventoryError> {
        if let Some(limit) = self.robot_limit {
            if self.robots >= limit {
                return Err(InventoryError::RobotLimitReached { limit });
            }
        }
        if self.euros < price {
            return Err(InventoryError::InsufficientFunds {
                required: price,
                available: self.euros,
            });
        }
        if self.foos.len() < foo_cost {
            return Err(InventoryError::InsufficientFoo {
                required: foo_cost,
                available: self.foos.len(),
            });
        }

        let balance = self.debit(price)?;
        let foos = self.foos.drain(..foo_cost).collect();
        let robot = self.next_robot_number();
        Ok(Purchase {
            robot,
            foos,
            balance,
        })
    }

    pub fn foo_count(&self) -> usize {
        self.foos.len()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn foobar_count(&self) -> usize {
        self.foobars.len()
    }

    pub fn euros(&self) -> u32 {
        self.euros
    }

    pub fn robots(&self) -> u32 {
        self.robots
    }

    /// Foo in stock, oldest first.
    pub fn foos(&self) -> impl Iterator<Item = &Foo> {
        self.foos.iter()
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Foobars in stock, oldest first.
    pub fn foobars(&self) -> impl Iterator<Item = &Foobar> {
        self.foobars.iter()
    }

    /// Every foobar sold so far, in order of sale.
    pub fn sold(&self) -> &[Foobar] {
        &self.sold
    }

    /// Number of foo and bar serials minted so far.
    pub fn serials_issued(&self) -> u64 {
        self.serials.issued()
    }

    /// The material `serial` was minted as, if this inventory minted it.
    pub fn material_of(&self, serial: Serial) -> Option<Material> {
        self.serials.material_of(serial)
    }

    pub fn levels(&self) -> StockLevels {
        StockLevels {
            foo: self.foos.len(),
            bar: self.bars.len(),
            foobar: self.foobars.len(),
            euros: self.euros,
            robots: self.robots,
        }
    }
}

impl ActorState for Inventory {
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Snapshot = StockLevels;
    type Error = InventoryError;

    fn handle_action(
        &mut self,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        use InventoryActionResult as R;

        Ok(match action {
            InventoryAction::AddFoo => R::AddFoo(self.add_foo()),
            InventoryAction::AddBar => R::AddBar(self.add_bar()),
            InventoryAction::TakeFoo => R::TakeFoo(self.take_foo()?),
            InventoryAction::TakeBar => R::TakeBar(self.take_bar()?),
            InventoryAction::TakePair => {
                let (foo, bar) = self.take_pair()?;
                R::TakePair(foo, bar)
            }
            InventoryAction::ReturnBar(bar) => {
                self.return_bar(bar);
                R::ReturnBar(())
            }
            InventoryAction::AddFoobar(foo, bar) => {
                self.add_foobar(foo, bar);
                R::AddFoobar(())
            }
            InventoryAction::TakeUpToFoobars(n) => {
                R::TakeUpToFoobars(self.take_up_to_foobars(n))
            }
            InventoryAction::SettleSale(foobars) => R::SettleSale(self.settle_sale(foobars)),
            InventoryAction::Credit(amount) => R::Credit(self.credit(amount)),
            InventoryAction::Debit(amount) => R::Debit(self.debit(amount)?),
            InventoryAction::PeekFooCount => R::PeekFooCount(self.foo_count()),
            InventoryAction::PeekCurrency => R::PeekCurrency(self.euros()),
            InventoryAction::NextRobotNumber => R::NextRobotNumber(self.next_robot_number()),
            InventoryAction::PurchaseRobot { price, foo_cost } => {
                R::PurchaseRobot(self.purchase_robot(price, foo_cost)?)
            }
        })
    }

    fn snapshot(&self) -> StockLevels {
        self.levels()
    }

    fn on_stop(&self) {
        let levels = self.levels();
        info!(
            foo = levels.foo,
            bar = levels.bar,
            foobar = levels.foobar,
            euros = levels.euros,
            robots = levels.robots,
            sold = self.sold.len(),
            serials = self.serials.issued(),
            "Inventory closed"
        );
    }
}
