use super::activity::{Activity, ActivityReport, Outcome, RobotState};
use super::chance::Chance;
use super::rules::*;
use super::RobotContext;
use crate::inventory::InventoryError;
use crate::model::RobotNumber;
use tracing::{debug, error, info, warn};

/// Outcome and log note of one activity; `Err` only when the inventory is unreachable.
type ActivityResult = Result<(Outcome, String), InventoryError>;

/// One worker of the factory.
///
/// A robot owns its random source and nothing else; all goods live in the inventory.
pub struct Robot {
    number: RobotNumber,
    state: RobotState,
    chance: Box<dyn Chance>,
}

impl Robot {
    pub fn new(number: RobotNumber, chance: Box<dyn Chance>) -> Self {
        Self {
            number,
            state: RobotState::Idle,
            chance,
        }
    }

    pub fn number(&self) -> RobotNumber {
        self.number
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    fn enter(&mut self, state: RobotState) {
        debug!(
            robot = %self.number,
            from = %self.state,
            to = %state,
            "State change"
        );
        self.state = state;
    }

    /// Moves, picks an activity, performs it, and repeats until `ctx.stop` fires.
    ///
    /// The stop signal is checked before and after every move; an activity that has started
    /// always runs to completion. Returns the number of activities completed.
    pub async fn run(mut self, ctx: RobotContext) -> u64 {
        info!(robot = %self.number, "Robot started");
        let mut completed = 0;

        while !ctx.stop.is_cancelled() {
            self.enter(RobotState::Moving);
            ctx.pause(MOVE_UNITS).await;
            if ctx.stop.is_cancelled() {
                break;
            }

            let activity = self.chance.pick_activity();
            let report = match self.perform(activity, &ctx).await {
                Ok(report) => report,
                Err(e) => {
                    error!(
                        robot = %self.number,
                        %activity,
                        error = %e,
                        "Inventory unreachable, robot stopping"
                    );
                    break;
                }
            };
            completed += 1;

            if let Err(e) = self.record(&report, &ctx).await {
                error!(
                    robot = %self.number,
                    error = %e,
                    "Inventory unreachable, robot stopping"
                );
                break;
            }
            self.enter(RobotState::Idle);
        }

        self.state = RobotState::Idle;
        info!(robot = %self.number, completed, "Robot stopped");
        completed
    }

    /// Performs one activity against the inventory.
    ///
    /// Shortages are not errors: they come back as an [`Outcome::NoOp`] report. Only a lost
    /// inventory surfaces as `Err`.
    pub async fn perform(
        &mut self,
        activity: Activity,
        ctx: &RobotContext,
    ) -> Result<ActivityReport, InventoryError> {
        self.enter(RobotState::Performing(activity));
        let (outcome, note) = match activity {
            Activity::MineFoo => self.mine_foo(ctx).await?,
            Activity::MineBar => self.mine_bar(ctx).await?,
            Activity::Assemble => self.assemble(ctx).await?,
            Activity::Sell => self.sell(ctx).await?,
            Activity::BuyRobot => self.buy_robot(ctx).await?,
        };
        Ok(ActivityReport {
            activity,
            outcome,
            note,
        })
    }

    /// One structured line per completed activity.
    async fn record(
        &self,
        report: &ActivityReport,
        ctx: &RobotContext,
    ) -> Result<(), InventoryError> {
        let levels = ctx.inventory.levels().await?;
        match report.outcome {
            Outcome::Success => info!(
                robot = %self.number,
                activity = %report.activity,
                outcome = %report.outcome,
                foo = levels.foo,
                bar = levels.bar,
                foobar = levels.foobar,
                euros = levels.euros,
                robots = levels.robots,
                "{}",
                report.note
            ),
            Outcome::Failure | Outcome::NoOp => warn!(
                robot = %self.number,
                activity = %report.activity,
                outcome = %report.outcome,
                foo = levels.foo,
                bar = levels.bar,
                foobar = levels.foobar,
                euros = levels.euros,
                robots = levels.robots,
                "{}",
                report.note
            ),
        }
        Ok(())
    }

    async fn mine_foo(&mut self, ctx: &RobotContext) -> ActivityResult {
        ctx.pause(MINE_FOO_UNITS).await;
        let serial = ctx.inventory.add_foo().await?;
        Ok((Outcome::Success, format!("mined foo {serial}")))
    }

    async fn mine_bar(&mut self, ctx: &RobotContext) -> ActivityResult {
        let units = self.chance.bar_mining_units();
        ctx.pause(units).await;
        let serial = ctx.inventory.add_bar().await?;
        Ok((
            Outcome::Success,
            format!("mined bar {serial} in {units:.2} units"),
        ))
    }

    async fn assemble(&mut self, ctx: &RobotContext) -> ActivityResult {
        ctx.pause(ASSEMBLE_UNITS).await;
        let (foo, bar) = match ctx.inventory.take_pair().await {
            Ok(pair) => pair,
            Err(e) if e.is_shortage() => {
                return Ok((Outcome::NoOp, format!("cannot assemble: {e}")));
            }
            Err(e) => return Err(e),
        };

        if self.chance.assembly_succeeds() {
            let note = format!("assembled foobar [{foo} + {bar}]");
            ctx.inventory.add_foobar(foo, bar).await?;
            Ok((Outcome::Success, note))
        } else {
            let note = format!("assembly failed: {foo} lost, {bar} back in stock");
            ctx.inventory.return_bar(bar).await?;
            Ok((Outcome::Failure, note))
        }
    }

    async fn sell(&mut self, ctx: &RobotContext) -> ActivityResult {
        let batch = ctx.inventory.take_up_to_foobars(SELL_BATCH).await?;
        if batch.is_empty() {
            return Ok((Outcome::NoOp, "no foobar to sell".to_string()));
        }

        ctx.pause(SELL_UNITS).await;
        let count = batch.len();
        let sold = batch
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let balance = ctx.inventory.settle_sale(batch).await?;
        Ok((
            Outcome::Success,
            format!("sold {count} foobar(s), balance {balance} euros: {sold}"),
        ))
    }

    async fn buy_robot(&mut self, ctx: &RobotContext) -> ActivityResult {
        let inventory = &ctx.inventory;
        let purchase = match inventory.purchase_robot(ROBOT_PRICE, ROBOT_FOO_COST).await {
            Ok(purchase) => purchase,
            Err(e) if e.is_shortage() => {
                return Ok((Outcome::NoOp, format!("cannot buy a robot: {e}")));
            }
            Err(e) => return Err(e),
        };

        let robot = purchase.robot;
        info!(robot = %self.number, new_robot = %robot, "Robot created");
        if ctx.spawner.send(robot).is_err() {
            debug!(
                robot = %self.number,
                new_robot = %robot,
                "Factory no longer launching robots"
            );
        }
        if robot.0 == ctx.robot_target {
            let count = robot.0;
            info!(robots = count, "SUCCESS! {count} robots in the factory");
            ctx.stop.cancel();
        }

        Ok((
            Outcome::Success,
            format!(
                "bought robot {robot} for {ROBOT_PRICE} euros and {} foo, balance {} euros",
                purchase.foos.len(),
                purchase.balance
            ),
        ))
    }
}
