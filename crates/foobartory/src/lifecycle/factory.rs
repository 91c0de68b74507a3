use super::config::FactoryConfig;
use super::error::FactoryError;
use crate::clients::InventoryClient;
use crate::inventory::{self, Inventory};
use crate::model::{RobotNumber, StockLevels};
use crate::robot::{Chance, Robot, RobotContext, RngChance};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// What a finished simulation leaves behind.
#[derive(Debug)]
pub struct SimulationReport {
    /// Every robot number handed out, ascending.
    pub robots_created: Vec<RobotNumber>,
    /// The inventory as the actor held it when it stopped, sold ledger included.
    pub inventory: Inventory,
    pub elapsed: Duration,
}

impl SimulationReport {
    pub fn levels(&self) -> StockLevels {
        self.inventory.levels()
    }
}

/// The running robots, the numbers handed out so far and the channel bought robots arrive on.
struct Crew {
    ctx: RobotContext,
    robots: JoinSet<u64>,
    created: Vec<RobotNumber>,
    spawn_rx: mpsc::UnboundedReceiver<RobotNumber>,
}

/// Runs one simulation: an inventory actor and a growing crew of robots.
pub struct Factory {
    config: FactoryConfig,
}

impl Factory {
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    fn chance_for(&self, number: RobotNumber) -> Box<dyn Chance> {
        match self.config.seed {
            Some(seed) => Box::new(RngChance::seeded(seed ^ u64::from(number.0))),
            None => Box::new(RngChance::from_entropy()),
        }
    }

    fn crew(&self, inventory: InventoryClient) -> Crew {
        let (spawner, spawn_rx) = mpsc::unbounded_channel();
        Crew {
            ctx: RobotContext {
                inventory,
                stop: CancellationToken::new(),
                spawner,
                time_scale: self.config.time_scale,
                robot_target: self.config.robot_target,
            },
            robots: JoinSet::new(),
            created: Vec::new(),
            spawn_rx,
        }
    }

    fn launch(&self, crew: &mut Crew, number: RobotNumber) {
        crew.created.push(number);
        let robot = Robot::new(number, self.chance_for(number));
        crew.robots.spawn(robot.run(crew.ctx.clone()));
    }

    /// Launches bought robots until the stop signal fires. Fails if every robot stops first.
    async fn supervise(&self, crew: &mut Crew) -> Result<(), FactoryError> {
        let stop = crew.ctx.stop.clone();
        loop {
            tokio::select! {
                biased;

                _ = stop.cancelled() => return Ok(()),
                Some(number) = crew.spawn_rx.recv() => self.launch(crew, number),
                joined = crew.robots.join_next() => match joined {
                    Some(Ok(completed)) => {
                        warn!(completed, "Robot stopped before the factory did");
                    }
                    Some(Err(e)) => return Err(FactoryError::RobotTask(e)),
                    None => {
                        return Err(FactoryError::Stalled {
                            target: self.config.robot_target,
                        });
                    }
                },
            }
        }
    }

    /// Runs until robot number `robot_target` is bought, then lets every robot finish its
    /// current activity and returns the final state.
    pub async fn run(self) -> Result<SimulationReport, FactoryError> {
        self.config.validate()?;
        let started = Instant::now();
        info!(
            time_scale = self.config.time_scale,
            seed = ?self.config.seed,
            robot_target = self.config.robot_target,
            initial_robots = self.config.initial_robots,
            "Factory starting"
        );

        let (actor, inventory) =
            inventory::with_inventory(Inventory::with_robot_limit(self.config.robot_target));
        let inventory_handle = tokio::spawn(actor.run());

        let mut crew = self.crew(inventory.clone());
        for _ in 0..self.config.initial_robots {
            let number = inventory.next_robot_number().await?;
            info!(robot = %number, "Robot created");
            self.launch(&mut crew, number);
        }

        self.supervise(&mut crew).await?;

        let Crew {
            ctx,
            mut robots,
            mut created,
            mut spawn_rx,
        } = crew;
        info!(
            running = robots.len(),
            "Stop signal received, waiting for robots"
        );
        let mut activities = 0;
        while let Some(joined) = robots.join_next().await {
            activities += joined.map_err(FactoryError::RobotTask)?;
        }

        drop(ctx);
        // bought but never launched
        while let Ok(number) = spawn_rx.try_recv() {
            debug!(robot = %number, "Robot bought during shutdown");
            created.push(number);
        }

        drop(inventory);
        let inventory = inventory_handle
            .await
            .map_err(FactoryError::InventoryTask)?;
        created.sort();

        let report = SimulationReport {
            robots_created: created,
            inventory,
            elapsed: started.elapsed(),
        };
        info!(
            robots = report.robots_created.len(),
            activities,
            elapsed = ?report.elapsed,
            "Factory stopped"
        );
        Ok(report)
    }
}
