use actor_framework::tracing::setup_tracing;
use foobartory::lifecycle::{Factory, FactoryConfig, FactoryError};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), FactoryError> {
    setup_tracing();

    let config = FactoryConfig::from_env()?;
    let report = Factory::new(config)
        .run()
        .instrument(tracing::info_span!("factory"))
        .await?;

    let levels = report.levels();
    info!(
        robots = levels.robots,
        foo = levels.foo,
        bar = levels.bar,
        foobar = levels.foobar,
        euros = levels.euros,
        sold = report.inventory.sold().len(),
        serials = report.inventory.serials_issued(),
        elapsed = ?report.elapsed,
        "Simulation finished"
    );
    Ok(())
}
