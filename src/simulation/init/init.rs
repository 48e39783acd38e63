use crate::spatial::Field;

use super::config::LifeConfig;
use super::perf_stats::PerfStats;
use super::LifeCore;

pub(super) fn create_life_core(config: &LifeConfig) -> Result<LifeCore, String> {
    // Fails before any field exists.
    let zone_size = config.validate()?;

    console_log!("lifezone: new simulation, zone size {}", zone_size.get());

    Ok(LifeCore {
        field: Field::new(zone_size),
        setup: Field::new(zone_size),
        generation: 0,
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
    })
}
