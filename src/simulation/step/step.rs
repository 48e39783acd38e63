use super::{LifeCore, PerfTimer};

pub(super) fn step(core: &mut LifeCore) {
    if !core.perf_enabled {
        core.field.advance();
        core.generation += 1;
        return;
    }

    let (counters, step_ms) = PerfTimer::time(|| core.field.advance());
    core.generation += 1;
    core.perf_stats.record_step(&counters, step_ms, core.generation, &core.field);
}
