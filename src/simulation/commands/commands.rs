use crate::domain::patterns::Pattern;
use crate::spatial::Coord;

use super::LifeCore;

pub(super) fn load_pattern(core: &mut LifeCore, pattern: &Pattern) {
    core.field.setup(pattern);
    core.setup.setup_copy(&core.field);
    core.generation = 0;
    console_log!(
        "lifezone: loaded '{}' ({}x{}, {} live cells, {} zones)",
        pattern.name(),
        pattern.width(),
        pattern.height(),
        pattern.live_count(),
        core.field.zone_count()
    );
}

pub(super) fn toggle(core: &mut LifeCore, x: i32, y: i32) {
    core.field.toggle_at(Coord::new(x, y));
}

pub(super) fn save_setup(core: &mut LifeCore) {
    core.setup.setup_copy(&core.field);
    core.generation = 0;
}

pub(super) fn restart(core: &mut LifeCore) {
    core.field.setup_copy(&core.setup);
    core.generation = 0;
    core.perf_stats.reset();
    console_log!("lifezone: restarted ({} live cells)", core.field.population());
}

pub(super) fn clear(core: &mut LifeCore) {
    core.field.clear();
    core.setup.clear();
    core.generation = 0;
    core.perf_stats.reset();
}
