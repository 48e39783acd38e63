//! Simulation shell around the zone store.
//!
//! `LifeCore` owns the running field plus the setup it was started from, so
//! a host can restart or fork a run. It counts generations and records
//! per-step perf stats. The scheduler that calls `step` lives in the host.
//!
//! - init/      - construction and config
//! - commands/  - edits from the host (toggle, load, clear)
//! - step/      - one generation with perf bookkeeping
//! - perf/      - timer + stats snapshot
//! - facade     - wasm-bindgen wrapper

use crate::domain::patterns::Pattern;
use crate::spatial::{Coord, Field};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use config::LifeConfig;
pub use facade::Life;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation
#[derive(Clone)]
pub struct LifeCore {
    field: Field,
    /// State the current run started from; `restart` returns here.
    setup: Field,

    generation: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LifeCore {
    /// Create an empty simulation with the given zone size (odd, positive).
    pub fn new(zone_size: i32) -> Result<Self, String> {
        init::create_life_core(&LifeConfig { zone_size, ..LifeConfig::default() })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self, String> {
        init::create_life_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = LifeConfig::from_json(json)?;
        init::create_life_core(&config)
    }

    pub fn field(&self) -> &Field { &self.field }

    pub fn setup_field(&self) -> &Field { &self.setup }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> usize { self.field.population() }

    pub fn zone_count(&self) -> usize { self.field.zone_count() }

    pub fn zone_size(&self) -> i32 { self.field.zone_size().get() }

    pub fn value_at(&self, x: i32, y: i32) -> u8 {
        self.field.value_at(Coord::new(x, y))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Replace the field with `pattern` and make it the new setup.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        commands::load_pattern(self, pattern)
    }

    pub fn load_pattern_json(&mut self, json: &str) -> Result<(), String> {
        let pattern = Pattern::from_json(json)?;
        self.load_pattern(&pattern);
        Ok(())
    }

    pub fn load_builtin(&mut self, name: &str) -> Result<(), String> {
        let pattern = Pattern::builtin(name)
            .ok_or_else(|| format!("unknown pattern '{}'", name))?;
        self.load_pattern(&pattern);
        Ok(())
    }

    /// Flip a cell of the running field.
    pub fn toggle(&mut self, x: i32, y: i32) {
        commands::toggle(self, x, y)
    }

    /// Remember the running field as the setup `restart` returns to.
    pub fn save_setup(&mut self) {
        commands::save_setup(self)
    }

    /// Back to the saved setup, generation 0.
    pub fn restart(&mut self) {
        commands::restart(self)
    }

    /// Independent copy of the whole simulation. Every field of the core is
    /// cloned, zone buffers included.
    pub fn fork(&self) -> LifeCore {
        self.clone()
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn step_many(&mut self, generations: u32) {
        for _ in 0..generations {
            step::step(self);
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
