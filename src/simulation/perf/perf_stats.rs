use wasm_bindgen::prelude::*;

use crate::spatial::{Field, StepCounters};

/// Snapshot of the last step. All zeros while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) generation: u32,
    pub(super) zones_scanned: u32,
    pub(super) candidates_checked: u32,
    pub(super) edge_births: u32,
    pub(super) zones_created: u32,
    pub(super) zones_removed: u32,
    pub(super) zone_count: u32,
    pub(super) population: u32,
    /// Zone buffers only (active + staging).
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    /// Overwrite the snapshot with one finished step.
    pub(crate) fn record_step(
        &mut self,
        counters: &StepCounters,
        step_ms: f64,
        generation: u64,
        field: &Field,
    ) {
        let zone_count = field.zone_count() as u32;
        *self = PerfStats {
            step_ms,
            generation: generation.min(u32::MAX as u64) as u32,
            zones_scanned: counters.zones_scanned,
            candidates_checked: counters.candidates_checked,
            edge_births: counters.edge_births,
            zones_created: counters.zones_created,
            zones_removed: counters.zones_removed,
            zone_count,
            population: field.population() as u32,
            memory_bytes: zone_count.saturating_mul(2 * field.zone_size().area() as u32),
        };
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn zones_scanned(&self) -> u32 { self.zones_scanned }
    #[wasm_bindgen(getter)]
    pub fn candidates_checked(&self) -> u32 { self.candidates_checked }
    #[wasm_bindgen(getter)]
    pub fn edge_births(&self) -> u32 { self.edge_births }
    #[wasm_bindgen(getter)]
    pub fn zones_created(&self) -> u32 { self.zones_created }
    #[wasm_bindgen(getter)]
    pub fn zones_removed(&self) -> u32 { self.zones_removed }
    #[wasm_bindgen(getter)]
    pub fn zone_count(&self) -> u32 { self.zone_count }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
