use wasm_bindgen::prelude::*;

use crate::domain::patterns::Pattern;
use crate::spatial::Coord;

use super::perf_stats::PerfStats;
use super::LifeCore;

fn js_err(message: String) -> JsValue {
    console_warn!("lifezone: {}", message);
    JsValue::from_str(&message)
}

#[wasm_bindgen]
pub struct Life {
    core: LifeCore,
}

#[wasm_bindgen]
impl Life {
    /// Create an empty simulation. Throws on an even or non-positive zone size.
    #[wasm_bindgen(constructor)]
    pub fn new(zone_size: i32) -> Result<Life, JsValue> {
        let core = LifeCore::new(zone_size).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Life, JsValue> {
        let core = LifeCore::from_config_json(&json).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() as u32 }

    #[wasm_bindgen(getter)]
    pub fn zone_count(&self) -> u32 { self.core.zone_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn zone_size(&self) -> i32 { self.core.zone_size() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === SETUP ===

    /// `{ "name": "...", "rows": [[0,1,...], ...] }`
    pub fn load_pattern_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_pattern_json(&json).map_err(js_err)
    }

    pub fn load_builtin(&mut self, name: String) -> Result<(), JsValue> {
        self.core.load_builtin(&name).map_err(js_err)
    }

    /// Throws when the soup is empty or too large.
    pub fn load_random(&mut self, width: u32, height: u32, seed: u32) -> Result<(), JsValue> {
        let pattern = Pattern::random(width as usize, height as usize, seed).map_err(js_err)?;
        self.core.load_pattern(&pattern);
        Ok(())
    }

    /// JSON array of built-in pattern names.
    pub fn builtin_patterns() -> String {
        serde_json::to_string(&Pattern::builtin_names()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn toggle(&mut self, x: i32, y: i32) {
        self.core.toggle(x, y);
    }

    pub fn save_setup(&mut self) {
        self.core.save_setup();
    }

    pub fn restart(&mut self) {
        self.core.restart();
    }

    pub fn fork(&self) -> Life {
        Life { core: self.core.fork() }
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === STEPPING ===

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn step_many(&mut self, generations: u32) {
        self.core.step_many(generations);
    }

    // === RENDER API ===

    pub fn value_at(&self, x: i32, y: i32) -> u8 {
        self.core.value_at(x, y)
    }

    /// Flattened `[x0, y0, x1, y1, ...]` addresses of stored zones.
    pub fn zone_addresses(&self) -> Vec<i32> {
        self.core
            .field()
            .zones()
            .flat_map(|zone| {
                let a = zone.address();
                [a.x, a.y]
            })
            .collect()
    }

    /// Row-major cells of one zone, or `undefined` if it is not stored.
    pub fn zone_cells(&self, zone_x: i32, zone_y: i32) -> Option<Vec<u8>> {
        self.core
            .field()
            .zone(Coord::new(zone_x, zone_y))
            .map(|zone| zone.cells().to_vec())
    }

    /// Row-major `width x height` cells starting at global `(x, y)`.
    /// Throws when the window is too large.
    pub fn window(&self, x: i32, y: i32, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
        self.core.field().window(Coord::new(x, y), width, height).map_err(js_err)
    }
}
