//! Lifezone Engine - Conway's Game of Life on an unbounded, sparsely
//! allocated plane, for native hosts and WASM.
//!
//! The plane is cut into fixed odd-sized zones that are allocated only where
//! something lives. Each generation is computed zone by zone from a frozen
//! snapshot, with births just outside existing zones picked up through
//! boundary candidates.
//!
//! Architecture:
//! - core/        - Macros and utilities
//! - spatial/     - Coordinate mapping, zones, the zone store and its step
//! - domain/      - Seed patterns
//! - simulation/  - Run shell (generations, restart, fork, perf) + WASM facade

// Utils with safety/log macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("lifezone engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::patterns::Pattern;
pub use simulation::{Life, LifeConfig, LifeCore, PerfStats};
pub use spatial::{Coord, Field, StepCounters, Zone, ZoneMapper, ZoneSize};
