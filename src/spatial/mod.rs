//! Spatial layer - sparse zone storage for the unbounded plane.
//!
//! - coords  - global <-> (zone, local) mapping
//! - zone    - one S x S block with a staging buffer
//! - field   - zone store and the generation step

pub mod coords;
pub mod zone;
pub mod field;

pub use coords::{Coord, ZoneMapper, ZoneSize, NEIGHBOR_OFFSETS};
pub use field::{Field, StepCounters, MAX_WINDOW_CELLS};
pub use zone::Zone;
