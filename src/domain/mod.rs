//! Domain data fed into the engine.

pub mod patterns;

pub use patterns::Pattern;
