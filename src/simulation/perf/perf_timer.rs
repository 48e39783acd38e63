//! Step clock. Browsers have no `Instant`, so wasm32 reads `Date.now()`
//! through js-sys and native builds use the monotonic clock.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn mark() -> Mark {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn mark() -> Mark {
    std::time::Instant::now()
}

// `Date.now()` is wall-clock and may step backwards.
#[cfg(target_arch = "wasm32")]
fn ms_since(start: Mark) -> f64 {
    (js_sys::Date::now() - start).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(start: Mark) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

pub(crate) struct PerfTimer;

impl PerfTimer {
    /// Run `work` and return its result with the elapsed milliseconds.
    pub(crate) fn time<T>(work: impl FnOnce() -> T) -> (T, f64) {
        let start = mark();
        let out = work();
        (out, ms_since(start))
    }
}
