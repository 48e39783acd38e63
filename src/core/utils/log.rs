//! Host console logging.
//!
//! On `wasm32` messages go to the browser console through `web_sys`.
//! Native builds (tests, benches, embedding hosts) have no console import to
//! call, so the arguments are type-checked and dropped.

/// `console_log!("loaded {} cells", n)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console_warn!(...)`, same contract as `console_log!`.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
