//! Zero-Cost Safety Macros
//!
//! Zone buffers are indexed on the hottest path of a generation step
//! (8 neighbour reads per cell). Local coordinates always come from the
//! coordinate mapper, so an out-of-range index is a programming error:
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use lifezone_engine::fast;
//!
//! let idx = 4; // centre of a 3x3 zone
//!
//! let cells = vec![0u8, 1, 0, 0, 1, 0, 0, 1, 0];
//! // Read: fast!(slice, [index])
//! let alive = *fast!(cells, [idx]);
//! assert_eq!(alive, 1);
//!
//! let mut staging = vec![0u8; 9];
//! // Write: fast!(slice, [index] = value)
//! fast!(staging, [idx] = 1);
//! assert_eq!(staging[idx], 1);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Only use it where the index is derived from a validated local coordinate.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let cells = vec![0u8, 0, 1, 0, 0];
        let val = *fast!(cells, [2]);
        assert_eq!(val, 1);
    }

    #[test]
    fn test_fast_write() {
        let mut cells = vec![0u8; 9];
        fast!(cells, [8] = 1);
        assert_eq!(cells[8], 1);
        assert_eq!(cells.iter().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let cells = vec![0u8; 9];
        let _ = *fast!(cells, [9]); // one past a 3x3 zone
    }
}
