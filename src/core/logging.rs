//! Console logging for the JS host.
//!
//! On wasm32 this goes straight to the browser console. Native builds (tests,
//! benches) have no JS console, so the message is formatted and dropped.

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_silent_off_wasm() {
        let size = 384;
        console_log!("lattice {}x{}", size, size);
        console_warn!("bad config: {}", "oops");
    }
}
