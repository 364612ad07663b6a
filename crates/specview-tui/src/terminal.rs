//! Terminal setup, restoration and the render error boundary

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use specview_core::prelude::*;

thread_local! {
    static IN_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// Install a panic hook that restores the terminal
///
/// Panics raised inside [`catch_render_panic`] are only logged; the UI
/// keeps running and shows the crash panel instead.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if IN_BOUNDARY.with(Cell::get) {
            error!("Render panic: {}", panic_info);
            return;
        }
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run `f`, turning a panic into its message
pub fn catch_render_panic<R>(f: impl FnOnce() -> R) -> std::result::Result<R, String> {
    IN_BOUNDARY.with(|flag| flag.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    IN_BOUNDARY.with(|flag| flag.set(false));
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_render_panic_passes_value_through() {
        assert_eq!(catch_render_panic(|| 7), Ok(7));
    }

    #[test]
    fn test_catch_render_panic_captures_message() {
        let result: std::result::Result<(), String> =
            catch_render_panic(|| panic!("row {} out of range", 12));
        assert_eq!(result, Err("row 12 out of range".to_string()));

        let result: std::result::Result<(), String> = catch_render_panic(|| panic!("static"));
        assert_eq!(result, Err("static".to_string()));
    }
}
