//! Native browser dialogs.
//!
//! Form pages confirm submission with a blocking `alert()`, matching the
//! site's unconditional success paths. Off-browser builds are a no-op.

/// Show `message` in a browser alert box.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
