use gloo::console;

/// Console logger with a component tag so screen-level messages can be
/// told apart in the browser console.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(Self::tagged(component, message));
    }

    pub fn info(component: &str, message: &str) {
        console::info!(Self::tagged(component, message));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(Self::tagged(component, message));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(Self::tagged(component, message));
    }

    fn tagged(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_prefixes_component() {
        assert_eq!(
            Logger::tagged("MyBookings", "fetch failed"),
            "[MyBookings] fetch failed"
        );
    }
}
