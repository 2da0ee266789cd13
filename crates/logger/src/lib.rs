use colored::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static LOG_LEVEL: AtomicUsize = AtomicUsize::new(0);

/// Logger is a static class that provides logging functionality.
///
/// # Examples
///
/// ```
/// use kompass_logger::Logger;
/// Logger::info("Hello, world!");
/// Logger::warn("This is a warning!");
/// Logger::error("This is an error!");
/// Logger::set_level(1);
/// Logger::debug("This is a debug message with level 1!", 1);
/// Logger::set_level(2);
/// Logger::debug("This is a debug message with level 2!", 2);
/// ```
pub struct Logger;

impl Logger {
    pub fn set_level(level: u8) {
        LOG_LEVEL.store(level as usize, Ordering::Relaxed);
    }

    pub fn info(msg: &str) {
        println!("{}", msg.blue());
    }

    pub fn warn(msg: &str) {
        println!("{}", msg.yellow());
    }

    pub fn error(msg: &str) {
        eprintln!("{}", msg.red());
    }

    pub fn debug(msg: &str, level: usize) {
        if LOG_LEVEL.load(Ordering::Relaxed) >= level {
            println!("{}", msg.magenta());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_levels() {
        Logger::set_level(2);

        // Should not print
        Logger::debug("Level 3 message", 3);

        // Should print
        Logger::debug("Level 2 message", 2);
        Logger::debug("Level 1 message", 1);
    }
}
