/// Aurora3D Engine - process-level lifecycle and logger management
///
/// Rendering contexts and backends are NOT globals in this engine: they are
/// created from an explicit `GraphicsConfig` and owned by the caller. The
/// only process-wide state is the logger slot the `engine_*!` macros write
/// through, managed here.
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};

/// Global logger (initialized with DefaultLogger on first use)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Engine lifecycle + logging entry points
///
/// # Example
///
/// ```no_run
/// use aurora_3d_engine::aurora3d::Engine;
///
/// Engine::initialize();
/// // ... create a rendering context, run the frame loop ...
/// Engine::shutdown();
/// ```
pub struct Engine;

impl Engine {
    /// Initialize the engine
    ///
    /// Installs the default logger if none is set and logs the startup line.
    /// Safe to call more than once.
    pub fn initialize() {
        Self::logger_slot();
        crate::engine_info!("aurora3d::Engine", "Engine initialized");
    }

    /// Shutdown the engine
    ///
    /// Resets the logger to the default implementation. Rendering contexts
    /// are owned by the caller and tear themselves down on drop.
    pub fn shutdown() {
        Self::reset_logger();
        crate::engine_info!("aurora3d::Engine", "Engine shut down");
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replaces the active logger with a custom implementation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aurora_3d_engine::aurora3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to the default colored console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger_slot().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by the `engine_trace!`/`engine_debug!`/`engine_info!`/
    /// `engine_warn!` macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the `engine_error!` macro to include the source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }

    fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
