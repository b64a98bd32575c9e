//! Diagnostic logging on stderr.
//!
//! User-facing status text is printed directly; the `log` macros only carry
//! diagnostics and stay quiet unless `NOTES_LOG` raises the level.

use flexi_logger::{Logger, LoggerHandle};

pub const LOG_ENV: &str = "NOTES_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Start the stderr logger. Keep the handle alive for the process lifetime.
pub fn init() -> Result<LoggerHandle, String> {
    let spec = level_spec(std::env::var(LOG_ENV).ok());
    Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid {LOG_ENV} value `{spec}`: {err}"))?
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

fn level_spec(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}
