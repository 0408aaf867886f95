use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the logging system, writing to the given log file
///
/// The console belongs to the menu, so records never go to stderr.
pub fn initialize_logging(
    log_file: &Path,
    level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Auto)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized at level {}", level);
    Ok(())
}

/// Helper function to format sensitive data for logging
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured logging for authentication events
pub fn log_auth_event(event_type: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Auth event: type={}, success=true, timestamp={}, details={:?}",
            event_type, timestamp, details
        );
    } else {
        warn!(
            "Auth event: type={}, success=false, timestamp={}, details={:?}",
            event_type, timestamp, details
        );
    }
}

/// Structured logging for contact store operations
pub fn log_data_operation(operation: &str, contact: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Data operation: op={}, contact={}, success=true, timestamp={}, details={:?}",
            operation,
            format_sensitive(contact),
            timestamp,
            details
        );
    } else {
        error!(
            "Data operation: op={}, contact={}, success=false, timestamp={}, details={:?}",
            operation,
            format_sensitive(contact),
            timestamp,
            details
        );
    }
}
