//! Line format for records written to X-Plane's `Log.txt`.

use std::fmt;

use log::Level;

/// Prefix identifying our lines among every other plugin's.
pub const LOG_PREFIX: &str = "[WindPressure]";

/// Render one record as a newline-terminated log line.
///
/// Interior NUL bytes are dropped since the host takes C strings.
pub fn format_line(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let mut line = format!("{LOG_PREFIX} {level} {target}: {args}\n");
    line.retain(|c| c != '\0');
    line
}
