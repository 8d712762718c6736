//! Configuration constants for elementary-cycles
//!
//! Defaults used by the command-line surface. Most of them can be overridden
//! through flags or `ELEMENTARY_CYCLES_*` environment variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the cycle animation
    pub const SPINNER_FRAMES: &[&str] = &["🔁 ", "🔁◜", "🔁◝", "🔁◞", "🔁◟", "🔁○", "🔁◌", "🔁●"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Input file configuration
pub mod input {
    /// File read when no path is given
    pub const DEFAULT_GRAPHS_FILE: &str = "graphs.toml";

    /// Top-level table holding the named graphs
    pub const GRAPHS_TABLE: &str = "graphs";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directives
    pub const LOG_ENV: &str = "ELEMENTARY_CYCLES_LOG";

    /// Filter used when the variable is unset
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose`
    pub const VERBOSE_FILTER: &str = "debug";
}
