//! Tracing initialization
//!
//! Diagnostics go to stderr so that reports on stdout stay machine-readable.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::logging::{DEFAULT_FILTER, LOG_ENV, VERBOSE_FILTER};

static INIT: Once = Once::new();

/// Install the global subscriber
///
/// Filter directives come from `ELEMENTARY_CYCLES_LOG`, for example
/// `ELEMENTARY_CYCLES_LOG=elementary_cycles::detector=trace`. Without it the
/// level is `warn`, or `debug` when `verbose` is set. Calling this more than
/// once has no further effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        // A host application may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("tracing initialized twice without panicking");
    }
}
