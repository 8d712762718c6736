//! Enumerate command implementation

use std::time::Duration;

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{EnumerateConfig, InputConfig};
use crate::error::CyclesError;

impl FromCommand for EnumerateConfig {
    fn from_command(command: Commands) -> Result<Self, CyclesError> {
        match command {
            Commands::Enumerate {
                input,
                format,
                cycle_display,
                error_on_cycles,
                parallel,
                timeout_ms,
            } => EnumerateConfig::builder()
                .with_input(InputConfig::from(input))
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .with_parallel(parallel)
                .with_timeout(timeout_ms.map(Duration::from_millis))
                .build(),
            _ => Err(CyclesError::ConfigurationError {
                message: "Invalid command type for EnumerateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EnumerateConfig);

/// Execute the enumerate command
pub fn execute_enumerate_command(command: Commands) -> Result<()> {
    let config = EnumerateConfig::from_command(command)
        .wrap_err("Failed to parse enumerate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::enumerate::EnumerateExecutor;
    EnumerateExecutor::execute(config)
}
