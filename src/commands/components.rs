//! Components command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{ComponentsConfig, InputConfig};
use crate::error::CyclesError;

impl FromCommand for ComponentsConfig {
    fn from_command(command: Commands) -> Result<Self, CyclesError> {
        match command {
            Commands::Components { input, format } => ComponentsConfig::builder()
                .with_input(InputConfig::from(input))
                .with_format(format)
                .build(),
            _ => Err(CyclesError::ConfigurationError {
                message: "Invalid command type for ComponentsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ComponentsConfig);

/// Execute the components command
pub fn execute_components_command(command: Commands) -> Result<()> {
    let config = ComponentsConfig::from_command(command)
        .wrap_err("Failed to parse components command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::components::ComponentsExecutor;
    ComponentsExecutor::execute(config)
}
