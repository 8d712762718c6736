//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{InputConfig, RenderOptions};
use crate::error::CyclesError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, CyclesError> {
        match command {
            Commands::Render {
                input,
                format,
                output,
                highlight_cycles,
            } => RenderOptions::builder()
                .with_input(InputConfig::from(input))
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(CyclesError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, GraphFormat};

    #[test]
    fn test_render_options_from_command() {
        let cli = Cli::try_parse_from([
            "elementary-cycles",
            "render",
            "--format",
            "mermaid",
            "--output",
            "out.mmd",
            "--graph",
            "pipeline",
        ])
        .unwrap();

        let options = RenderOptions::try_from(cli.command).unwrap();
        assert_eq!(options.format, GraphFormat::Mermaid);
        assert_eq!(options.output, Some(std::path::PathBuf::from("out.mmd")));
        assert!(options.highlight_cycles);
        assert_eq!(options.input.graphs, vec!["pipeline"]);
    }
}
