//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::graph::DanglingEdgePolicy;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// TOML file declaring the graphs under a top-level [graphs] table
    #[arg(
        value_name = "FILE",
        default_value = crate::constants::input::DEFAULT_GRAPHS_FILE,
        env = "ELEMENTARY_CYCLES_FILE"
    )]
    pub file: PathBuf,

    /// Only process these graphs (repeatable or comma-separated)
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_delimiter = ',',
        env = "ELEMENTARY_CYCLES_GRAPH"
    )]
    pub graph: Vec<String>,

    /// How to treat edges whose target is not a declared vertex
    #[arg(
        long,
        value_enum,
        default_value_t = DanglingEdgePolicy::Reject,
        env = "ELEMENTARY_CYCLES_DANGLING"
    )]
    pub dangling: DanglingEdgePolicy,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ELEMENTARY_CYCLES_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display per graph (shows all by default)
    #[arg(long, env = "ELEMENTARY_CYCLES_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CyclesError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CyclesError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CyclesError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct InputOnly {
        #[command(flatten)]
        input: InputArgs,
    }

    #[test]
    fn test_input_args_defaults() {
        let parsed = InputOnly::try_parse_from(["test"]).unwrap();

        assert_eq!(parsed.input.file, PathBuf::from("graphs.toml"));
        assert!(parsed.input.graph.is_empty());
        assert_eq!(parsed.input.dangling, DanglingEdgePolicy::Reject);
    }

    #[test]
    fn test_input_args_rejects_unknown_policy() {
        assert!(InputOnly::try_parse_from(["test", "--dangling", "ignore"]).is_err());
    }
}
