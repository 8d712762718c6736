//! Input configuration shared by every command

use std::path::PathBuf;

use crate::common::InputArgs;
use crate::graph::DanglingEdgePolicy;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct InputConfig {
    /// TOML file declaring the graphs
    pub path: PathBuf,
    /// Graph names to keep; empty keeps all
    pub graphs: Vec<String>,
    pub dangling: DanglingEdgePolicy,
}

impl InputConfig {
    pub fn builder() -> InputConfigBuilder {
        InputConfigBuilder::new()
    }
}

impl_builder!(InputConfigBuilder => InputConfig {
    path: PathBuf => with_path,
    graphs: Vec<String> => with_graphs,
    dangling: DanglingEdgePolicy => with_dangling,
});

impl From<InputArgs> for InputConfig {
    fn from(args: InputArgs) -> Self {
        Self {
            path: args.file,
            graphs: args.graph,
            dangling: args.dangling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::CyclesError;

    #[test]
    fn test_builder_requires_every_field() {
        let err = InputConfig::builder()
            .with_path(PathBuf::from("graphs.toml"))
            .with_graphs(vec![])
            .build()
            .unwrap_err();

        match err {
            CyclesError::ConfigurationError { message } => {
                assert_eq!(message, "Missing required field: dangling");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_from_input_args() {
        let config = InputConfig::from(InputArgs {
            file: PathBuf::from("fixtures.toml"),
            graph: vec!["a".to_string()],
            dangling: DanglingEdgePolicy::Drop,
        });

        assert_eq!(config.path, PathBuf::from("fixtures.toml"));
        assert_eq!(config.graphs, vec!["a"]);
        assert_eq!(config.dangling, DanglingEdgePolicy::Drop);
    }
}
