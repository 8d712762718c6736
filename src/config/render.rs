//! Render command configuration

use std::path::PathBuf;

use super::InputConfig;
use crate::cli::GraphFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: InputConfig,
    pub format: GraphFormat,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

impl_builder!(RenderOptionsBuilder => RenderOptions {
    input: InputConfig => with_input,
    format: GraphFormat => with_format,
    output: Option<PathBuf> => with_output,
    highlight_cycles: bool => with_highlight_cycles,
});
