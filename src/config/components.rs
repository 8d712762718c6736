//! Components command configuration

use super::InputConfig;
use crate::cli::ListFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct ComponentsConfig {
    pub input: InputConfig,
    pub format: ListFormat,
}

impl ComponentsConfig {
    pub fn builder() -> ComponentsConfigBuilder {
        ComponentsConfigBuilder::new()
    }
}

impl_builder!(ComponentsConfigBuilder => ComponentsConfig {
    input: InputConfig => with_input,
    format: ListFormat => with_format,
});
