//! Enumerate command configuration

use std::time::Duration;

use super::InputConfig;
use crate::cli::OutputFormat;
use crate::detector::DetectorOptions;

/// Configuration for the enumerate command
///
/// This struct contains all options for enumerating and reporting the
/// elementary cycles of the selected graphs.
#[derive(Debug, Clone)]
pub struct EnumerateConfig {
    /// Where the graphs come from
    pub input: InputConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to print per graph (None = all)
    pub max_cycles: Option<usize>,
    /// Search strongly connected components in parallel
    pub parallel: bool,
    /// Per-graph time limit
    pub timeout: Option<Duration>,
}

impl EnumerateConfig {
    pub fn builder() -> EnumerateConfigBuilder {
        EnumerateConfigBuilder::new()
    }

    pub fn detector_options(&self) -> DetectorOptions {
        DetectorOptions {
            parallel: self.parallel,
            deadline: self.timeout,
        }
    }
}

#[derive(Default)]
pub struct EnumerateConfigBuilder {
    input: Option<InputConfig>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
    parallel: Option<bool>,
    timeout: Option<Option<Duration>>,
}

impl EnumerateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: InputConfig) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl crate::common::ConfigBuilder for EnumerateConfigBuilder {
    type Config = EnumerateConfig;

    fn build(self) -> Result<Self::Config, crate::error::CyclesError> {
        let missing = |field: &str| crate::error::CyclesError::ConfigurationError {
            message: format!("Missing required field: {field}"),
        };

        Ok(EnumerateConfig {
            input: self.input.ok_or_else(|| missing("input"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
            max_cycles: self.max_cycles.ok_or_else(|| missing("max_cycles"))?,
            parallel: self.parallel.ok_or_else(|| missing("parallel"))?,
            timeout: self.timeout.ok_or_else(|| missing("timeout"))?,
        })
    }
}
