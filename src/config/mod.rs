//! # Configuration Module
//!
//! This module provides configuration structures for all elementary-cycles
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InputConfig**: which file to read, which graphs to keep and how to
//!   treat dangling edges; shared by every command
//! - **EnumerateConfig**: Configuration for the `enumerate` command
//! - **ComponentsConfig**: Configuration for the `components` command
//! - **RenderOptions**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use elementary_cycles::cli::{GraphFormat, OutputFormat};
//! use elementary_cycles::common::ConfigBuilder;
//! use elementary_cycles::config::{EnumerateConfig, InputConfig, RenderOptions};
//! use elementary_cycles::graph::DanglingEdgePolicy;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = InputConfig::builder()
//!     .with_path("graphs.toml".into())
//!     .with_graphs(vec![])
//!     .with_dangling(DanglingEdgePolicy::Reject)
//!     .build()?;
//!
//! let config = EnumerateConfig::builder()
//!     .with_input(input.clone())
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .with_parallel(false)
//!     .with_timeout(None)
//!     .build()?;
//! assert!(config.error_on_cycles);
//!
//! // Builders refuse to guess missing fields
//! let incomplete = RenderOptions::builder()
//!     .with_input(input)
//!     .with_format(GraphFormat::Dot)
//!     .build();
//! assert!(incomplete.is_err());
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod enumerate;
pub mod input;
pub mod render;

pub use components::ComponentsConfig;
pub use enumerate::EnumerateConfig;
pub use input::InputConfig;
pub use render::RenderOptions;
