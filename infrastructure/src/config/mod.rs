//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileModelConfig, FileReplConfig};
pub use loader::ConfigLoader;
