//! Shared error type, query-generation configuration and random source.

pub mod config;
pub mod error;
pub mod picker;

pub use config::{
    load_config, load_config_file, load_config_json, merge, validate, ConfigOverride,
    ContentTypeWeights, QueryGenerationConfig, Thresholds, VisualDescriptors, Weights,
};
pub use error::{Error, Result};
pub use picker::{pick, shuffle, Picker, RandomPicker};
