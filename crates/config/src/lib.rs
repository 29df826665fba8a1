// Configuration loading

pub mod settings;

pub use settings::{LogSettings, OutputFormat, OutputSettings, Settings};
