//! Lookup configuration.
/// Settings file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
    load_from_file,
};
pub use types::{
    ConfigError,
    LookupSettings,
    ValidationError,
};
