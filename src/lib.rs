//! i18n-page-kit
//!
//! Helpers for assembling the translations of a page: JSON and ZIP readers,
//! key path lookup, base name derivation and deep merge with override
//! priority.

pub mod cli;
pub mod config;
pub mod input;
pub mod paths;
pub mod translation;
pub mod types;

pub use input::{
    ArchiveError,
    LoadError,
    ZipBundle,
    ZipEntry,
    read_json,
    read_json_file,
    read_translation_file,
    read_zip,
    read_zip_file,
};
pub use paths::get_base_name;
pub use translation::{
    build_translations,
    deep_merge,
    get_translation_value,
    get_translation_value_with,
    prop_by_path,
    prop_by_path_with,
};
pub use types::{
    Scalar,
    TranslationMap,
    TranslationValue,
};
