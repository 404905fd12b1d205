//! Pure transforms over translation objects: key path lookup and merge.

/// Key path resolution and translation lookup
mod lookup;
/// Deep merge and assembly of base and page translations
mod merge;

pub use lookup::{
    get_translation_value,
    get_translation_value_with,
    prop_by_path,
    prop_by_path_with,
};
pub use merge::{
    build_translations,
    deep_merge,
};
