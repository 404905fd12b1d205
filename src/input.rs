//! File readers for translation documents and archives.
/// ZIP archive reader
mod archive;
/// Load error types
mod error;
/// JSON document reader
mod json;

pub use archive::{
    ZipBundle,
    ZipEntry,
    read_zip,
    read_zip_file,
};
pub use error::{
    ArchiveError,
    LoadError,
};
pub use json::{
    parse_json,
    read_json,
    read_json_file,
    read_translation_file,
};
