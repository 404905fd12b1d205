use thiserror::Error;

/// Errors raised while loading a JSON document or a ZIP archive.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying read failed (missing file, permission, I/O fault)
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// The content is not valid UTF-8 JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The content is not a usable ZIP archive
    #[error("Invalid archive: {0}")]
    Archive(#[from] ArchiveError),
}

/// Errors raised while opening a ZIP archive or reading one of its members.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("{0}")]
    Malformed(#[from] rawzip::Error),

    #[error("Archive entry not found: {0}")]
    EntryNotFound(String),

    #[error("Unsupported compression method {method} for entry '{name}'")]
    UnsupportedCompression { name: String, method: String },

    /// Corrupt compressed data, or a size/CRC mismatch with the central directory
    #[error("Failed to decompress entry '{name}': {source}")]
    Decompress {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
