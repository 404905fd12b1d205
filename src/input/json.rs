//! JSON document reader.

use std::path::Path;

use serde_json::Value;
use tokio::io::{
    AsyncRead,
    AsyncReadExt,
};

use super::LoadError;
use crate::types::TranslationValue;

/// Byte order mark some editors prepend to UTF-8 files.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a whole file-like handle and parses it as UTF-8 JSON.
pub async fn read_json<R>(mut reader: R) -> Result<Value, LoadError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    parse_json(&bytes)
}

/// Parses UTF-8 JSON bytes, skipping a leading byte order mark.
pub fn parse_json(bytes: &[u8]) -> Result<Value, LoadError> {
    let text = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(serde_json::from_slice(text)?)
}

/// Reads and parses the JSON file at `path`.
///
/// # Errors
/// - [`LoadError::Read`] when the file cannot be opened or read
/// - [`LoadError::Parse`] when the content is not valid JSON
pub async fn read_json_file(path: &Path) -> Result<Value, LoadError> {
    tracing::debug!(path = %path.display(), "Reading JSON file");

    let file = tokio::fs::File::open(path).await?;
    read_json(file).await
}

/// Reads the JSON file at `path` as a translation object.
pub async fn read_translation_file(path: &Path) -> Result<TranslationValue, LoadError> {
    read_json_file(path).await.map(TranslationValue::from)
}
