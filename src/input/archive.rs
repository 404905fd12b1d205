//! ZIP archive reader.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;
use std::path::Path;

use flate2::read::DeflateDecoder;
use rawzip::{
    CompressionMethod,
    ZipArchive,
    ZipArchiveEntryWayfinder,
    ZipSliceArchive,
};
use rawzip::path::ZipFilePath;
use serde_json::Value;
use tokio::io::{
    AsyncRead,
    AsyncReadExt,
};

use super::json::parse_json;
use super::{
    ArchiveError,
    LoadError,
};

/// A member of a ZIP archive, as listed by its central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    /// Name exactly as stored in the archive; lookups match against it
    pub name: String,
    /// `name` with backslashes, `.`/`..` segments and leading `/` resolved,
    /// safe to join onto a local directory
    pub path: String,
    pub is_dir: bool,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
}

/// Listing data plus the location of the member inside the archive bytes.
struct IndexedEntry {
    /// Public listing data
    entry: ZipEntry,
    /// Compression method from the central directory
    method: CompressionMethod,
    /// Offsets and sizes used to reach the member data
    wayfinder: ZipArchiveEntryWayfinder,
}

/// An opened ZIP archive held in memory.
///
/// Opening only reads the central directory; members are decompressed on
/// demand by [`ZipBundle::read_entry`].
pub struct ZipBundle {
    /// The whole archive
    archive: ZipSliceArchive<Vec<u8>>,
    /// Central directory records, in archive order
    entries: Vec<IndexedEntry>,
}

impl fmt::Debug for ZipBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipBundle").field("entries", &self.entries().collect::<Vec<_>>()).finish()
    }
}

impl ZipBundle {
    /// Opens archive bytes already in memory.
    ///
    /// Every central directory record is listed under its stored name. Names
    /// that are not valid UTF-8 are decoded lossily.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ArchiveError> {
        let archive = ZipArchive::from_slice(bytes)?;

        let entries = index_entries(&archive)?;

        tracing::debug!(entries = entries.len(), "Opened ZIP archive");

        Ok(Self { archive, entries })
    }

    /// Lists every entry, directories included, in central directory order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &ZipEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    /// Lists the names of file entries.
    #[must_use]
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries().filter(|entry| !entry.is_dir).map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry stored as `name`; the last one wins when a name repeats.
    fn find(&self, name: &str) -> Option<&IndexedEntry> {
        self.entries.iter().rev().find(|indexed| indexed.entry.name == name)
    }

    /// Returns the decompressed content of the file entry `name`.
    ///
    /// # Errors
    /// - [`ArchiveError::EntryNotFound`] for an unknown name
    /// - [`ArchiveError::UnsupportedCompression`] for methods other than store and deflate
    /// - [`ArchiveError::Decompress`] for a corrupt deflate stream, or content
    ///   whose size or CRC differs from the central directory
    pub fn read_entry(&self, name: &str) -> Result<Vec<u8>, ArchiveError> {
        let indexed = self.find(name).ok_or_else(|| ArchiveError::EntryNotFound(name.to_string()))?;
        let entry = self.archive.get_entry(indexed.wayfinder)?;
        let data = entry.data();

        // Header sizes are untrusted: grow the buffer as data actually arrives.
        let mut content = Vec::new();
        let read = match &indexed.method {
            CompressionMethod::Store => entry.verifying_reader(data).read_to_end(&mut content),
            CompressionMethod::Deflate => {
                entry.verifying_reader(DeflateDecoder::new(data)).read_to_end(&mut content)
            }
            method => {
                return Err(ArchiveError::UnsupportedCompression {
                    name: name.to_string(),
                    method: format!("{method:?}"),
                });
            }
        };
        read.map_err(|source| ArchiveError::Decompress { name: name.to_string(), source })?;

        Ok(content)
    }

    /// Decodes the file entry `name` as JSON.
    pub fn read_json_entry(&self, name: &str) -> Result<Value, LoadError> {
        let content = self.read_entry(name)?;
        parse_json(&content)
    }
}

/// Reads the central directory into listing records.
fn index_entries(archive: &ZipSliceArchive<Vec<u8>>) -> Result<Vec<IndexedEntry>, ArchiveError> {
    let mut entries = Vec::new();
    let mut records = archive.entries();
    while let Some(record) = records.next_entry()? {
        let file_path = record.file_path();
        let raw: &[u8] = file_path.as_ref();
        let name = match String::from_utf8_lossy(raw) {
            Cow::Borrowed(name) => name.to_string(),
            Cow::Owned(name) => {
                tracing::warn!(name = %name, "Archive entry name is not valid UTF-8");
                name
            }
        };
        let path = String::from(ZipFilePath::from_str(&name));

        entries.push(IndexedEntry {
            entry: ZipEntry {
                name,
                path,
                is_dir: record.is_dir(),
                compressed_size: record.compressed_size_hint(),
                uncompressed_size: record.uncompressed_size_hint(),
            },
            method: record.compression_method(),
            wayfinder: record.wayfinder(),
        });
    }

    Ok(entries)
}

/// Reads a whole file-like handle and opens it as a ZIP archive.
pub async fn read_zip<R>(mut reader: R) -> Result<ZipBundle, LoadError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(ZipBundle::from_bytes(bytes)?)
}

/// Reads the ZIP archive at `path`.
///
/// # Errors
/// - [`LoadError::Read`] when the file cannot be opened or read
/// - [`LoadError::Archive`] when the content is not a valid archive
pub async fn read_zip_file(path: &Path) -> Result<ZipBundle, LoadError> {
    tracing::debug!(path = %path.display(), "Reading ZIP file");

    let file = tokio::fs::File::open(path).await?;
    read_zip(file).await
}
