//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;

use flate2::Compression;
use flate2::Crc;
use flate2::write::DeflateEncoder;

const METHOD_STORE: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// Header values written for one member.
struct Header {
    crc: u32,
    uncompressed_size: u64,
}

/// Minimal ZIP writer producing single-disk archives.
///
/// Only a declared size of `u32::MAX` or more adds an extra field (ZIP64).
#[derive(Default)]
pub struct ZipFixture {
    body: Vec<u8>,
    central: Vec<u8>,
    count: u16,
}

impl ZipFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(mut self, name: &str, content: &[u8]) -> Self {
        self.add(name, METHOD_STORE, content.to_vec(), Header::of(content));
        self
    }

    pub fn deflated(mut self, name: &str, content: &[u8]) -> Self {
        self.add(name, METHOD_DEFLATE, deflate(content), Header::of(content));
        self
    }

    /// Adds raw member data under any method id, headers describing `data`.
    pub fn with_method(mut self, name: &str, data: &[u8], method: u16) -> Self {
        self.add(name, method, data.to_vec(), Header::of(data));
        self
    }

    /// Adds a deflated member whose headers claim `declared_size` bytes.
    pub fn deflated_with_size(mut self, name: &str, content: &[u8], declared_size: u64) -> Self {
        let header = Header { uncompressed_size: declared_size, ..Header::of(content) };
        self.add(name, METHOD_DEFLATE, deflate(content), header);
        self
    }

    /// Adds a stored member whose headers carry the CRC of `claimed`.
    pub fn stored_with_crc_of(mut self, name: &str, content: &[u8], claimed: &[u8]) -> Self {
        let header = Header { crc: Header::of(claimed).crc, ..Header::of(content) };
        self.add(name, METHOD_STORE, content.to_vec(), header);
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.add(name, METHOD_STORE, Vec::new(), Header::of(b""));
        self
    }

    fn add(&mut self, name: &str, method: u16, data: Vec<u8>, header: Header) {
        let crc = header.crc;
        let offset = u32::try_from(self.body.len()).unwrap();
        let name_len = u16::try_from(name.len()).unwrap();
        let compressed_size = u32::try_from(data.len()).unwrap();
        let (uncompressed_size, extra) = match u32::try_from(header.uncompressed_size) {
            Ok(size) if size != u32::MAX => (size, Vec::new()),
            _ => {
                let mut extra = Vec::new();
                extra.extend_from_slice(&0x0001_u16.to_le_bytes());
                extra.extend_from_slice(&8_u16.to_le_bytes());
                extra.extend_from_slice(&header.uncompressed_size.to_le_bytes());
                (u32::MAX, extra)
            }
        };
        let extra_len = u16::try_from(extra.len()).unwrap();
        let external_attributes: u32 = if name.ends_with('/') { 0x10 } else { 0 };

        let local = &mut self.body;
        local.extend_from_slice(&0x0403_4b50_u32.to_le_bytes());
        local.extend_from_slice(&20_u16.to_le_bytes());
        local.extend_from_slice(&0_u16.to_le_bytes());
        local.extend_from_slice(&method.to_le_bytes());
        local.extend_from_slice(&0_u16.to_le_bytes());
        local.extend_from_slice(&0x21_u16.to_le_bytes());
        local.extend_from_slice(&crc.to_le_bytes());
        local.extend_from_slice(&compressed_size.to_le_bytes());
        local.extend_from_slice(&uncompressed_size.to_le_bytes());
        local.extend_from_slice(&name_len.to_le_bytes());
        local.extend_from_slice(&0_u16.to_le_bytes());
        local.extend_from_slice(name.as_bytes());
        local.extend_from_slice(&data);

        let central = &mut self.central;
        central.extend_from_slice(&0x0201_4b50_u32.to_le_bytes());
        central.extend_from_slice(&20_u16.to_le_bytes());
        central.extend_from_slice(&20_u16.to_le_bytes());
        central.extend_from_slice(&0_u16.to_le_bytes());
        central.extend_from_slice(&method.to_le_bytes());
        central.extend_from_slice(&0_u16.to_le_bytes());
        central.extend_from_slice(&0x21_u16.to_le_bytes());
        central.extend_from_slice(&crc.to_le_bytes());
        central.extend_from_slice(&compressed_size.to_le_bytes());
        central.extend_from_slice(&uncompressed_size.to_le_bytes());
        central.extend_from_slice(&name_len.to_le_bytes());
        central.extend_from_slice(&extra_len.to_le_bytes());
        central.extend_from_slice(&0_u16.to_le_bytes());
        central.extend_from_slice(&0_u16.to_le_bytes());
        central.extend_from_slice(&0_u16.to_le_bytes());
        central.extend_from_slice(&external_attributes.to_le_bytes());
        central.extend_from_slice(&offset.to_le_bytes());
        central.extend_from_slice(name.as_bytes());
        central.extend_from_slice(&extra);

        self.count += 1;
    }

    pub fn finish(self) -> Vec<u8> {
        let central_offset = u32::try_from(self.body.len()).unwrap();
        let central_size = u32::try_from(self.central.len()).unwrap();

        let mut archive = self.body;
        archive.extend_from_slice(&self.central);
        archive.extend_from_slice(&0x0605_4b50_u32.to_le_bytes());
        archive.extend_from_slice(&0_u16.to_le_bytes());
        archive.extend_from_slice(&0_u16.to_le_bytes());
        archive.extend_from_slice(&self.count.to_le_bytes());
        archive.extend_from_slice(&self.count.to_le_bytes());
        archive.extend_from_slice(&central_size.to_le_bytes());
        archive.extend_from_slice(&central_offset.to_le_bytes());
        archive.extend_from_slice(&0_u16.to_le_bytes());
        archive
    }
}

impl Header {
    fn of(content: &[u8]) -> Self {
        let mut crc = Crc::new();
        crc.update(content);
        Self { crc: crc.sum(), uncompressed_size: u64::try_from(content.len()).unwrap() }
    }
}

fn deflate(content: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content).unwrap();
    encoder.finish().unwrap()
}
