//! Record file: durable storage for an exported row table
//!
//! Binary format:
//! ```text
//! [HEADER: 64 bytes]
//!   - magic: 8 bytes ("RADIX_DB")
//!   - version: 4 bytes (u32 LE)
//!   - flags: 4 bytes
//!   - row_count: 8 bytes (u64 LE)
//!   - checksum: 32 bytes (BLAKE3 of the uncompressed body)
//!   - reserved: 8 bytes
//!
//! [BODY: variable]
//!   - zstd-compressed bincode of the row list
//! ```
//!
//! The JSON format is a pretty-printed array of rows and carries no header.

use super::Checksum;
use crate::codec::Row;
use crate::{Error, Result, MAGIC, VERSION};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const HEADER_SIZE: usize = 64;
const COMPRESSION_LEVEL: i32 = 3;

/// On-disk encoding of a row table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// Header plus compressed bincode body
    #[default]
    Binary,
    /// Plain JSON array
    Json,
}

impl RecordFormat {
    /// `Json` for a `.json` extension, `Binary` otherwise
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RecordFormat::Json,
            _ => RecordFormat::Binary,
        }
    }
}

/// A row table read back from disk
#[derive(Clone, Debug)]
pub struct RecordFile {
    pub rows: Vec<Row>,
    /// Checksum of the encoded body
    pub checksum: Checksum,
}

/// Write `rows` to `path`, replacing any existing file
pub fn write_rows(path: impl AsRef<Path>, rows: &[Row], format: RecordFormat) -> Result<Checksum> {
    let path = path.as_ref();
    let (data, checksum) = match format {
        RecordFormat::Binary => encode_binary(rows)?,
        RecordFormat::Json => {
            let body = serde_json::to_vec_pretty(rows)?;
            let checksum = Checksum::digest(&body);
            (body, checksum)
        }
    };

    fs::write(path, &data)?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        bytes = data.len(),
        checksum = %checksum.short(),
        "wrote record file"
    );
    Ok(checksum)
}

/// Read a row table written by [`write_rows`]
pub fn read_rows(path: impl AsRef<Path>, format: RecordFormat) -> Result<RecordFile> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    let file = match format {
        RecordFormat::Binary => decode_binary(&data)?,
        RecordFormat::Json => RecordFile {
            rows: serde_json::from_slice(&data)?,
            checksum: Checksum::digest(&data),
        },
    };

    debug!(path = %path.display(), rows = file.rows.len(), "read record file");
    Ok(file)
}

fn encode_binary(rows: &[Row]) -> Result<(Vec<u8>, Checksum)> {
    let body = bincode::serialize(rows)?;
    let checksum = Checksum::digest(&body);
    let compressed = zstd::encode_all(body.as_slice(), COMPRESSION_LEVEL)?;

    let mut output = Vec::with_capacity(HEADER_SIZE + compressed.len());
    output.extend_from_slice(MAGIC);
    output.extend_from_slice(&VERSION.to_le_bytes());
    // flags: 0
    output.extend_from_slice(&0u32.to_le_bytes());
    output.extend_from_slice(&(rows.len() as u64).to_le_bytes());
    output.extend_from_slice(checksum.as_bytes());
    output.resize(HEADER_SIZE, 0);
    output.extend(compressed);

    Ok((output, checksum))
}

fn decode_binary(data: &[u8]) -> Result<RecordFile> {
    if data.len() < HEADER_SIZE {
        return Err(Error::InvalidFile(format!(
            "File is {} bytes, shorter than the header",
            data.len()
        )));
    }
    let (header, body) = data.split_at(HEADER_SIZE);

    if &header[0..8] != MAGIC {
        return Err(Error::InvalidFile("Invalid magic bytes".into()));
    }

    let version = u32::from_le_bytes(read_array(&header[8..12]));
    if version != VERSION {
        return Err(Error::VersionMismatch {
            expected: VERSION,
            found: version,
        });
    }

    let row_count = u64::from_le_bytes(read_array(&header[16..24]));
    let expected = Checksum::from_bytes(read_array(&header[24..56]));

    let decompressed = zstd::decode_all(body)?;
    let checksum = Checksum::digest(&decompressed);
    if checksum != expected {
        return Err(Error::ChecksumMismatch {
            expected: expected.to_hex(),
            found: checksum.to_hex(),
        });
    }

    let rows: Vec<Row> = bincode::deserialize(&decompressed)?;
    if rows.len() as u64 != row_count {
        return Err(Error::Corruption(format!(
            "Header declares {} rows, body holds {}",
            row_count,
            rows.len()
        )));
    }

    Ok(RecordFile { rows, checksum })
}

/// Copy a header field into a fixed-size array; callers pass exact-length slices
fn read_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
